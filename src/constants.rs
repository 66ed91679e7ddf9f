//! Application-wide constants
//!
//! Program names and file names shared between the menu model and the
//! launcher, providing a single source of truth for constant values.

/// External batch programs driven from the menu
pub mod programs {
    /// Generates the main audio files
    pub const CREAR_AUDIOS_MAIN: &str = "generar_audios_main.exe";

    /// Renames and organizes audio files using the fragment lists
    pub const RENOMBRAR_AUDIOS: &str = "generar_nombres_audios.exe";

    /// Renders the subtitle images
    pub const CREAR_SUBTITULOS: &str = "imagenes.exe";

    /// Normalizes the volume of the existing audio files
    pub const REPARAR_VOLUMEN: &str = "normalizar_audios.exe";
}

/// Fragment list handoff to the renaming program
pub mod fragments {
    /// File read by the renaming program, written next to the launcher
    pub const FILE_NAME: &str = "cantidadFragmentos.txt";

    /// Pre-filled value for both fragment prompts
    pub const DEFAULT_COUNTS: &str = "2,3,1,2";
}
