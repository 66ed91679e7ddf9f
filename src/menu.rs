//! The fixed action menu
//!
//! Five buttons, each knowing its caption, the program it launches and the
//! confirmation shown before it runs. The texts are the user-facing strings
//! of the audio batch toolchain.

use crate::constants::programs;

/// One button of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RenombrarAudios,
    CrearAudiosMain,
    CrearSubtitulos,
    RepararVolumen,
    Salir,
}

/// Yes/no gate shown before an action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub text: &'static str,
}

impl MenuAction {
    /// Menu order, top to bottom.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::RenombrarAudios,
        MenuAction::CrearAudiosMain,
        MenuAction::CrearSubtitulos,
        MenuAction::RepararVolumen,
        MenuAction::Salir,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::RenombrarAudios => "Renombrar Audios",
            MenuAction::CrearAudiosMain => "Crear Audios Main",
            MenuAction::CrearSubtitulos => "Crear Subtitulos (Imagenes)",
            MenuAction::RepararVolumen => "Reparar Volumen Audios",
            MenuAction::Salir => "Salir",
        }
    }

    /// Program the action launches. `Salir` closes the window instead.
    pub fn program(&self) -> Option<&'static str> {
        match self {
            MenuAction::RenombrarAudios => Some(programs::RENOMBRAR_AUDIOS),
            MenuAction::CrearAudiosMain => Some(programs::CREAR_AUDIOS_MAIN),
            MenuAction::CrearSubtitulos => Some(programs::CREAR_SUBTITULOS),
            MenuAction::RepararVolumen => Some(programs::REPARAR_VOLUMEN),
            MenuAction::Salir => None,
        }
    }

    /// Confirmation gate, if the action has one. "Crear Audios Main" and
    /// "Salir" run unprompted.
    pub fn confirmation(&self) -> Option<Confirmation> {
        match self {
            MenuAction::RenombrarAudios => Some(Confirmation {
                title: "Confirmacion",
                text: "¿Esta listo para comenzar el renombrado y organizacion automatica?",
            }),
            MenuAction::CrearSubtitulos => Some(Confirmation {
                title: "Advertencia",
                text: "Recuerde: Debe tener los nuevos personajes en la carpeta 'personajes' y haber actualizado el archivo 'TXT Excel.txt' antes de continuar.\n\n¿Desea continuar?",
            }),
            MenuAction::RepararVolumen => Some(Confirmation {
                title: "Advertencia Importante",
                text: "\u{26A0} ATENCION: Este programa sobrescribira los archivos MP3 de la carpeta 'Audios'. ¡Cree una copia de seguridad antes de continuar!\n\n¿Desea continuar?",
            }),
            MenuAction::CrearAudiosMain | MenuAction::Salir => None,
        }
    }

    /// Status line shown when the user backs out of the confirmation.
    pub fn cancelled_message(&self) -> &'static str {
        match self {
            MenuAction::RenombrarAudios => "Operacion 'Renombrar Audios' cancelada.",
            MenuAction::CrearAudiosMain => "Operacion 'Crear Audios Main' cancelada.",
            MenuAction::CrearSubtitulos => "Operacion 'Crear Subtitulos' cancelada.",
            MenuAction::RepararVolumen => "Operacion 'Reparar Volumen Audios' cancelada.",
            MenuAction::Salir => "Operacion 'Salir' cancelada.",
        }
    }

    /// True for the action that collects the fragment lists before launching.
    pub fn needs_fragments(&self) -> bool {
        matches!(self, MenuAction::RenombrarAudios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_matches_the_window() {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            [
                "Renombrar Audios",
                "Crear Audios Main",
                "Crear Subtitulos (Imagenes)",
                "Reparar Volumen Audios",
                "Salir",
            ]
        );
    }

    #[test]
    fn test_programs_behind_the_buttons() {
        assert_eq!(
            MenuAction::RenombrarAudios.program(),
            Some("generar_nombres_audios.exe")
        );
        assert_eq!(
            MenuAction::CrearAudiosMain.program(),
            Some("generar_audios_main.exe")
        );
        assert_eq!(MenuAction::CrearSubtitulos.program(), Some("imagenes.exe"));
        assert_eq!(
            MenuAction::RepararVolumen.program(),
            Some("normalizar_audios.exe")
        );
        assert_eq!(MenuAction::Salir.program(), None);
    }

    #[test]
    fn test_only_risky_actions_ask_for_confirmation() {
        assert!(MenuAction::RenombrarAudios.confirmation().is_some());
        assert!(MenuAction::CrearSubtitulos.confirmation().is_some());
        assert!(MenuAction::RepararVolumen.confirmation().is_some());
        assert!(MenuAction::CrearAudiosMain.confirmation().is_none());
        assert!(MenuAction::Salir.confirmation().is_none());
    }

    #[test]
    fn test_only_renaming_collects_fragments() {
        assert!(MenuAction::RenombrarAudios.needs_fragments());
        assert!(!MenuAction::CrearAudiosMain.needs_fragments());
        assert!(!MenuAction::CrearSubtitulos.needs_fragments());
        assert!(!MenuAction::RepararVolumen.needs_fragments());
    }

    #[test]
    fn test_cancelled_message_shortens_the_subtitles_label() {
        assert_eq!(
            MenuAction::CrearSubtitulos.cancelled_message(),
            "Operacion 'Crear Subtitulos' cancelada."
        );
        assert_eq!(
            MenuAction::RenombrarAudios.cancelled_message(),
            "Operacion 'Renombrar Audios' cancelada."
        );
    }
}
