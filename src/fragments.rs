//! Fragment list handoff between the GUI prompts and the renaming program
//!
//! The renaming program reads `cantidadFragmentos.txt`: line one holds the
//! fragment counts for the odd-positioned audio files, line two the counts
//! for the even-positioned ones, both comma-separated. The file is rewritten
//! in full on every run; the values themselves are opaque to the launcher.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Fragment counts typed by the user, one list per parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentLists {
    pub odd: String,
    pub even: String,
}

impl FragmentLists {
    /// Builds the pair, trimming surrounding whitespace from both lists.
    pub fn new(odd: &str, even: &str) -> Self {
        Self {
            odd: odd.trim().to_string(),
            even: even.trim().to_string(),
        }
    }

    /// Exact file body consumed by the renaming program.
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.odd, self.even)
    }

    /// Overwrites `path` with the rendered lists.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("No se pudo escribir en '{}'", path.display()))?;
        info!(path = %path.display(), "Wrote fragment lists");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_two_terminated_lines() {
        let lists = FragmentLists::new("2,3,1,2", "2,3,1,2");
        assert_eq!(lists.render(), "2,3,1,2\n2,3,1,2\n");
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let lists = FragmentLists::new("  2,3,1,2 \n", "\t4,4");
        assert_eq!(lists.odd, "2,3,1,2");
        assert_eq!(lists.even, "4,4");
    }

    #[test]
    fn test_write_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cantidadFragmentos.txt");

        FragmentLists::new("2,3,1,2", "1,1,1").write_to(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2,3,1,2\n1,1,1\n"
        );
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cantidadFragmentos.txt");
        std::fs::write(&path, "9,9,9,9,9,9,9\n9,9,9\nsobrante\n").unwrap();

        FragmentLists::new("2,3", "4,5").write_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2,3\n4,5\n");
    }

    #[test]
    fn test_write_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_existe").join("cantidadFragmentos.txt");

        let err = FragmentLists::new("1", "2").write_to(&path).unwrap_err();
        assert!(err.to_string().contains("No se pudo escribir en"));
        assert!(err.to_string().contains("cantidadFragmentos.txt"));
    }
}
