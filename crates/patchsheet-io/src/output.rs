//! Output location of the generated workbook

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for generated sheets: the user's download directory,
/// else the current directory
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the workbook for a sheet name: `<dir>/<sheet_name>.xlsx`
pub fn output_path(dir: &Path, sheet_name: &str) -> PathBuf {
    dir.join(format!("{}.xlsx", sheet_name))
}

/// Create the output directory tree if it does not exist
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("/shows/tour"), "Spring Tour 2024");
        assert_eq!(path, PathBuf::from("/shows/tour/Spring Tour 2024.xlsx"));
    }

    #[test]
    fn test_dotted_name_keeps_full_stem() {
        let path = output_path(Path::new("out"), "v1.2");
        assert_eq!(path.file_name().unwrap(), "v1.2.xlsx");
    }

    #[test]
    fn test_ensure_output_dir() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("a").join("b");
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Existing directory is fine
        ensure_output_dir(&dir).unwrap();
    }
}
