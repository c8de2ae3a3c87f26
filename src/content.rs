use std::fs;
use std::path::Path;

use crate::error::Result;

/// Supplies raw text for an artifact path. Kept behind a trait so the
/// pipeline can be driven by an in-memory map in tests.
pub trait ContentLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads artifacts from the local filesystem.
pub struct FsLoader;

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fs_loader_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}").unwrap();

        let content = FsLoader.load(file.path()).unwrap();
        assert_eq!(content, "fn main() {}");
    }

    #[test]
    fn test_fs_loader_missing_file() {
        let result = FsLoader.load(Path::new("/nonexistent/artifact.rs"));
        assert!(result.is_err());
    }
}
