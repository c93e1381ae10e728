use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    base_dir: TempDir,
}

#[allow(dead_code)]
impl TempFileManager {
    pub fn new() -> io::Result<Self> {
        let base_dir = tempfile::Builder::new().prefix("railbuild-cli").tempdir()?;
        Ok(Self { base_dir })
    }

    pub fn base(&self) -> &Path {
        self.base_dir.path()
    }

    /// Path inside the scratch directory; the file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn create_compressed(&self, name: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.path(name);
        let packed = zstd::bulk::compress(content.as_bytes(), 3)?;
        fs::write(&path, packed)?;
        Ok(path)
    }

    /// Path as the `&str` argument the CLI expects.
    pub fn arg(path: &Path) -> &str {
        path.to_str().expect("utf-8 temp path")
    }
}
