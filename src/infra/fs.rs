use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::services::FileStore;

/// Local filesystem; relative paths resolve against `base_dir`.
pub struct LocalFileStore {
    base_dir: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let target = self.base_dir.join(path);
        debug!(path = %target.display(), bytes = content.len(), "writing file");
        tokio::fs::write(&target, content).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn resolves_relative_paths_against_base() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().to_path_buf());

        store.write(Path::new("NOTES.md"), "hello").await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("NOTES.md")).unwrap();
        assert_eq!(written, "hello");
    }

    #[tokio::test]
    async fn keeps_absolute_paths() {
        let base = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let store = LocalFileStore::new(base.path().to_path_buf());
        let target = other.path().join("OUT.md");

        store.write(&target, "content").await.unwrap();

        assert_eq!(std::fs::read_to_string(target).unwrap(), "content");
        assert!(!base.path().join("OUT.md").exists());
    }
}
