use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Create or overwrite `path` with `content`.
    async fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
