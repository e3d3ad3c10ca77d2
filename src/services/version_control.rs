use async_trait::async_trait;

use crate::error::AppResult;

/// Read-only view of a working tree, scoped to the root it was opened at.
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Paths changed since the last commit, in the order the backend reports them.
    async fn changed_files(&self) -> AppResult<Vec<String>>;
    /// Unified diff of a single path against the last commit.
    async fn file_diff(&self, path: &str) -> AppResult<String>;
}
