use std::path::Path;

use tracing::info;

use crate::domain::markdown::MarkdownFileRequest;
use crate::error::{AppError, AppResult};
use crate::services::FileStore;

pub const CHANGELOG_FILE_NAME: &str = "COMMITS.md";
pub const CHANGELOG_CONTENT: &str =
    "# Changelog\n\n- Added AI commit message generator\n- Implemented Markdown file creation tool";

/// Write the requested file, replacing any previous content.
pub async fn write_markdown_file(
    file_store: &dyn FileStore,
    request: &MarkdownFileRequest,
) -> AppResult<String> {
    let path = Path::new(request.file_name());
    file_store
        .write(path, request.content())
        .await
        .map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!(file = request.file_name(), "markdown file written");
    Ok(format!(
        "Markdown file '{}' created successfully.",
        request.file_name()
    ))
}

pub fn changelog_request() -> AppResult<MarkdownFileRequest> {
    MarkdownFileRequest::new(CHANGELOG_FILE_NAME, CHANGELOG_CONTENT)
}
