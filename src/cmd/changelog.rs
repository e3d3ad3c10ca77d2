use crate::error::AppResult;
use crate::services::FileStore;
use crate::workflow::markdown::{changelog_request, write_markdown_file};

pub async fn run(file_store: &dyn FileStore) -> AppResult<String> {
    let request = changelog_request()?;
    write_markdown_file(file_store, &request).await
}
