use crate::error::{AppError, AppResult};

/// A markdown file to create. Both fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFileRequest {
    file_name: String,
    content: String,
}

impl MarkdownFileRequest {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> AppResult<Self> {
        let file_name = file_name.into();
        let content = content.into();

        if file_name.is_empty() {
            return Err(AppError::Validation(
                "markdown file name must not be empty".to_string(),
            ));
        }
        if content.is_empty() {
            return Err(AppError::Validation(
                "markdown content must not be empty".to_string(),
            ));
        }

        Ok(Self { file_name, content })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(
            MarkdownFileRequest::new("", "hello"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            MarkdownFileRequest::new("NOTES.md", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn keeps_fields_as_given() {
        let request = MarkdownFileRequest::new("NOTES.md", "hello").unwrap();
        assert_eq!(request.file_name(), "NOTES.md");
        assert_eq!(request.content(), "hello");
    }
}
