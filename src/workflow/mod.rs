pub mod commit_message;
pub mod markdown;
