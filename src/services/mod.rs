pub mod file_store;
pub mod language_model;
pub mod version_control;

pub use file_store::FileStore;
pub use language_model::LanguageModelService;
pub use version_control::VersionControlService;
