pub mod change;
pub mod markdown;
pub mod message;
