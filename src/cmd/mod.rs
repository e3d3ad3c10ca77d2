pub mod changelog;
pub mod commit;
pub mod config;
pub mod diff;
