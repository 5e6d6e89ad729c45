// Library crate exposing modules for the binary and integration tests

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod progress;
pub mod record;
pub mod reporter;
pub mod scanner;

pub use app::{Outcome, run};
pub use config::Config;
pub use record::FileRecord;
