//! Patchsheet - DMX fixture patch sheet generator
//!
//! Interactive front end: collects fixture batches from the operator,
//! validates them against the patch, and writes the grouped sheet.

pub mod app;
pub mod config;
pub mod logging_setup;
pub mod prompt;

pub use app::{collect_session, run};
pub use config::AppConfig;
pub use prompt::Prompter;
