pub mod config;
pub mod error;
pub mod generate;
pub mod git;
pub mod output;
pub mod patterns;
pub mod strategy;
pub mod ui;
pub mod version;

pub use error::{GitSemverError, Result};
