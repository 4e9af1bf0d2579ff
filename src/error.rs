//! Error handling for the scaffolder application.
//! Defines custom error types and results used throughout the application.

use colored::Colorize;
use thiserror::Error;

/// Custom error types for scaffolder operations.
///
/// Every variant except `Vcs` is fatal for a run. `Vcs` is downgraded to a
/// warning by the caller because the project itself is already in place.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project name is required. Usage: scaffolder <project-name> [options]")]
    MissingProjectName,

    #[error(
        "Invalid project name '{name}'. Use only letters, numbers, hyphens and underscores"
    )]
    InvalidName { name: String },

    #[error("Directory '{path}' already exists")]
    DirectoryExists { path: String },

    #[error("Unknown template '{template}'. Available templates: {available}")]
    UnknownTemplate { template: String, available: String },

    #[error("Option '{flag}' requires a value")]
    MissingFlagValue { flag: String },

    #[error("Argument '{argument}' is not valid UTF-8")]
    InvalidArgument { argument: String },

    /// A blueprint entry that would land outside the project root.
    #[error("Refusing to write outside the project root: '{path}'")]
    InvalidPath { path: String },

    #[error("Template produced '{path}' more than once")]
    DuplicatePath { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template rendering error: {0}")]
    RenderError(#[from] minijinja::Error),

    #[error("Manifest serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Repository initialization failures. Not fatal for a run.
    #[error("Git initialization failed: {0}")]
    Vcs(#[from] git2::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints `✗ Error: <message>` to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{} {}", "✗ Error:".red().bold(), err);
    std::process::exit(1);
}
