//! scaffolder creates new projects from a fixed set of built-in templates.
//! It validates the requested name, writes the template's directory tree and
//! files, and can optionally initialize a git repository.

/// Command-line interface module for the scaffolder application
pub mod cli;

/// Validated project configuration and the template selector
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the scaffolder application
pub mod error;

/// Best-effort git repository initialization
pub mod git;

pub mod logger;

/// Writes generated blueprints to disk
pub mod processor;

/// Template rendering
pub mod renderer;

/// Built-in template layouts, manifests and README generation
pub mod templates;
