//! Common constants used throughout the scaffolder application.

/// Binary name used in help output and the generated README footer
pub const APP_NAME: &str = "scaffolder";

/// Allowed project name characters
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Template used when `--template` is not given
pub const DEFAULT_TEMPLATE: &str = "basic";

/// Manifest file name written by every template
pub const MANIFEST_FILE: &str = "package.json";

/// Ignore file name written by every template
pub const IGNORE_FILE: &str = ".gitignore";

pub const README_FILE: &str = "README.md";

/// Message of the single commit created by `--git`
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Committer e-mail used when no git identity is configured
pub const FALLBACK_COMMIT_EMAIL: &str = "scaffolder@localhost";
