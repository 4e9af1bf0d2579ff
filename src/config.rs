//! Project configuration for scaffolder.
//! Turns the raw command-line arguments into a validated `ProjectConfig`.

use crate::cli::Args;
use crate::constants::PROJECT_NAME_PATTERN;
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROJECT_NAME_PATTERN).expect("project name regex"));

/// The built-in project layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Basic,
    Web,
    Api,
    Cli,
    Fullstack,
}

impl Template {
    pub const ALL: [Template; 5] =
        [Template::Basic, Template::Web, Template::Api, Template::Cli, Template::Fullstack];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Basic => "basic",
            Template::Web => "web",
            Template::Api => "api",
            Template::Cli => "cli",
            Template::Fullstack => "fullstack",
        }
    }

    /// Comma separated list of template names, for error messages.
    pub fn available() -> String {
        Self::ALL.iter().map(Template::name).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|template| template.name() == s).ok_or_else(|| {
            Error::UnknownTemplate { template: s.to_string(), available: Self::available() }
        })
    }
}

/// Everything needed to create one project. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: String,
    pub template: Template,
    pub git_init: bool,
    pub author: String,
}

pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME_RE.is_match(name)
}

/// Validates parsed arguments against the working directory `base_dir`.
///
/// # Order
/// 1. Project name pattern
/// 2. Target directory must not exist
/// 3. Template must be known
///
/// The first failing check is reported. Nothing is written to disk.
///
/// # Returns
/// * `Result<(ProjectConfig, PathBuf)>` - The configuration and the project root
pub fn validate<P: AsRef<Path>>(args: Args, base_dir: P) -> Result<(ProjectConfig, PathBuf)> {
    let project_name = args.project_name.ok_or(Error::MissingProjectName)?;
    if !is_valid_project_name(&project_name) {
        return Err(Error::InvalidName { name: project_name });
    }

    let project_root = base_dir.as_ref().join(&project_name);
    if project_root.exists() {
        return Err(Error::DirectoryExists { path: project_root.display().to_string() });
    }

    let template = args.template.parse::<Template>()?;
    debug!("Validated project '{}' with template '{}'", project_name, template);

    let config = ProjectConfig {
        project_name,
        template,
        git_init: args.git,
        author: args.author.unwrap_or_default(),
    };
    Ok((config, project_root))
}
