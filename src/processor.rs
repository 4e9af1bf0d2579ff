//! Materializes blueprints on disk.
//!
//! Generation is staged: the project is assembled inside a temporary
//! directory next to the target and renamed into place once every file is
//! written. A failed run leaves nothing behind.

use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::Template;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::templates::{blueprint, Blueprint, TemplateContext};

const STAGING_PREFIX: &str = ".scaffolder-";

/// Checks that a relative path stays inside the directory it is joined to.
///
/// # Returns
/// * `false` for empty paths, absolute paths and paths containing `.` or `..`
pub fn is_contained_path<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty()
        && path.components().all(|component| matches!(component, Component::Normal(_)))
}

/// Rejects blueprints with escaping or duplicated paths before anything is written.
pub fn check_blueprint(blueprint: &Blueprint) -> Result<()> {
    for directory in &blueprint.directories {
        if !is_contained_path(directory) {
            return Err(Error::InvalidPath { path: directory.display().to_string() });
        }
    }

    let mut seen = HashSet::new();
    for file in &blueprint.files {
        if !is_contained_path(&file.path) {
            return Err(Error::InvalidPath { path: file.path.display().to_string() });
        }
        if !seen.insert(&file.path) {
            return Err(Error::DuplicatePath { path: file.path.display().to_string() });
        }
    }
    Ok(())
}

/// Ensures the output directory does not exist yet.
///
/// # Errors
/// * `Error::DirectoryExists` if the path is already taken
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::DirectoryExists { path: output_dir.display().to_string() });
    }
    Ok(output_dir.to_path_buf())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates every directory, then writes every file of `blueprint` under `root`.
/// Already written entries are not removed if a later write fails.
pub fn write_blueprint<P: AsRef<Path>>(root: P, blueprint: &Blueprint) -> Result<()> {
    let root = root.as_ref();
    for directory in &blueprint.directories {
        debug!("Creating directory: {}", directory.display());
        fs::create_dir_all(root.join(directory))?;
    }
    for file in &blueprint.files {
        debug!("Writing file: {}", file.path.display());
        write_file(&root.join(&file.path), &file.content)?;
    }
    Ok(())
}

/// Writes `blueprint` to `project_root` atomically with respect to failures:
/// either the whole project appears or nothing does.
///
/// # Errors
/// * `Error::InvalidPath` / `Error::DuplicatePath` for a malformed blueprint
/// * `Error::DirectoryExists` if `project_root` already exists
/// * `Error::IoError` for any filesystem failure
pub fn materialize<P: AsRef<Path>>(project_root: P, blueprint: &Blueprint) -> Result<()> {
    let project_root = ensure_output_dir(project_root)?;
    check_blueprint(blueprint)?;

    let name = project_root
        .file_name()
        .ok_or_else(|| Error::InvalidPath { path: project_root.display().to_string() })?;
    let parent = project_root
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Staging lives in the same parent so the final rename stays on one filesystem.
    let staging = tempfile::Builder::new().prefix(STAGING_PREFIX).tempdir_in(parent)?;
    let staged_root = staging.path().join(name);
    fs::create_dir(&staged_root)?;
    debug!("Staging project in {}", staged_root.display());

    write_blueprint(&staged_root, blueprint)?;
    fs::rename(&staged_root, &project_root)?;
    debug!("Moved staged project to {}", project_root.display());
    Ok(())
}

/// Builds the blueprint for `template` and writes it to `project_root`.
///
/// # Returns
/// * `Result<Blueprint>` - What was written, for reporting
pub fn generate<P: AsRef<Path>>(
    project_root: P,
    template: Template,
    context: &TemplateContext,
    renderer: &dyn TemplateRenderer,
) -> Result<Blueprint> {
    let blueprint = blueprint(template, context, renderer)?;
    materialize(project_root, &blueprint)?;
    Ok(blueprint)
}
