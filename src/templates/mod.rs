//! Built-in project templates.
//!
//! Each template is a function that fills a `BlueprintBuilder` with the
//! directories and files of one layout. Nothing here touches the filesystem;
//! `processor::generate` materializes the resulting `Blueprint`.

use cruet::Inflector;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, Template};
use crate::constants::{APP_NAME, IGNORE_FILE, README_FILE};
use crate::error::Result;
use crate::renderer::TemplateRenderer;

pub mod manifest;
pub mod readme;

mod api;
mod basic;
mod cli;
mod fullstack;
mod web;

use manifest::Manifest;

const GITIGNORE: &str = include_str!("../../templates/shared/gitignore");

/// Values substituted into template files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub project_name: String,
    /// Human readable form of the name, `demo-app` becomes `Demo App`
    pub project_title: String,
    pub author: String,
    /// Creation date as `YYYY-MM-DD`
    pub date: String,
    pub app_name: &'static str,
}

impl TemplateContext {
    pub fn new<S: Into<String>>(project_name: S, author: S, date: S) -> Self {
        let project_name = project_name.into();
        Self {
            project_title: project_name.to_title_case(),
            project_name,
            author: author.into(),
            date: date.into(),
            app_name: APP_NAME,
        }
    }

    /// Context for a run, dated with the local current date.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::new(config.project_name.clone(), config.author.clone(), today)
    }
}

/// A file to be written, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

/// The complete layout of a generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileSpec>,
}

impl Blueprint {
    pub fn file(&self, path: &str) -> Option<&FileSpec> {
        self.files.iter().find(|file| file.path == PathBuf::from(path))
    }
}

/// Collects directories and rendered files for one template.
pub struct BlueprintBuilder<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a TemplateContext,
    values: serde_json::Value,
    blueprint: Blueprint,
}

impl<'a> BlueprintBuilder<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, context: &'a TemplateContext) -> Result<Self> {
        Ok(Self {
            renderer,
            context,
            values: serde_json::to_value(context)?,
            blueprint: Blueprint::default(),
        })
    }

    pub fn context(&self) -> &'a TemplateContext {
        self.context
    }

    pub fn directories(&mut self, paths: &[&str]) {
        self.blueprint.directories.extend(paths.iter().map(PathBuf::from));
    }

    /// Adds a file whose content is written verbatim.
    pub fn raw(&mut self, path: &str, content: String) {
        self.blueprint.files.push(FileSpec { path: PathBuf::from(path), content });
    }

    /// Adds a file rendered from `source` with the template context.
    pub fn render(&mut self, path: &str, source: &str) -> Result<()> {
        let content = self.renderer.render(source, &self.values)?;
        self.raw(path, content);
        Ok(())
    }

    pub fn manifest(&mut self, path: &str, manifest: &Manifest) -> Result<()> {
        let content = manifest.to_json()?;
        self.raw(path, content);
        Ok(())
    }

    /// Adds the ignore file and the README every template ships at its root.
    pub fn common_files(&mut self, template: Template) -> Result<()> {
        self.raw(IGNORE_FILE, GITIGNORE.to_string());
        let readme = readme::render_readme(template, self.context, self.renderer)?;
        self.raw(README_FILE, readme);
        Ok(())
    }

    pub fn finish(self) -> Blueprint {
        self.blueprint
    }
}

/// Builds the blueprint of `template` for the given context.
pub fn blueprint(
    template: Template,
    context: &TemplateContext,
    renderer: &dyn TemplateRenderer,
) -> Result<Blueprint> {
    let mut builder = BlueprintBuilder::new(renderer, context)?;
    match template {
        Template::Basic => basic::build(&mut builder)?,
        Template::Web => web::build(&mut builder)?,
        Template::Api => api::build(&mut builder)?,
        Template::Cli => cli::build(&mut builder)?,
        Template::Fullstack => fullstack::build(&mut builder)?,
    }
    Ok(builder.finish())
}
