//! scaffolder's main application entry point and orchestration logic.
//! Handles command-line argument parsing, project generation flow,
//! and reporting.

use std::path::Path;

use colored::Colorize;
use scaffolder::{
    cli::{get_tokens, parse_args, print_help, print_version, verbose_requested, Invocation},
    config::{validate, ProjectConfig},
    error::{default_error_handler, Result},
    git::init_repository,
    logger::init_logger,
    processor::generate,
    renderer::MiniJinjaRenderer,
    templates::TemplateContext,
};

/// Main application entry point.
fn main() {
    if let Err(err) = run() {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Starts the logger, then prints help or version if requested
/// 2. Validates the project name, target directory and template
/// 3. Generates the project files
/// 4. Initializes git if requested (failures only warn)
/// 5. Reports success
fn run() -> Result<()> {
    let tokens = get_tokens()?;
    init_logger(verbose_requested(&tokens));

    let args = match parse_args(tokens)? {
        Invocation::Help => return print_help(),
        Invocation::Version => {
            print_version();
            return Ok(());
        }
        Invocation::Create(args) => args,
    };

    let base_dir = std::env::current_dir()?;
    let (config, project_root) = validate(args, &base_dir)?;

    println!(
        "{} Creating project '{}' with template '{}'",
        "→".blue().bold(),
        config.project_name.cyan(),
        config.template
    );

    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_config(&config);
    let blueprint = generate(&project_root, config.template, &context, &engine)?;

    for file in &blueprint.files {
        println!("  created: '{}'", Path::new(&config.project_name).join(&file.path).display());
    }

    if config.git_init {
        init_git(&config, &project_root);
    }

    print_success(&config);
    Ok(())
}

/// Git is a convenience: the project already exists, so a failure only warns.
fn init_git(config: &ProjectConfig, project_root: &Path) {
    println!("{} Initializing git repository", "→".blue().bold());
    match init_repository(project_root, &config.author) {
        Ok(_) => println!("{} Git repository initialized", "✓".green().bold()),
        Err(e) => {
            log::debug!("Git initialization error: {:?}", e);
            eprintln!("{} {}", "⚠ Warning:".yellow().bold(), e);
        }
    }
}

fn print_success(config: &ProjectConfig) {
    println!();
    println!(
        "{} Project '{}' created successfully!",
        "✓".green().bold(),
        config.project_name.cyan()
    );
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}", config.project_name);
    println!("  See README.md to get started");
}
