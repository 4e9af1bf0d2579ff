//! Command-line interface implementation for scaffolder.
//! Provides argument parsing and help text formatting using clap.
//!
//! Parsing is intentionally lenient: unknown options are dropped before the
//! tokens reach clap, so newer invocations keep working with older binaries.

use clap::{error::ErrorKind, Arg, Command, CommandFactory, Parser};
use log::debug;
use std::ffi::OsString;

use crate::constants::{APP_NAME, DEFAULT_TEMPLATE};
use crate::error::{Error, Result};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = r#"Templates:
  basic      Node.js project with src/, utils/ and tests/
  web        Static website with HTML, CSS and JavaScript
  api        HTTP API server with routes and controllers
  cli        Command-line tool with sample commands
  fullstack  Frontend and backend applications

Examples:
  scaffolder my-app
  scaffolder my-site --template web --git
  scaffolder my-api -t api -a "Jane Doe" -g"#;

/// Command-line arguments structure for scaffolder.
#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    author,
    version,
    about = "scaffolder: create a new project from a built-in template",
    long_about = None,
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Template to use (basic, web, api, cli, fullstack)
    #[arg(short, long, value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE, value_parser = lowercase)]
    pub template: String,

    /// Initialize a git repository with an initial commit
    #[arg(short, long)]
    pub git: bool,

    /// Author name written to package.json and README.md
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the user asked the binary to do.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Version,
    Create(Args),
}

fn lowercase(value: &str) -> std::result::Result<String, String> {
    Ok(value.to_lowercase())
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

fn is_help_flag(token: &str) -> bool {
    token == "--help" || token == "-h"
}

/// Splits `--long=value` and `-s=value` into the flag and its inline value.
fn split_inline_value(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    }
}

/// Looks up the clap argument a flag (without inline value) refers to.
/// Supports `--long` and `-s`. Clustered short flags are not recognized.
fn find_flag<'a>(command: &'a Command, flag: &str) -> Option<&'a Arg> {
    if let Some(long) = flag.strip_prefix("--") {
        command.get_arguments().find(|arg| arg.get_long() == Some(long))
    } else {
        let mut chars = flag.strip_prefix('-')?.chars();
        let short = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        command.get_arguments().find(|arg| arg.get_short() == Some(short))
    }
}

/// Filters raw tokens down to the ones clap should see.
///
/// # Rules
/// - Unknown options are dropped.
/// - Only the first positional token is kept (the project name).
/// - An option that takes a value needs a non-empty inline value (`-t=web`)
///   or a following token that does not start with `-`, otherwise
///   `Error::MissingFlagValue` names the option.
pub fn retain_known_tokens(command: &Command, tokens: &[String]) -> Result<Vec<String>> {
    let mut retained = Vec::with_capacity(tokens.len());
    let mut project_name_seen = false;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        if !is_flag(token) {
            if project_name_seen {
                debug!("Ignoring extra argument '{}'", token);
            } else {
                project_name_seen = true;
                retained.push(token.clone());
            }
            continue;
        }

        let (flag, inline_value) = split_inline_value(token);
        let Some(arg) = find_flag(command, flag) else {
            debug!("Ignoring unrecognized option '{}'", token);
            continue;
        };

        if !arg.get_action().takes_values() {
            retained.push(token.clone());
            continue;
        }

        match inline_value {
            Some("") => return Err(Error::MissingFlagValue { flag: flag.to_string() }),
            Some(_) => retained.push(token.clone()),
            None => match iter.next_if(|next| !is_flag(next)) {
                Some(value) => {
                    retained.push(token.clone());
                    retained.push(value.clone());
                }
                None => return Err(Error::MissingFlagValue { flag: token.clone() }),
            },
        }
    }

    Ok(retained)
}

/// Parses raw command-line tokens (without the program name).
///
/// # Returns
/// * `Invocation::Help` when no tokens are given or `--help`/`-h` appears anywhere
/// * `Invocation::Version` for `--version`/`-V`
/// * `Invocation::Create` otherwise
///
/// # Errors
/// * `Error::MissingFlagValue` if `--template` or `--author` lacks a value
/// * `Error::MissingProjectName` if no positional token is present
pub fn parse_args<I, S>(tokens: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    if tokens.is_empty() || tokens.iter().any(|token| is_help_flag(token)) {
        return Ok(Invocation::Help);
    }

    let mut command = Args::command();
    command.build();
    let retained = retain_known_tokens(&command, &tokens)?;
    debug!("Parsing arguments: {:?}", retained);

    let argv = std::iter::once(APP_NAME.to_string()).chain(retained);
    match Args::try_parse_from(argv) {
        Ok(args) if args.project_name.is_none() => Err(Error::MissingProjectName),
        Ok(args) => Ok(Invocation::Create(args)),
        Err(e) if e.kind() == ErrorKind::DisplayVersion => Ok(Invocation::Version),
        Err(e) => Err(Error::Cli(e)),
    }
}

/// Converts raw arguments to strings.
///
/// # Errors
/// * `Error::InvalidArgument` for a token that is not valid UTF-8
pub fn read_tokens<I, S>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into().into_string().map_err(|raw| Error::InvalidArgument {
                argument: raw.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Reads the process arguments (without the program name).
pub fn get_tokens() -> Result<Vec<String>> {
    read_tokens(std::env::args_os().skip(1))
}

/// Whether `-v`/`--verbose` was given, checked before full parsing so the
/// logger is ready while arguments are parsed.
pub fn verbose_requested(tokens: &[String]) -> bool {
    tokens.iter().any(|token| token == "-v" || token == "--verbose")
}

/// Prints the help screen to stdout.
pub fn print_help() -> Result<()> {
    Args::command().print_help()?;
    Ok(())
}

/// Prints `scaffolder <version>` to stdout.
pub fn print_version() {
    print!("{}", Args::command().render_version());
}
