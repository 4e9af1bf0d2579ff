use scaffolder::cli::{parse_args, Args, Invocation};
use scaffolder::error::Error;

fn parse(args: &[&str]) -> Result<Invocation, Error> {
    parse_args(args.iter().copied())
}

fn create_args(args: &[&str]) -> Args {
    match parse(args) {
        Ok(Invocation::Create(args)) => args,
        other => panic!("Expected Create invocation, got {:?}", other),
    }
}

#[test]
fn test_basic_args() {
    let parsed = create_args(&["demo"]);

    assert_eq!(parsed.project_name.as_deref(), Some("demo"));
    assert_eq!(parsed.template, "basic");
    assert!(!parsed.git);
    assert_eq!(parsed.author, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let parsed =
        create_args(&["demo", "--template", "api", "--git", "--author", "Jane Doe", "--verbose"]);

    assert_eq!(parsed.template, "api");
    assert!(parsed.git);
    assert_eq!(parsed.author.as_deref(), Some("Jane Doe"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = create_args(&["-t", "cli", "-g", "-a", "Jane", "demo"]);

    assert_eq!(parsed.project_name.as_deref(), Some("demo"));
    assert_eq!(parsed.template, "cli");
    assert!(parsed.git);
    assert_eq!(parsed.author.as_deref(), Some("Jane"));
}

#[test]
fn test_template_is_lowercased() {
    assert_eq!(create_args(&["demo", "-t", "FullStack"]).template, "fullstack");
}

#[test]
fn test_unknown_template_is_not_a_parse_error() {
    assert_eq!(create_args(&["demo", "-t", "desktop"]).template, "desktop");
}

#[test]
fn test_equals_syntax() {
    assert_eq!(create_args(&["demo", "--template=web"]).template, "web");
}

#[test]
fn test_short_equals_syntax() {
    assert_eq!(create_args(&["demo", "-t=web"]).template, "web");
    assert_eq!(create_args(&["-a=Jane", "demo"]).author.as_deref(), Some("Jane"));
}

#[test]
fn test_empty_inline_value_is_missing() {
    match parse(&["demo", "--template="]) {
        Err(Error::MissingFlagValue { flag }) => assert_eq!(flag, "--template"),
        other => panic!("Expected MissingFlagValue, got {:?}", other),
    }
    match parse(&["demo", "-a="]) {
        Err(Error::MissingFlagValue { flag }) => assert_eq!(flag, "-a"),
        other => panic!("Expected MissingFlagValue, got {:?}", other),
    }
}

#[test]
fn test_unrecognized_flags_are_ignored() {
    let parsed = create_args(&["--force", "demo", "--color", "-x", "-t", "web"]);

    assert_eq!(parsed.project_name.as_deref(), Some("demo"));
    assert_eq!(parsed.template, "web");
}

#[test]
fn test_first_positional_is_project_name() {
    let parsed = create_args(&["first", "second", "third"]);
    assert_eq!(parsed.project_name.as_deref(), Some("first"));
}

#[test]
fn test_missing_project_name() {
    assert!(matches!(parse(&["--git", "-t", "web"]), Err(Error::MissingProjectName)));
}

#[test]
fn test_missing_template_value_at_end() {
    match parse(&["demo", "--template"]) {
        Err(Error::MissingFlagValue { flag }) => assert_eq!(flag, "--template"),
        other => panic!("Expected MissingFlagValue, got {:?}", other),
    }
}

#[test]
fn test_missing_author_value_before_flag() {
    match parse(&["demo", "-a", "--git"]) {
        Err(Error::MissingFlagValue { flag }) => assert_eq!(flag, "-a"),
        other => panic!("Expected MissingFlagValue, got {:?}", other),
    }
}

#[test]
fn test_value_starting_with_dash_is_missing() {
    assert!(matches!(
        parse(&["demo", "--author", "-bob"]),
        Err(Error::MissingFlagValue { .. })
    ));
}

#[test]
fn test_help_anywhere() {
    assert!(matches!(parse(&["--help"]), Ok(Invocation::Help)));
    assert!(matches!(parse(&["demo", "-t", "api", "-h"]), Ok(Invocation::Help)));
    // help wins over errors that would otherwise be reported
    assert!(matches!(parse(&["--template", "-h"]), Ok(Invocation::Help)));
}

#[test]
fn test_no_args_is_help() {
    assert!(matches!(parse(&[]), Ok(Invocation::Help)));
}

#[test]
fn test_version() {
    assert!(matches!(parse(&["--version"]), Ok(Invocation::Version)));
    assert!(matches!(parse(&["-V"]), Ok(Invocation::Version)));
}
