//! CLI argument parsing tests
//!
//! Run with: cargo test --test cli_tests

use clap::Parser;
use studygate::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_courses_defaults() {
    let cli = Cli::try_parse_from(["studygate", "courses"]).unwrap();
    match cli.command {
        Commands::Courses {
            search,
            category,
            format,
        } => {
            assert_eq!(search, "");
            assert_eq!(category, "All");
            assert!(matches!(format, OutputFormat::Table));
        }
        _ => panic!("expected courses command"),
    }
}

#[test]
fn test_courses_with_filters() {
    let cli = Cli::try_parse_from([
        "studygate", "courses", "--search", "react", "--category", "Development", "-f", "json",
    ])
    .unwrap();
    match cli.command {
        Commands::Courses {
            search,
            category,
            format,
        } => {
            assert_eq!(search, "react");
            assert_eq!(category, "Development");
            assert!(matches!(format, OutputFormat::Json));
        }
        _ => panic!("expected courses command"),
    }
}

#[test]
fn test_demo_requires_credentials() {
    std::env::remove_var("STUDYGATE_EMAIL");
    std::env::remove_var("STUDYGATE_PASSWORD");
    assert!(Cli::try_parse_from(["studygate", "demo"]).is_err());

    let cli = Cli::try_parse_from(["studygate", "demo", "-e", "a@b.com", "-p", "x"]).unwrap();
    match cli.command {
        Commands::Demo {
            email,
            password,
            course,
        } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(password, "x");
            assert_eq!(course, 1);
        }
        _ => panic!("expected demo command"),
    }
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["studygate", "routes", "--format", "xml"]).is_err());
}

#[test]
fn test_init_force_flag() {
    let cli = Cli::try_parse_from(["studygate", "init", "--force"]).unwrap();
    assert!(matches!(cli.command, Commands::Init { force: true }));
}
