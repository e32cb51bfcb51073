//! CLI interface for Studygate

pub mod commands;
mod output;
pub mod shell;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "studygate")]
#[command(author = "Krakaw")]
#[command(version = "0.1.0")]
#[command(about = "Session store and route guard for a course-learning app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a studygate.toml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List courses from the catalog
    Courses {
        /// Only courses whose title contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show ("All" for every category)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show every route and whether it needs a session
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Walk through login, browsing and logout, printing each routing decision
    Demo {
        /// Email to log in with
        #[arg(short, long, env = "STUDYGATE_EMAIL")]
        email: String,

        /// Password to log in with
        #[arg(short, long, env = "STUDYGATE_PASSWORD")]
        password: String,

        /// Course to open during the walk
        #[arg(short, long, default_value = "1")]
        course: u32,
    },

    /// Drive a session interactively
    Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
