//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// layout - scaffold a new project from the gin-layout-base template
#[derive(Parser, Debug)]
#[command(name = "layout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: ~/.layout/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    #[command(
        long_about = "Create a new project from the gin-layout-base template.\n\n\
                      The template is cloned into a folder named after the last path \
                      segment of PROJECT, its module name is rewritten to PROJECT, \
                      dependencies are tidied and the git history is removed.",
        after_help = "Example:\n  layout new github.com/acme/widget"
    )]
    New(NewArgs),
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Module path of the new project (e.g. github.com/acme/widget)
    #[arg(value_name = "PROJECT")]
    pub name: Option<String>,
}
