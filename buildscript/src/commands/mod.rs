mod check;
mod comments;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use comments::CommentsCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for buildscript_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "buildscript")]
#[command(version)]
#[command(about = "Generate Gradle build scripts from TOML definitions")]
pub(crate) struct Cli {
    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Comments(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the build script described by script.toml
    Generate(GenerateCommand),

    /// Validate script.toml without generating anything
    Check(CheckCommand),

    /// List the comments of the script in marker order
    Comments(CommentsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
