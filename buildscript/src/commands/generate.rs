use std::path::PathBuf;

use buildscript::{
    ops::{self, GenerateOptions, LowerOptions},
    reports::{Report, TerminalOutput},
};
use buildscript_core::{Dsl, InsecureProtocol};
use buildscript_manifest::{MANIFEST_FILE_NAME, ScriptToml};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to script.toml
    #[arg(short, long, default_value = MANIFEST_FILE_NAME)]
    pub config: PathBuf,

    /// Output directory (defaults to the directory of script.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target dialect (overrides script.toml setting)
    #[arg(long)]
    pub dsl: Option<Dsl>,

    /// How to handle repositories with insecure urls (overrides script.toml setting)
    #[arg(long)]
    pub insecure_protocol: Option<InsecureProtocol>,

    /// Preview the generated script without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Replace comments by numbered markers and list them separately
    #[arg(long)]
    pub external_comments: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let script_toml = ScriptToml::open(&self.config).unwrap_or_exit();
        let manifest = script_toml.manifest();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| script_toml.dir().to_path_buf());

        let report = ops::generate(
            manifest,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                lower: LowerOptions::resolve(
                    manifest,
                    self.dsl,
                    self.insecure_protocol,
                    self.external_comments,
                ),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
