use std::path::PathBuf;

use buildscript::{
    ops::{self, LowerOptions},
    reports::{Report, TerminalOutput},
};
use buildscript_core::Dsl;
use buildscript_manifest::{MANIFEST_FILE_NAME, ScriptToml};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CommentsCommand {
    /// Path to script.toml
    #[arg(short, long, default_value = MANIFEST_FILE_NAME)]
    pub config: PathBuf,

    /// Target dialect (overrides script.toml setting)
    #[arg(long)]
    pub dsl: Option<Dsl>,

    /// Print the comments as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommentsCommand {
    pub fn run(&self) -> Result<()> {
        let script_toml = ScriptToml::open(&self.config).unwrap_or_exit();
        let manifest = script_toml.manifest();
        let opts = LowerOptions::resolve(manifest, self.dsl, None, true);

        let report = ops::comments(manifest, &opts)?;
        if self.json {
            println!("{}", report.to_json().wrap_err("Failed to serialize comments")?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
