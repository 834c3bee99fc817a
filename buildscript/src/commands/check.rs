use std::path::PathBuf;

use buildscript::{
    ops::{self, LowerOptions},
    reports::{Report, TerminalOutput},
};
use buildscript_core::{Dsl, InsecureProtocol};
use buildscript_manifest::{MANIFEST_FILE_NAME, ScriptToml};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to script.toml
    #[arg(short, long, default_value = MANIFEST_FILE_NAME)]
    pub config: PathBuf,

    /// Target dialect (overrides script.toml setting)
    #[arg(long)]
    pub dsl: Option<Dsl>,

    /// How to handle repositories with insecure urls (overrides script.toml setting)
    #[arg(long)]
    pub insecure_protocol: Option<InsecureProtocol>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let script_toml = ScriptToml::open(&self.config).unwrap_or_exit();
        let manifest = script_toml.manifest();
        let opts = LowerOptions::resolve(manifest, self.dsl, self.insecure_protocol, false);

        let report = ops::check(manifest, &self.config, &opts)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
