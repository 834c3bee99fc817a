use std::io::{self, Write};

use clap::{Args, CommandFactory};
use eyre::Result;

use super::Cli;

const BIN_NAME: &str = "buildscript";

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        self.write_to(&mut io::stdout());
        Ok(())
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, BIN_NAME, out);
    }
}
