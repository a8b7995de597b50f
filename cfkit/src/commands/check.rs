use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, args::GenerationArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: GenerationArgs,

    /// Print the derived configuration as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let input = self.args.load().unwrap_or_exit();
        let report = ops::check(&input, &self.args.project).unwrap_or_exit();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.config)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
