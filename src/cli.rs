use crate::init::{run_init, InitError, TermPrompter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isubo-init", version, about = "Initializing isubo's configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive flow and write isubo.conf.yml
    Init,
}

pub fn run(cli: Cli) -> Result<PathBuf, InitError> {
    // `init` is the only subcommand and also the default invocation.
    match cli.command.unwrap_or(Command::Init) {
        Command::Init => {
            let workdir = std::env::current_dir().map_err(|source| InitError::ReadDir {
                path: ".".to_string(),
                source,
            })?;
            let mut prompter = TermPrompter::default();
            run_init(&mut prompter, &workdir)
        }
    }
}
