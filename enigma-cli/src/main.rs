//! `enigma` — Enigma I from the command line.
//!
//! ```text
//! enigma --rotors III IV I --ring-settings L E T --positions F R H \
//!        --plugboard "EM UG HT YI RF AJ" --message "hello world"
//! ZZASKXUKIH
//! ```

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use enigma_core::group_letters;
use tracing::debug;

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<String> {
    let settings = cli.settings()?;
    debug!(?settings, "resolved settings");

    let mut machine = settings.build().context("invalid machine settings")?;
    let message = cli.read_message()?;
    let output = machine.encipher(&message);
    Ok(group_letters(&output, cli.group))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
