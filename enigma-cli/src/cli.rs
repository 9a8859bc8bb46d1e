//! Command-line surface: flags, key sheets and message sources.
//!
//! Settings resolve in layers: [`MachineSettings::default`], then the
//! `--key-file` sheet if given, then any explicit flag.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use enigma_core::{MachineSettings, ReflectorModel, RotorModel};

/// Encipher or decipher a message on a simulated Enigma I.
///
/// The machine is self-reciprocal: feed the ciphertext back through with
/// the same settings to recover the plaintext.
#[derive(Debug, Parser)]
#[command(name = "enigma", author, version, about)]
pub struct Cli {
    /// Wheel order, left to right (I..V)
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"])]
    pub rotors: Option<Vec<RotorModel>>,

    /// Reflector (B or C)
    #[arg(long)]
    pub reflector: Option<ReflectorModel>,

    /// Ring settings, left to right
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"])]
    pub ring_settings: Option<Vec<char>>,

    /// Starting window letters, left to right
    #[arg(
        long,
        alias = "initial-rotor-positions",
        num_args = 3,
        value_names = ["LEFT", "MIDDLE", "RIGHT"]
    )]
    pub positions: Option<Vec<char>>,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long)]
    pub plugboard: Option<String>,

    /// JSON key sheet; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// Message text (otherwise --input, otherwise stdin)
    #[arg(short, long, conflicts_with = "input")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Split output into groups of N letters (0 = no grouping; bare flag = 5)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 0,
        num_args = 0..=1,
        default_missing_value = "5"
    )]
    pub group: usize,

    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the machine settings from defaults, key sheet and flags.
    pub fn settings(&self) -> Result<MachineSettings> {
        let base = match &self.key_file {
            Some(path) => load_key_file(path)?,
            None => MachineSettings::default(),
        };
        self.apply_overrides(base)
    }

    fn apply_overrides(&self, mut settings: MachineSettings) -> Result<MachineSettings> {
        if let Some(rotors) = &self.rotors {
            settings.rotors = three("--rotors", rotors)?;
        }
        if let Some(reflector) = self.reflector {
            settings.reflector = reflector;
        }
        if let Some(rings) = &self.ring_settings {
            settings.ring_settings = three("--ring-settings", rings)?;
        }
        if let Some(positions) = &self.positions {
            settings.positions = three("--positions", positions)?;
        }
        if let Some(plugboard) = &self.plugboard {
            settings.plugboard.clone_from(plugboard);
        }
        Ok(settings)
    }

    /// The message from `--message`, `--input`, or stdin, in that order.
    pub fn read_message(&self) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }
        if let Some(path) = &self.input {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read message from {}", path.display()));
        }
        std::io::read_to_string(std::io::stdin()).context("failed to read message from stdin")
    }
}

fn three<T: Copy>(flag: &str, values: &[T]) -> Result<[T; 3]> {
    values
        .try_into()
        .map_err(|_| anyhow!("{flag} takes exactly 3 values, got {}", values.len()))
}

/// Parse a key sheet file into settings. Missing fields keep defaults.
pub fn load_key_file(path: &Path) -> Result<MachineSettings> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read key file {}", path.display()))?;
    parse_key_sheet(&data).with_context(|| format!("invalid key file {}", path.display()))
}

fn parse_key_sheet(data: &str) -> Result<MachineSettings> {
    Ok(serde_json::from_str(data)?)
}
