use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::prompts;
use crate::pass::Requirements;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "passforge", version, about = "Generate passwords and rate their strength")]
pub struct CliFlags {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Password length (4-64)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of passwords (at least 1)
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Plain output, no warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Seed a reproducible generator (output is NOT secret)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score an existing password and check it against a policy
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Password to check; read from stdin when omitted
    pub password: Option<String>,

    /// Minimum length
    #[arg(long, default_value_t = 8)]
    pub min_length: usize,

    /// Require an uppercase letter
    #[arg(long)]
    pub upper: bool,

    /// Require a lowercase letter
    #[arg(long)]
    pub lower: bool,

    /// Require a digit
    #[arg(long)]
    pub numbers: bool,

    /// Require a symbol
    #[arg(long)]
    pub symbols: bool,

    /// Require every character class
    #[arg(long)]
    pub strict: bool,
}

impl CliFlags {
    /// Apply flags over `settings`, warning when a value is out of range.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length
            && settings.set_length(length)
        {
            prompts::length_clamped(length, settings.length);
        }
        if let Some(number) = self.number
            && settings.set_count(number)
        {
            prompts::count_raised();
        }
        if self.no_upper {
            settings.uppercase = false;
        }
        if self.no_lower {
            settings.lowercase = false;
        }
        if self.no_numbers {
            settings.numbers = false;
        }
        if self.no_symbols {
            settings.symbols = false;
        }
        if self.clipboard {
            settings.to_clipboard = true;
        }
    }
}

impl CheckArgs {
    pub fn requirements(&self) -> Requirements {
        if self.strict {
            return Requirements::strict(self.min_length);
        }
        Requirements {
            min_length: self.min_length,
            require_uppercase: self.upper,
            require_lowercase: self.lower,
            require_numbers: self.numbers,
            require_symbols: self.symbols,
        }
    }
}
