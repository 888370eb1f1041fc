pub mod even;
pub mod palindrome;

use checkr_common::report::{Summary, Verdict};
use clap::{ArgAction, Parser, Subcommand};
use unicode_width::UnicodeWidthStr;

use crate::terminal::print;

#[derive(Parser)]
#[command(name = "checkr")]
#[command(about = "Checks numbers for parity and text for palindromes.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output, repeat for less (-qq prints verdicts only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Exit with a failure code if any check does not hold
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether one or more integers are even
    #[command(alias = "e")]
    Even {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// Check whether one or more strings are palindromes
    #[command(alias = "p")]
    Palindrome {
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Prints every verdict followed by the summary line.
pub(crate) fn report(verdicts: &[Verdict], quiet: u8) -> Summary {
    let summary = Summary::from_verdicts(verdicts);

    let key_width: usize = verdicts
        .iter()
        .map(|v| print::key_of(v).width())
        .max()
        .unwrap_or(0);
    print::set_key_width(key_width);
    for verdict in verdicts {
        print::verdict_line(verdict, quiet);
    }
    print::summary(&summary, quiet);

    summary
}
