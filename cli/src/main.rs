mod commands;
mod terminal;

use std::process::ExitCode;

use checkr_common::config::Config;
use commands::{CommandLine, Commands, even, palindrome};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        strict: commands.strict,
    };

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    let summary = match commands.command {
        Commands::Even { numbers } => {
            print::header("checking parity", cfg.quiet);
            even::even(&numbers, &cfg)?
        }
        Commands::Palindrome { texts } => {
            print::header("checking palindromes", cfg.quiet);
            palindrome::palindrome(&texts, &cfg)?
        }
    };

    print::end_of_program(cfg.quiet);

    if summary.exit_ok(cfg.strict) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
