use anyhow::Context;
use checkr_common::{
    config::Config,
    input,
    report::{Check, Summary, Verdict},
    success,
};
use checkr_core::parity;
use tracing::debug;

use crate::commands::report;

pub fn even(numbers: &[String], cfg: &Config) -> anyhow::Result<Summary> {
    let parsed: Vec<i64> = input::parse_integers(numbers).context("reading numbers")?;

    let verdicts: Vec<Verdict> = numbers
        .iter()
        .zip(parsed)
        .map(|(raw, number)| {
            let holds = parity::is_even(number);
            debug!("{number} is {}", if holds { "even" } else { "odd" });
            Verdict::new(Check::Even, raw.trim(), holds)
        })
        .collect();

    let summary = report(&verdicts, cfg.quiet);
    if summary.failed == 0 {
        success!("All {} numbers are even", summary.total());
    }

    Ok(summary)
}
