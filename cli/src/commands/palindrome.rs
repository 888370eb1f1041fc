use checkr_common::{
    config::Config,
    error::CheckError,
    report::{Check, Summary, Verdict},
    success,
};
use checkr_core::palindrome;
use tracing::debug;

use crate::commands::report;

pub fn palindrome(texts: &[String], cfg: &Config) -> anyhow::Result<Summary> {
    if texts.is_empty() {
        return Err(CheckError::EmptyBatch.into());
    }

    let verdicts: Vec<Verdict> = texts
        .iter()
        .map(|text| {
            debug!("'{text}' normalizes to '{}'", palindrome::normalize(text));
            Verdict::new(Check::Palindrome, text.as_str(), palindrome::is_palindrome(text))
        })
        .collect();

    let summary = report(&verdicts, cfg.quiet);
    if summary.failed == 0 {
        success!("All {} strings are palindromes", summary.total());
    }

    Ok(summary)
}
