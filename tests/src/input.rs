use checkr_common::error::CheckError;
use checkr_common::input::parse_integers;
use checkr_common::report::{Check, Summary, Verdict};
use checkr_core::is_even;

/// Runs the same pipeline as `checkr even` without the terminal layer.
fn evaluate(raw: &[&str]) -> Result<Vec<Verdict>, CheckError> {
    let numbers = parse_integers(raw)?;

    Ok(raw
        .iter()
        .zip(numbers)
        .map(|(s, n)| Verdict::new(Check::Even, *s, is_even(n)))
        .collect())
}

#[test]
fn even_batch_summary() {
    let verdicts = evaluate(&["2", "-4", "3", "0"]).expect("valid input");
    let summary = Summary::from_verdicts(&verdicts);

    assert_eq!(summary, Summary { passed: 3, failed: 1 });
    assert!(summary.exit_ok(false));
    assert!(!summary.exit_ok(true));
}

#[test]
fn even_batch_rejects_bad_number() {
    let result = evaluate(&["2", "two"]);

    assert!(
        matches!(result, Err(CheckError::InvalidInteger { ref input, .. }) if input == "two"),
        "unexpected result: {:?}",
        result
    );
}

#[test]
fn even_batch_requires_input() {
    assert_eq!(evaluate(&[]), Err(CheckError::EmptyBatch));
}
