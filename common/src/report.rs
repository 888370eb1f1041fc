use std::fmt;

/// The predicates `checkr` knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Even,
    Palindrome,
}

impl Check {
    pub fn name(&self) -> &'static str {
        match self {
            Check::Even => "even",
            Check::Palindrome => "palindrome",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single predicate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub check: Check,
    pub input: String,
    pub holds: bool,
}

impl Verdict {
    pub fn new(check: Check, input: impl Into<String>, holds: bool) -> Self {
        Self {
            check,
            input: input.into(),
            holds,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        verdicts.iter().fold(Self::default(), |mut summary, verdict| {
            summary.record(verdict);
            summary
        })
    }

    pub fn record(&mut self, verdict: &Verdict) {
        if verdict.holds {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Without `strict` a run always succeeds once every input was evaluated.
    pub fn exit_ok(&self, strict: bool) -> bool {
        !strict || self.failed == 0
    }
}
