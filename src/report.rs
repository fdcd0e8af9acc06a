use std::fmt;
use std::time::Duration;

use crate::errors::Error;

/// Result of one scenario
#[derive(Debug)]
pub struct Outcome {
    /// 1-based position in the suite
    pub order: usize,
    pub name: &'static str,
    pub elapsed: Duration,
    pub result: Result<(), Error>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "[PASS] {}. {} ({:?})", self.order, self.name, self.elapsed),
            Err(e) => write!(
                f,
                "[FAIL] {}. {} ({:?}): {}",
                self.order, self.name, self.elapsed, e
            ),
        }
    }
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when at least one scenario ran and none failed
    pub fn is_success(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }

        write!(
            f,
            "{} scenarios, {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        )
    }
}
