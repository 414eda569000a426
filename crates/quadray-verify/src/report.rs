//! Check results and the aggregate report.

use std::fmt;

/// Outcome of one named check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    /// Stable check name, e.g. `"Origin Identity"`.
    pub name: String,
    /// What the check asserts.
    pub description: String,
    /// Expected value, rendered for humans.
    pub expected: String,
    /// Measured value, rendered for humans.
    pub actual: String,
    /// Whether the measurement fell within tolerance.
    pub passed: bool,
}

impl CheckResult {
    pub(crate) fn new(
        name: &str,
        description: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        passed: bool,
    ) -> Self {
        Self {
            name: name.to_owned(),
            description: description.into(),
            expected: expected.into(),
            actual: actual.into(),
            passed,
        }
    }
}

/// Ordered results of a verification run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    checks: Vec<CheckResult>,
}

impl VerificationReport {
    /// An empty report. Vacuously passing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result.
    pub fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// All results, in run order.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Number of passing checks.
    pub fn pass_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// The failing checks.
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Look up a result by name.
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Multi-line human-readable summary.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Emit the report through `tracing`: `warn` per failed check, then an
    /// `info` summary line.
    pub fn log(&self) {
        for c in self.failed() {
            tracing::warn!(
                check = %c.name,
                expected = %c.expected,
                actual = %c.actual,
                "geometric check failed"
            );
        }
        tracing::info!(
            passed = self.pass_count(),
            total = self.checks.len(),
            "geometric verification complete"
        );
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Synergetics Verification Report")?;
        writeln!(f, "{}", "-".repeat(45))?;
        for c in &self.checks {
            let mark = if c.passed { "PASS" } else { "FAIL" };
            writeln!(f, "  [{mark}] {}", c.name)?;
        }
        writeln!(f)?;
        if self.all_passed() {
            write!(f, "Result: ALL PASSED")
        } else {
            write!(f, "Result: {}/{} passed", self.pass_count(), self.checks.len())
        }
    }
}
