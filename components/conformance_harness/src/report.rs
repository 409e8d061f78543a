use crate::harness::SweepResult;
use serde::{Deserialize, Serialize};

/// Sweep run report with statistics and failure details
///
/// The sweep aborts on its first failure, so `failures` holds at most one
/// entry and `total` counts only the tags visited before the abort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Total number of tags checked
    pub total: usize,
    /// Number of tags whose collation list passed
    pub passed: usize,
    /// Number of tags that failed
    pub failed: usize,
    /// List of failures with (tag, reason)
    pub failures: Vec<(String, String)>,
}

impl SweepReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Add a check result to the report
    pub fn add_result(&mut self, tag: &str, result: SweepResult) {
        self.total += 1;
        match result {
            SweepResult::Pass => self.passed += 1,
            SweepResult::Fail(reason) => {
                self.failed += 1;
                self.failures.push((tag.to_string(), reason));
            }
        }
    }

    /// Calculate the pass rate as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Check if all checks passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Collations Sweep Results:\n\
             Total: {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}",
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed
        )
    }

    /// Generate a detailed report including failures
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures:\n");
            for (tag, reason) in &self.failures {
                output.push_str(&format!("  - {}\n    Reason: {}\n", tag, reason));
            }
        }

        output
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import report from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SweepReport {
    fn default() -> Self {
        Self::new()
    }
}
