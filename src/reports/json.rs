//! JSON report rendering.

use crate::error::{AssessmentError, Result};

use super::types::AssessmentReport;

/// JSON renderer for assessment reports
#[derive(Debug, Clone)]
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a pretty-printing JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Render a report to a JSON string
    pub fn render(&self, report: &AssessmentReport) -> Result<String> {
        let result = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        result.map_err(|e| AssessmentError::report("serializing assessment report", e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
