//! Compact, human-readable summary for terminal output.

use std::fmt::Write as _;

use super::types::AssessmentReport;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
#[derive(Debug, Clone)]
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render a compact summary of an assessment report
    #[must_use]
    pub fn render(&self, report: &AssessmentReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.color("Maturity Assessment Summary", "bold"));
        let _ = writeln!(out, "{}", self.color(&"─".repeat(40), "dim"));

        let overall = &report.overall;
        let score_pct = format!("{:.0}%", overall.score * 100.0);
        let score_color = if overall.score >= 0.75 {
            "green"
        } else if overall.score >= 0.5 {
            "yellow"
        } else {
            "red"
        };
        let _ = writeln!(
            out,
            "{} {} ({})",
            self.color("Overall:", "cyan"),
            self.color(&score_pct, score_color),
            overall.maturity.name()
        );
        let _ = writeln!(
            out,
            "{} {}/{} answered ({:.0}% coverage), evidence readiness {:.0}%",
            self.color("Coverage:", "cyan"),
            overall.answered_questions,
            overall.total_questions,
            overall.coverage * 100.0,
            overall.evidence_readiness * 100.0
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.color("Domains", "bold"));
        for domain in &overall.domains {
            let _ = writeln!(
                out,
                "  {:<32} {:>4.0}%  {:<12} {} gap(s)",
                domain.name,
                domain.score * 100.0,
                domain.maturity.name(),
                domain.critical_gaps
            );
        }

        if !report.gaps.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                self.color(&format!("Critical gaps ({})", report.gaps.len()), "bold")
            );
            for gap in report.gaps.iter().take(5) {
                let _ = writeln!(
                    out,
                    "  {} [{}] {} ({})",
                    self.color("!", "red"),
                    gap.criticality.name(),
                    gap.question_text,
                    gap.response_label()
                );
            }
            if report.gaps.len() > 5 {
                let _ = writeln!(
                    out,
                    "  {}",
                    self.color(&format!("... and {} more", report.gaps.len() - 5), "dim")
                );
            }
        }

        if !report.roadmap.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.color("Roadmap", "bold"));
            for item in &report.roadmap {
                let _ = writeln!(
                    out,
                    "  [{:<11}] {} (impact {}, effort {})",
                    item.priority.name(),
                    item.action,
                    item.impact.name(),
                    item.effort.name()
                );
            }
        }

        if !report.frameworks.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.color("Frameworks", "bold"));
            for fw in &report.frameworks {
                let _ = writeln!(
                    out,
                    "  {:<20} {}/{} answered, mean score {:.0}%",
                    fw.framework,
                    fw.answered_questions,
                    fw.total_questions,
                    fw.mean_score * 100.0
                );
            }
        }

        out
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
