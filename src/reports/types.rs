//! Report data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::frameworks::FrameworkCoverage;
use crate::scoring::{CriticalGap, OverallMetrics, RoadmapItem};

/// Complete assessment report, the input to every export collaborator.
///
/// Plain structured data: the engine assumes no particular serialization,
/// but everything derives serde so JSON/spreadsheet/HTML exporters can
/// consume it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct AssessmentReport {
    /// Scoring engine version
    pub engine_version: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Overall metrics with per-domain breakdown and cross-cut views
    pub overall: OverallMetrics,
    /// Ordered critical-gap list
    pub gaps: Vec<CriticalGap>,
    /// Time-boxed remediation plan
    pub roadmap: Vec<RoadmapItem>,
    /// Per-framework coverage summaries
    pub frameworks: Vec<FrameworkCoverage>,
}
