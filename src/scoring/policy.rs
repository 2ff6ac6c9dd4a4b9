//! Scoring policy: the fixed tables and thresholds driving the engine.
//!
//! The canonical values live in the `Default` impls; callers that need a
//! different gap threshold or band table override them through the builder
//! methods rather than patching constants.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{MaturityBands, QuestionId, ResponseValue};

/// Raw score assigned to each response value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseScoreTable {
    pub yes: f64,
    pub partial: f64,
    pub no: f64,
}

impl ResponseScoreTable {
    /// Score for an applicable response value; `None` for `NotApplicable`.
    #[must_use]
    pub fn score(&self, response: ResponseValue) -> Option<f64> {
        match response {
            ResponseValue::Yes => Some(self.yes),
            ResponseValue::Partial => Some(self.partial),
            ResponseValue::No => Some(self.no),
            ResponseValue::NotApplicable => None,
        }
    }
}

impl Default for ResponseScoreTable {
    fn default() -> Self {
        Self {
            yes: 1.0,
            partial: 0.5,
            no: 0.0,
        }
    }
}

/// Multiplier applied to the response score per evidence confidence.
///
/// Missing or not-applicable evidence uses the `none` multiplier: unbacked
/// claims are treated as weak evidence, never as neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceMultiplierTable {
    pub yes: f64,
    pub partial: f64,
    pub none: f64,
}

impl EvidenceMultiplierTable {
    /// Multiplier for an evidence-confidence value, defaulting unset/NA to
    /// the weak-evidence multiplier.
    #[must_use]
    pub fn multiplier(&self, evidence: Option<ResponseValue>) -> f64 {
        match evidence {
            Some(ResponseValue::Yes) => self.yes,
            Some(ResponseValue::Partial) => self.partial,
            Some(ResponseValue::No) | Some(ResponseValue::NotApplicable) | None => self.none,
        }
    }
}

impl Default for EvidenceMultiplierTable {
    fn default() -> Self {
        Self {
            yes: 1.0,
            partial: 0.9,
            none: 0.7,
        }
    }
}

/// Complete scoring policy for one engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Response value table
    pub response_scores: ResponseScoreTable,
    /// Evidence multiplier table
    pub evidence_multipliers: EvidenceMultiplierTable,
    /// Effective-score threshold below which a question is a gap
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: f64,
    /// Maturity band table
    pub bands: MaturityBands,
}

fn default_gap_threshold() -> f64 {
    0.5
}

impl Default for ScoringPolicy {
    /// The canonical policy, including the 0.5 gap threshold. The serde
    /// attribute on `gap_threshold` only covers deserialization, so the
    /// threshold must be set here as well.
    fn default() -> Self {
        Self {
            response_scores: ResponseScoreTable::default(),
            evidence_multipliers: EvidenceMultiplierTable::default(),
            gap_threshold: default_gap_threshold(),
            bands: MaturityBands::default(),
        }
    }
}

impl ScoringPolicy {
    /// Canonical policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the gap threshold
    #[must_use]
    pub fn with_gap_threshold(mut self, threshold: f64) -> Self {
        self.gap_threshold = threshold;
        self
    }

    /// Override the maturity band table
    #[must_use]
    pub fn with_bands(mut self, bands: MaturityBands) -> Self {
        self.bands = bands;
        self
    }
}

/// Caller-supplied restriction to a dynamically enabled question subset.
///
/// Lets the application disable question sets without mutating the static
/// catalog. When `question_ids` is set, gap extraction and cross-cut views
/// skip questions outside it; when `active_count` is set, overall coverage
/// divides by it instead of the applicable count (capped at 1.0).
#[derive(Debug, Clone, Default)]
pub struct ActiveQuestionSet {
    question_ids: Option<HashSet<QuestionId>>,
    active_count: Option<usize>,
}

impl ActiveQuestionSet {
    /// Restrict to an explicit set of enabled question ids
    #[must_use]
    pub fn with_questions<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = QuestionId>,
    {
        self.question_ids = Some(ids.into_iter().collect());
        self
    }

    /// Override the denominator used by overall coverage
    #[must_use]
    pub fn with_active_count(mut self, count: usize) -> Self {
        self.active_count = Some(count);
        self
    }

    /// Whether a question participates in gap extraction and views
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.question_ids
            .as_ref()
            .map_or(true, |set| set.contains(id))
    }

    /// Explicit active-question-count override, if any
    #[must_use]
    pub fn active_count(&self) -> Option<usize> {
        self.active_count
    }
}
