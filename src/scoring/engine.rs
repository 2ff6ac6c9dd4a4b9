//! Scoring engine façade.
//!
//! Ties a validated catalog snapshot to a scoring policy and exposes every
//! aggregation entry point plus the one-call [`ScoringEngine::assess`]
//! pipeline. Pure, synchronous computation: safe to call repeatedly and in
//! any order; the caller supplies a consistent answer snapshot per pass.

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::frameworks::{framework_coverage, FrameworkCoverage, FrameworkNormalizer};
use crate::model::{Answer, AnswerSet, Catalog, DomainId, SubcategoryId};
use crate::reports::AssessmentReport;

use super::domain::{domain_metrics, DomainMetrics};
use super::gaps::{critical_gaps, CriticalGap};
use super::overall::{overall_metrics, OverallMetrics};
use super::policy::{ActiveQuestionSet, ScoringPolicy};
use super::question::{score_answer, QuestionScore};
use super::roadmap::{generate_roadmap, RoadmapConfig, RoadmapItem};
use super::subcategory::{subcategory_metrics, SubcategoryMetrics};

/// Scoring engine version, recorded in every report
pub const ENGINE_VERSION: &str = "1.0";

/// The maturity scoring and gap-analysis engine.
#[derive(Debug, Clone)]
pub struct ScoringEngine<'a> {
    catalog: &'a Catalog,
    policy: ScoringPolicy,
    normalizer: FrameworkNormalizer,
    roadmap_config: RoadmapConfig,
}

impl<'a> ScoringEngine<'a> {
    /// Create an engine over a catalog snapshot with the canonical policy
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            policy: ScoringPolicy::new(),
            normalizer: FrameworkNormalizer::default(),
            roadmap_config: RoadmapConfig::default(),
        }
    }

    /// Override the scoring policy
    #[must_use]
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the framework normalizer
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: FrameworkNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Override the roadmap configuration
    #[must_use]
    pub fn with_roadmap_config(mut self, config: RoadmapConfig) -> Self {
        self.roadmap_config = config;
        self
    }

    /// The policy in effect
    #[must_use]
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score one optional answer (pure, no catalog access)
    #[must_use]
    pub fn score_answer(&self, answer: Option<&Answer>) -> QuestionScore {
        score_answer(answer, &self.policy)
    }

    /// Aggregate one subcategory
    pub fn subcategory_metrics(
        &self,
        id: &SubcategoryId,
        answers: &AnswerSet,
    ) -> Result<SubcategoryMetrics> {
        subcategory_metrics(self.catalog, &self.policy, id, answers)
    }

    /// Aggregate one domain
    pub fn domain_metrics(&self, id: &DomainId, answers: &AnswerSet) -> Result<DomainMetrics> {
        domain_metrics(self.catalog, &self.policy, id, answers)
    }

    /// Aggregate the whole assessment
    pub fn overall_metrics(
        &self,
        answers: &AnswerSet,
        active: Option<&ActiveQuestionSet>,
    ) -> Result<OverallMetrics> {
        overall_metrics(self.catalog, &self.policy, answers, active, &self.normalizer)
    }

    /// Extract the ordered critical-gap list
    pub fn critical_gaps(
        &self,
        answers: &AnswerSet,
        active: Option<&ActiveQuestionSet>,
    ) -> Result<Vec<CriticalGap>> {
        critical_gaps(self.catalog, &self.policy, answers, active)
    }

    /// Generate a remediation roadmap from a gap list
    #[must_use]
    pub fn roadmap(&self, gaps: &[CriticalGap]) -> Vec<RoadmapItem> {
        generate_roadmap(gaps, &self.roadmap_config)
    }

    /// Per-framework coverage summaries
    #[must_use]
    pub fn framework_coverage(&self, answers: &AnswerSet) -> Vec<FrameworkCoverage> {
        framework_coverage(self.catalog, &self.policy, answers, &self.normalizer)
    }

    /// Run the full pipeline and bundle everything into one report.
    pub fn assess(
        &self,
        answers: &AnswerSet,
        active: Option<&ActiveQuestionSet>,
    ) -> Result<AssessmentReport> {
        debug!(
            answers = answers.len(),
            questions = self.catalog.question_count(),
            "running assessment"
        );
        let overall = self.overall_metrics(answers, active)?;
        let gaps = self.critical_gaps(answers, active)?;
        let roadmap = self.roadmap(&gaps);
        let frameworks = self.framework_coverage(answers);

        Ok(AssessmentReport {
            engine_version: ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
            overall,
            gaps,
            roadmap,
            frameworks,
        })
    }
}
