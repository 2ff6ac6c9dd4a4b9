//! Domain-level aggregation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{AnswerSet, Catalog, DomainId, GovernanceFunction, MaturityLevel};

use super::policy::ScoringPolicy;
use super::subcategory::{subcategory_metrics, SubcategoryMetrics};

/// Aggregated metrics for one domain. Regenerated per scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainMetrics {
    /// Domain id
    pub domain_id: DomainId,
    /// Display name
    pub name: String,
    /// Governance lifecycle phase, if tagged
    pub governance_function: Option<GovernanceFunction>,
    /// Weight-weighted mean of subcategory scores (0-1)
    pub score: f64,
    /// Maturity classification of the score
    pub maturity: MaturityLevel,
    /// All questions across the domain's subcategories
    pub total_questions: usize,
    /// Answered questions across the domain
    pub answered_questions: usize,
    /// Applicable questions across the domain
    pub applicable_questions: usize,
    /// Questions both answered and applicable across the domain
    pub covered_questions: usize,
    /// covered / applicable across the whole domain (unweighted)
    pub coverage: f64,
    /// Sum of subcategory critical-gap counts
    pub critical_gaps: usize,
    /// Per-subcategory breakdown, in catalog order
    pub subcategories: Vec<SubcategoryMetrics>,
}

impl DomainMetrics {
    /// Mean of this domain's subcategory weights, used as the domain's own
    /// weight in the overall aggregation. A domain with heavier
    /// subcategories counts more at the top level.
    #[must_use]
    pub fn aggregation_weight(&self) -> f64 {
        if self.subcategories.is_empty() {
            return 0.0;
        }
        let total: f64 = self.subcategories.iter().map(|s| s.weight).sum();
        total / self.subcategories.len() as f64
    }
}

/// Aggregate every subcategory of one domain.
///
/// Subcategories with zero signal (nothing applicable or nothing answered)
/// are excluded from the weighted average entirely; they must not pull the
/// domain score toward zero just for being empty.
pub fn domain_metrics(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    id: &DomainId,
    answers: &AnswerSet,
) -> Result<DomainMetrics> {
    let domain = catalog.domain(id)?;

    let mut subcategories = Vec::new();
    let mut weighted_sum = 0.0f64;
    let mut weight_total = 0.0f64;
    let mut total_questions = 0usize;
    let mut answered = 0usize;
    let mut applicable = 0usize;
    let mut covered = 0usize;
    let mut critical_gaps = 0usize;

    for subcategory_id in catalog.subcategories_in(id) {
        let metrics = subcategory_metrics(catalog, policy, subcategory_id, answers)?;
        if metrics.has_signal() {
            weighted_sum += metrics.score * metrics.weight;
            weight_total += metrics.weight;
        }
        total_questions += metrics.total_questions;
        answered += metrics.answered_questions;
        applicable += metrics.applicable_questions;
        covered += metrics.covered_questions;
        critical_gaps += metrics.critical_gaps;
        subcategories.push(metrics);
    }

    let score = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    };
    let coverage = if applicable > 0 {
        covered as f64 / applicable as f64
    } else {
        0.0
    };

    Ok(DomainMetrics {
        domain_id: domain.id.clone(),
        name: domain.name.clone(),
        governance_function: domain.governance_function,
        score,
        maturity: policy.bands.classify(score),
        total_questions,
        answered_questions: answered,
        applicable_questions: applicable,
        covered_questions: covered,
        coverage,
        critical_gaps,
        subcategories,
    })
}
