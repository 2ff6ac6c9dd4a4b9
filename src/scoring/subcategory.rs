//! Subcategory-level aggregation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{AnswerSet, Catalog, Criticality, MaturityLevel, SubcategoryId};

use super::policy::ScoringPolicy;
use super::question::score_answer;

/// Aggregated metrics for one subcategory. Regenerated per scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryMetrics {
    /// Subcategory id
    pub subcategory_id: SubcategoryId,
    /// Display name
    pub name: String,
    /// Subcategory criticality
    pub criticality: Criticality,
    /// Aggregation weight
    pub weight: f64,
    /// Mean effective score over applicable questions (0-1); 0 when nothing
    /// is answered yet; coverage is the companion "no data" signal
    pub score: f64,
    /// Maturity classification of the score
    pub maturity: MaturityLevel,
    /// All questions in the subcategory
    pub total_questions: usize,
    /// Questions with a set response, regardless of applicability
    pub answered_questions: usize,
    /// Questions counting toward score/coverage denominators
    pub applicable_questions: usize,
    /// Questions both answered and applicable; the coverage numerator.
    /// Not-applicable answers leave the numerator and the denominator.
    pub covered_questions: usize,
    /// covered / applicable (0 when nothing is applicable)
    pub coverage: f64,
    /// Questions below the gap threshold in High/Critical subcategories
    pub critical_gaps: usize,
}

impl SubcategoryMetrics {
    /// Whether this subcategory carries any signal for weighted averages:
    /// at least one applicable and at least one answered question.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        self.applicable_questions > 0 && self.answered_questions > 0
    }
}

/// Aggregate all questions of one subcategory.
///
/// Fails hard if the subcategory id has no catalog entry; everything else
/// resolves through defaulting rules and guarded division.
pub fn subcategory_metrics(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    id: &SubcategoryId,
    answers: &AnswerSet,
) -> Result<SubcategoryMetrics> {
    let subcategory = catalog.subcategory(id)?;
    let question_ids = catalog.questions_in(id);

    let mut answered = 0usize;
    let mut applicable = 0usize;
    let mut covered = 0usize;
    let mut effective_sum = 0.0f64;
    let mut critical_gaps = 0usize;

    for question_id in question_ids {
        let answer = answers.get(question_id);
        if answer.is_some_and(|a| a.is_answered()) {
            answered += 1;
        }
        let score = score_answer(answer, policy);
        if !score.is_applicable {
            continue;
        }
        applicable += 1;
        if let Some(effective) = score.effective_score {
            covered += 1;
            effective_sum += effective;
            if effective < policy.gap_threshold && subcategory.criticality.is_elevated() {
                critical_gaps += 1;
            }
        }
    }

    let score = if answered > 0 && applicable > 0 {
        effective_sum / applicable as f64
    } else {
        0.0
    };
    let coverage = if applicable > 0 {
        covered as f64 / applicable as f64
    } else {
        0.0
    };

    Ok(SubcategoryMetrics {
        subcategory_id: subcategory.id.clone(),
        name: subcategory.name.clone(),
        criticality: subcategory.criticality,
        weight: subcategory.weight,
        score,
        maturity: policy.bands.classify(score),
        total_questions: question_ids.len(),
        answered_questions: answered,
        applicable_questions: applicable,
        covered_questions: covered,
        coverage,
        critical_gaps,
    })
}
