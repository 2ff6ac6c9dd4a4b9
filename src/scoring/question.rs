//! Single-question scoring.

use serde::{Deserialize, Serialize};

use crate::model::Answer;

use super::policy::ScoringPolicy;

/// Score derived from one answer. Never persisted; recomputed per pass.
///
/// All score fields are `None` for unanswered and not-applicable questions.
/// Unanswered questions stay applicable (they count against coverage);
/// not-applicable ones leave every denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestionScore {
    /// Raw response score, if scorable
    pub response_score: Option<f64>,
    /// Evidence multiplier, if scorable
    pub evidence_multiplier: Option<f64>,
    /// `response_score * evidence_multiplier`, if scorable
    pub effective_score: Option<f64>,
    /// Whether this question counts toward score/coverage denominators
    pub is_applicable: bool,
}

impl QuestionScore {
    /// The score of an unanswered question: applicable, all fields null.
    ///
    /// Null, not zero: unanswered questions must not drag averages down;
    /// they are excluded from answered-average numerators and denominators
    /// but still count as applicable for coverage.
    #[must_use]
    pub const fn unanswered() -> Self {
        Self {
            response_score: None,
            evidence_multiplier: None,
            effective_score: None,
            is_applicable: true,
        }
    }

    /// The score of a not-applicable question: excluded everywhere.
    #[must_use]
    pub const fn not_applicable() -> Self {
        Self {
            response_score: None,
            evidence_multiplier: None,
            effective_score: None,
            is_applicable: false,
        }
    }
}

/// Score a single optional answer under a policy. Pure function.
#[must_use]
pub fn score_answer(answer: Option<&Answer>, policy: &ScoringPolicy) -> QuestionScore {
    let Some(answer) = answer else {
        return QuestionScore::unanswered();
    };
    let Some(response) = answer.response else {
        return QuestionScore::unanswered();
    };
    let Some(response_score) = policy.response_scores.score(response) else {
        return QuestionScore::not_applicable();
    };

    let multiplier = policy.evidence_multipliers.multiplier(answer.evidence);
    QuestionScore {
        response_score: Some(response_score),
        evidence_multiplier: Some(multiplier),
        effective_score: Some(response_score * multiplier),
        is_applicable: true,
    }
}
