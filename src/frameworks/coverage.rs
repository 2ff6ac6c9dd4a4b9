//! Per-framework coverage and score aggregation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, Catalog};
use crate::scoring::{score_answer, ScoringPolicy};

use super::normalize::FrameworkNormalizer;

/// Coverage/score summary for one canonical framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkCoverage {
    /// Canonical framework display name
    pub framework: String,
    /// Questions tagged with this framework
    pub total_questions: usize,
    /// Tagged questions with a set response
    pub answered_questions: usize,
    /// answered / total (0 when nothing is tagged)
    pub coverage: f64,
    /// Mean effective score over scored answers (0 when none are scored)
    pub mean_score: f64,
}

#[derive(Default)]
struct Accumulator {
    total: usize,
    answered: usize,
    effective_sum: f64,
    scored: usize,
}

/// Aggregate answer coverage per canonical framework.
///
/// Each question's raw tags (its own plus its subcategory's inherited
/// tags) pass through the normalizer; unmatched and excluded tags drop
/// out silently. Output is restricted to the normalizer's allow-list, in
/// allow-list order, and omits frameworks with no tagged questions.
#[must_use]
pub fn framework_coverage(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    answers: &AnswerSet,
    normalizer: &FrameworkNormalizer,
) -> Vec<FrameworkCoverage> {
    let mut by_framework: HashMap<&'static str, Accumulator> = HashMap::new();

    for question in catalog.questions() {
        // One question counts once per framework, however many of its raw
        // tags normalize to the same canonical name.
        let canonicals: HashSet<&'static str> = catalog
            .framework_refs_for(question)
            .into_iter()
            .filter_map(|tag| normalizer.normalize(tag))
            .collect();
        if canonicals.is_empty() {
            continue;
        }

        let answer = answers.get(&question.id);
        let answered = answer.is_some_and(|a| a.is_answered());
        let score = score_answer(answer, policy);

        for canonical in canonicals {
            let acc = by_framework.entry(canonical).or_default();
            acc.total += 1;
            if answered {
                acc.answered += 1;
            }
            if let Some(effective) = score.effective_score {
                acc.effective_sum += effective;
                acc.scored += 1;
            }
        }
    }

    normalizer
        .allow_list()
        .iter()
        .filter_map(|framework| {
            let acc = by_framework.get(framework)?;
            Some(FrameworkCoverage {
                framework: (*framework).to_string(),
                total_questions: acc.total,
                answered_questions: acc.answered,
                coverage: if acc.total > 0 {
                    acc.answered as f64 / acc.total as f64
                } else {
                    0.0
                },
                mean_score: if acc.scored > 0 {
                    acc.effective_sum / acc.scored as f64
                } else {
                    0.0
                },
            })
        })
        .collect()
}
