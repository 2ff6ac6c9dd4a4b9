//! Critical-gap extraction.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::model::{
    AnswerSet, Catalog, Criticality, DomainId, GovernanceFunction, OwnershipRole, QuestionId,
    ResponseValue, SubcategoryId,
};

use super::policy::{ActiveQuestionSet, ScoringPolicy};
use super::question::score_answer;

/// One question judged to be a governance risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalGap {
    /// Gap question
    pub question_id: QuestionId,
    /// Question text for display
    pub question_text: String,
    /// Owning subcategory
    pub subcategory_id: SubcategoryId,
    /// Subcategory display name
    pub subcategory_name: String,
    /// Owning domain
    pub domain_id: DomainId,
    /// Domain display name
    pub domain_name: String,
    /// Subcategory criticality (always High or Critical)
    pub criticality: Criticality,
    /// Effective score; unanswered questions rank as 0.0
    pub effective_score: f64,
    /// Raw response; `None` means the question was never answered, which
    /// renderers must show distinctly from an explicit "No"
    pub response: Option<ResponseValue>,
    /// Raw evidence confidence, if any
    pub evidence: Option<ResponseValue>,
    /// Accountable role, question tag falling back to the subcategory tag
    pub ownership_role: Option<OwnershipRole>,
    /// Governance phase of the owning domain
    pub governance_function: Option<GovernanceFunction>,
}

impl CriticalGap {
    /// Display label for the response, distinguishing "never answered"
    /// from an explicit negative response.
    #[must_use]
    pub fn response_label(&self) -> &'static str {
        self.response.map_or("Not answered", |r| r.name())
    }

    /// Whether the question was never answered
    #[must_use]
    pub fn is_unanswered(&self) -> bool {
        self.response.is_none()
    }
}

/// Scan all in-scope questions and return the ordered critical-gap list.
///
/// Only questions in High/Critical subcategories qualify; a question is a
/// gap when it is unanswered or its effective score falls below the policy
/// threshold. Sorted worst-first: criticality descending, then effective
/// score ascending.
pub fn critical_gaps(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    answers: &AnswerSet,
    active: Option<&ActiveQuestionSet>,
) -> Result<Vec<CriticalGap>> {
    let mut gaps = Vec::new();

    for subcategory in catalog.subcategories() {
        if !subcategory.criticality.is_elevated() {
            continue;
        }
        let domain = catalog.domain(&subcategory.domain_id)?;

        for question_id in catalog.questions_in(&subcategory.id) {
            if active.is_some_and(|a| !a.contains(question_id)) {
                continue;
            }
            let question = catalog.question(question_id)?;
            let answer = answers.get(question_id);
            let score = score_answer(answer, policy);
            if !score.is_applicable {
                continue;
            }

            let gap = match score.effective_score {
                // Unanswered: ranked as 0.0 but surfaced distinctly. Any
                // evidence recorded before the response was set still rides
                // along for display.
                None => CriticalGap {
                    effective_score: 0.0,
                    response: None,
                    evidence: answer.and_then(|a| a.evidence),
                    ..gap_shell(question, subcategory, domain)
                },
                Some(effective) if effective < policy.gap_threshold => CriticalGap {
                    effective_score: effective,
                    response: answer.and_then(|a| a.response),
                    evidence: answer.and_then(|a| a.evidence),
                    ..gap_shell(question, subcategory, domain)
                },
                Some(_) => continue,
            };
            gaps.push(gap);
        }
    }

    gaps.sort_by(|a, b| {
        Reverse(a.criticality)
            .cmp(&Reverse(b.criticality))
            .then_with(|| {
                a.effective_score
                    .partial_cmp(&b.effective_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    debug!(count = gaps.len(), "extracted critical gaps");
    Ok(gaps)
}

fn gap_shell(
    question: &crate::model::Question,
    subcategory: &crate::model::Subcategory,
    domain: &crate::model::Domain,
) -> CriticalGap {
    CriticalGap {
        question_id: question.id.clone(),
        question_text: question.text.clone(),
        subcategory_id: subcategory.id.clone(),
        subcategory_name: subcategory.name.clone(),
        domain_id: domain.id.clone(),
        domain_name: domain.name.clone(),
        criticality: subcategory.criticality,
        effective_score: 0.0,
        response: None,
        evidence: None,
        ownership_role: question.ownership_role.or(subcategory.ownership_role),
        governance_function: domain.governance_function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Domain, Question, Subcategory};

    fn catalog() -> Catalog {
        let subcategory = |id: &str, criticality: Criticality| Subcategory {
            id: id.into(),
            domain_id: "d1".into(),
            name: format!("Subcategory {id}"),
            criticality,
            weight: 1.0,
            ownership_role: Some(OwnershipRole::SecurityEngineering),
            framework_refs: vec![],
        };
        let question = |id: &str, sub: &str| Question {
            id: id.into(),
            subcategory_id: sub.into(),
            domain_id: "d1".into(),
            text: format!("Question {id}?"),
            framework_refs: vec![],
            ownership_role: None,
        };
        Catalog::build(
            vec![Domain {
                id: "d1".into(),
                name: "DevSecOps".to_string(),
                display_order: 1,
                governance_function: Some(GovernanceFunction::Measure),
                description: None,
            }],
            vec![
                subcategory("s-crit", Criticality::Critical),
                subcategory("s-high", Criticality::High),
                subcategory("s-med", Criticality::Medium),
            ],
            vec![
                question("q-crit", "s-crit"),
                question("q-high", "s-high"),
                question("q-med", "s-med"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_only_elevated_criticality_generates_gaps() {
        let mut answers = AnswerSet::new();
        // All three score 0.35, below the threshold.
        for id in ["q-crit", "q-high", "q-med"] {
            answers.insert(Answer::new(
                id,
                Some(ResponseValue::Partial),
                Some(ResponseValue::No),
            ));
        }
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::new(), &answers, None).unwrap();
        assert_eq!(gaps.len(), 2);
        assert!(gaps.iter().all(|g| g.criticality.is_elevated()));
    }

    #[test]
    fn test_sorted_by_criticality_then_score() {
        let mut answers = AnswerSet::new();
        // Critical subcategory scores better than the High one, but still
        // sorts first on criticality.
        answers.insert(Answer::new(
            "q-crit",
            Some(ResponseValue::Partial),
            Some(ResponseValue::Partial),
        )); // 0.45
        answers.insert(Answer::new(
            "q-high",
            Some(ResponseValue::No),
            Some(ResponseValue::Yes),
        )); // 0.0
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::new(), &answers, None).unwrap();
        assert_eq!(gaps[0].question_id.as_str(), "q-crit");
        assert_eq!(gaps[1].question_id.as_str(), "q-high");
    }

    #[test]
    fn test_unanswered_ranks_as_zero_with_distinct_marker() {
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::new(), &AnswerSet::new(), None)
            .unwrap();
        let gap = gaps.iter().find(|g| g.question_id.as_str() == "q-crit").unwrap();
        assert_eq!(gap.effective_score, 0.0);
        assert!(gap.is_unanswered());
        assert_eq!(gap.response_label(), "Not answered");
    }

    #[test]
    fn test_default_policy_detects_subthreshold_gaps() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q-crit",
            Some(ResponseValue::Partial),
            Some(ResponseValue::No),
        )); // 0.35
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::default(), &answers, None).unwrap();
        assert!(gaps.iter().any(|g| g.question_id.as_str() == "q-crit"));
    }

    #[test]
    fn test_na_questions_never_gap() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q-crit",
            Some(ResponseValue::NotApplicable),
            None,
        ));
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::new(), &answers, None).unwrap();
        assert!(gaps.iter().all(|g| g.question_id.as_str() != "q-crit"));
    }

    #[test]
    fn test_unanswered_gap_keeps_recorded_evidence() {
        let mut answers = AnswerSet::new();
        // Evidence captured before any response was chosen.
        answers.insert(Answer::new("q-crit", None, Some(ResponseValue::Yes)));
        let gaps = critical_gaps(&catalog(), &ScoringPolicy::new(), &answers, None).unwrap();
        let gap = gaps
            .iter()
            .find(|g| g.question_id.as_str() == "q-crit")
            .unwrap();
        assert!(gap.is_unanswered());
        assert_eq!(gap.evidence, Some(ResponseValue::Yes));
    }

    #[test]
    fn test_active_set_filters_questions() {
        let active = ActiveQuestionSet::default().with_questions(vec!["q-high".into()]);
        let gaps =
            critical_gaps(&catalog(), &ScoringPolicy::new(), &AnswerSet::new(), Some(&active))
                .unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].question_id.as_str(), "q-high");
    }

    #[test]
    fn test_threshold_override_widens_the_net() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q-crit",
            Some(ResponseValue::Yes),
            Some(ResponseValue::No),
        )); // 0.7
        let default_gaps =
            critical_gaps(&catalog(), &ScoringPolicy::new(), &answers, None).unwrap();
        assert!(default_gaps
            .iter()
            .all(|g| g.question_id.as_str() != "q-crit"));

        let strict = ScoringPolicy::new().with_gap_threshold(0.8);
        let strict_gaps = critical_gaps(&catalog(), &strict, &answers, None).unwrap();
        assert!(strict_gaps
            .iter()
            .any(|g| g.question_id.as_str() == "q-crit"));
    }
}
