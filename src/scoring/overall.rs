//! Overall aggregation and cross-cutting views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::frameworks::{classify_framework, FrameworkCategory, FrameworkNormalizer};
use crate::model::{AnswerSet, Catalog, GovernanceFunction, MaturityLevel, OwnershipRole};

use super::domain::{domain_metrics, DomainMetrics};
use super::policy::{ActiveQuestionSet, ScoringPolicy};
use super::question::score_answer;

/// Metrics for one governance lifecycle phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceFunctionMetrics {
    /// Lifecycle phase
    pub function: GovernanceFunction,
    /// Member domains carrying this tag
    pub domain_count: usize,
    /// Mean score over member domains with any answered question
    pub score: f64,
    /// answered / total across all member domains' questions
    pub coverage: f64,
}

/// Metrics for one ownership role, computed directly over role-tagged
/// questions, independent of the domain hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMetrics {
    /// Accountable role
    pub role: OwnershipRole,
    /// Questions carrying this role tag
    pub total_questions: usize,
    /// Role-tagged questions with a set response
    pub answered_questions: usize,
    /// Mean effective score over applicable role-tagged questions
    pub score: f64,
    /// Fraction of applicable role-tagged questions answered
    pub coverage: f64,
}

/// Metrics for one editorial framework category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// Framework category
    pub category: FrameworkCategory,
    /// Questions whose tags classify into this category
    pub total_questions: usize,
    /// Member questions with a set response
    pub answered_questions: usize,
    /// Mean effective score over applicable member questions
    pub score: f64,
    /// Fraction of applicable member questions answered
    pub coverage: f64,
}

/// Platform-wide aggregated metrics. Regenerated per scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallMetrics {
    /// Weighted score across all domains (0-1)
    pub score: f64,
    /// Maturity classification of the overall score
    pub maturity: MaturityLevel,
    /// All catalog questions
    pub total_questions: usize,
    /// Questions with a set response
    pub answered_questions: usize,
    /// Questions counting toward denominators
    pub applicable_questions: usize,
    /// Questions both answered and applicable
    pub covered_questions: usize,
    /// covered / applicable, or covered / active-count override capped
    /// at 1.0 when the caller supplies one
    pub coverage: f64,
    /// Mean evidence multiplier over answered non-NA questions; how much
    /// of what is reported is actually backed by evidence
    pub evidence_readiness: f64,
    /// Sum of domain critical-gap counts
    pub critical_gaps: usize,
    /// Per-domain breakdown, in display order
    pub domains: Vec<DomainMetrics>,
    /// Per-governance-function view
    pub governance_functions: Vec<GovernanceFunctionMetrics>,
    /// Per-ownership-role view
    pub roles: Vec<RoleMetrics>,
    /// Per-framework-category view
    pub framework_categories: Vec<CategoryMetrics>,
}

/// Aggregate every domain into platform-wide metrics plus the three
/// cross-cutting views.
///
/// Each domain weighs in with the mean of its subcategory weights, so a
/// domain with heavier subcategories counts more; domains without a single
/// answered question are excluded from the weighted average, mirroring the
/// subcategory-level zero-signal rule.
pub fn overall_metrics(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    answers: &AnswerSet,
    active: Option<&ActiveQuestionSet>,
    normalizer: &FrameworkNormalizer,
) -> Result<OverallMetrics> {
    let mut domains = Vec::new();
    let mut weighted_sum = 0.0f64;
    let mut weight_total = 0.0f64;
    let mut answered = 0usize;
    let mut applicable = 0usize;
    let mut covered = 0usize;
    let mut critical_gaps = 0usize;

    for domain in catalog.domains() {
        let metrics = domain_metrics(catalog, policy, &domain.id, answers)?;
        if metrics.applicable_questions > 0 && metrics.answered_questions > 0 {
            let weight = metrics.aggregation_weight();
            weighted_sum += metrics.score * weight;
            weight_total += weight;
        }
        answered += metrics.answered_questions;
        applicable += metrics.applicable_questions;
        covered += metrics.covered_questions;
        critical_gaps += metrics.critical_gaps;
        domains.push(metrics);
    }

    let score = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    };

    let coverage = match active.and_then(ActiveQuestionSet::active_count) {
        Some(0) => 0.0,
        Some(count) => (covered as f64 / count as f64).min(1.0),
        None => {
            if applicable > 0 {
                covered as f64 / applicable as f64
            } else {
                0.0
            }
        }
    };

    let metrics = OverallMetrics {
        score,
        maturity: policy.bands.classify(score),
        total_questions: catalog.question_count(),
        answered_questions: answered,
        applicable_questions: applicable,
        covered_questions: covered,
        coverage,
        evidence_readiness: evidence_readiness(catalog, policy, answers),
        critical_gaps,
        governance_functions: governance_view(&domains),
        roles: role_view(catalog, policy, answers),
        framework_categories: category_view(catalog, policy, answers, normalizer),
        domains,
    };
    debug!(
        score = metrics.score,
        coverage = metrics.coverage,
        critical_gaps = metrics.critical_gaps,
        "computed overall metrics"
    );
    Ok(metrics)
}

/// Mean evidence multiplier across all answered, applicable questions.
fn evidence_readiness(catalog: &Catalog, policy: &ScoringPolicy, answers: &AnswerSet) -> f64 {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for question in catalog.questions() {
        let score = score_answer(answers.get(&question.id), policy);
        if let Some(multiplier) = score.evidence_multiplier {
            sum += multiplier;
            count += 1;
        }
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Group domains by governance function tag.
fn governance_view(domains: &[DomainMetrics]) -> Vec<GovernanceFunctionMetrics> {
    GovernanceFunction::all()
        .iter()
        .filter_map(|&function| {
            let members: Vec<&DomainMetrics> = domains
                .iter()
                .filter(|d| d.governance_function == Some(function))
                .collect();
            if members.is_empty() {
                return None;
            }

            // Score averages only over domains with any answered question;
            // coverage still counts every member domain's questions.
            let scored: Vec<&&DomainMetrics> = members
                .iter()
                .filter(|d| d.answered_questions > 0)
                .collect();
            let score = if scored.is_empty() {
                0.0
            } else {
                scored.iter().map(|d| d.score).sum::<f64>() / scored.len() as f64
            };

            let total: usize = members.iter().map(|d| d.total_questions).sum();
            let answered: usize = members.iter().map(|d| d.answered_questions).sum();
            Some(GovernanceFunctionMetrics {
                function,
                domain_count: members.len(),
                score,
                coverage: if total > 0 {
                    answered as f64 / total as f64
                } else {
                    0.0
                },
            })
        })
        .collect()
}

/// Aggregate directly over role-tagged questions.
fn role_view(catalog: &Catalog, policy: &ScoringPolicy, answers: &AnswerSet) -> Vec<RoleMetrics> {
    OwnershipRole::all()
        .iter()
        .filter_map(|&role| {
            let mut total = 0usize;
            let mut answered = 0usize;
            let mut applicable = 0usize;
            let mut covered = 0usize;
            let mut effective_sum = 0.0f64;

            for question in catalog.questions() {
                if question.ownership_role != Some(role) {
                    continue;
                }
                total += 1;
                let answer = answers.get(&question.id);
                if answer.is_some_and(|a| a.is_answered()) {
                    answered += 1;
                }
                let score = score_answer(answer, policy);
                if score.is_applicable {
                    applicable += 1;
                    if let Some(effective) = score.effective_score {
                        covered += 1;
                        effective_sum += effective;
                    }
                }
            }

            if total == 0 {
                return None;
            }
            Some(RoleMetrics {
                role,
                total_questions: total,
                answered_questions: answered,
                score: if answered > 0 && applicable > 0 {
                    effective_sum / applicable as f64
                } else {
                    0.0
                },
                coverage: if applicable > 0 {
                    covered as f64 / applicable as f64
                } else {
                    0.0
                },
            })
        })
        .collect()
}

/// Classify questions into framework categories through the normalizer.
///
/// A question's raw tags (own plus inherited from its subcategory) are
/// normalized and classified; one question can land in several categories.
fn category_view(
    catalog: &Catalog,
    policy: &ScoringPolicy,
    answers: &AnswerSet,
    normalizer: &FrameworkNormalizer,
) -> Vec<CategoryMetrics> {
    use std::collections::HashSet;

    #[derive(Default)]
    struct Acc {
        total: usize,
        answered: usize,
        applicable: usize,
        covered: usize,
        effective_sum: f64,
    }
    let mut accs: std::collections::HashMap<FrameworkCategory, Acc> =
        std::collections::HashMap::new();

    for question in catalog.questions() {
        let categories: HashSet<FrameworkCategory> = catalog
            .framework_refs_for(question)
            .into_iter()
            .filter_map(|tag| normalizer.normalize(tag))
            .filter_map(classify_framework)
            .collect();
        if categories.is_empty() {
            continue;
        }

        let answer = answers.get(&question.id);
        let answered = answer.is_some_and(|a| a.is_answered());
        let score = score_answer(answer, policy);

        for category in categories {
            let acc = accs.entry(category).or_default();
            acc.total += 1;
            if answered {
                acc.answered += 1;
            }
            if score.is_applicable {
                acc.applicable += 1;
                if let Some(effective) = score.effective_score {
                    acc.covered += 1;
                    acc.effective_sum += effective;
                }
            }
        }
    }

    FrameworkCategory::all()
        .iter()
        .filter_map(|category| {
            let acc = accs.get(category)?;
            Some(CategoryMetrics {
                category: *category,
                total_questions: acc.total,
                answered_questions: acc.answered,
                score: if acc.answered > 0 && acc.applicable > 0 {
                    acc.effective_sum / acc.applicable as f64
                } else {
                    0.0
                },
                coverage: if acc.applicable > 0 {
                    acc.covered as f64 / acc.applicable as f64
                } else {
                    0.0
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Answer, Criticality, Domain, Question, ResponseValue, Subcategory,
    };

    fn fixture() -> Catalog {
        Catalog::build(
            vec![
                Domain {
                    id: "d1".into(),
                    name: "AI Governance".to_string(),
                    display_order: 1,
                    governance_function: Some(GovernanceFunction::Govern),
                    description: None,
                },
                Domain {
                    id: "d2".into(),
                    name: "Cloud Security".to_string(),
                    display_order: 2,
                    governance_function: Some(GovernanceFunction::Manage),
                    description: None,
                },
            ],
            vec![
                Subcategory {
                    id: "s1".into(),
                    domain_id: "d1".into(),
                    name: "Policy".to_string(),
                    criticality: Criticality::Critical,
                    weight: 2.0,
                    ownership_role: None,
                    framework_refs: vec![],
                },
                Subcategory {
                    id: "s2".into(),
                    domain_id: "d2".into(),
                    name: "Workload Hardening".to_string(),
                    criticality: Criticality::High,
                    weight: 4.0,
                    ownership_role: None,
                    framework_refs: vec![],
                },
            ],
            vec![
                Question {
                    id: "q1".into(),
                    subcategory_id: "s1".into(),
                    domain_id: "d1".into(),
                    text: "Is an AI security policy approved?".to_string(),
                    framework_refs: vec!["NIST AI RMF GOVERN 1.1".to_string()],
                    ownership_role: Some(OwnershipRole::Ciso),
                },
                Question {
                    id: "q2".into(),
                    subcategory_id: "s2".into(),
                    domain_id: "d2".into(),
                    text: "Are workloads baseline-hardened?".to_string(),
                    framework_refs: vec!["ISO 27001 A.8".to_string()],
                    ownership_role: Some(OwnershipRole::PlatformOps),
                },
            ],
        )
        .unwrap()
    }

    fn compute(answers: &AnswerSet, active: Option<&ActiveQuestionSet>) -> OverallMetrics {
        overall_metrics(
            &fixture(),
            &ScoringPolicy::new(),
            answers,
            active,
            &FrameworkNormalizer::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_domain_weights_are_mean_subcategory_weights() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q1",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        )); // d1 score 1.0, weight 2
        answers.insert(Answer::new(
            "q2",
            Some(ResponseValue::No),
            Some(ResponseValue::Yes),
        )); // d2 score 0.0, weight 4
        let metrics = compute(&answers, None);
        // (1.0*2 + 0.0*4) / 6
        assert!((metrics.score - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_unanswered_domain_excluded_from_overall_score() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q1",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        ));
        let metrics = compute(&answers, None);
        // d2 has no answers and a heavier weight; it must not dilute.
        assert!((metrics.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_evidence_readiness_means_multipliers() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q1",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        )); // 1.0
        answers.insert(Answer::new("q2", Some(ResponseValue::Yes), None)); // 0.7
        let metrics = compute(&answers, None);
        assert!((metrics.evidence_readiness - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_active_count_override_caps_coverage() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q1",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        ));
        answers.insert(Answer::new(
            "q2",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        ));
        let active = ActiveQuestionSet::default().with_active_count(1);
        let metrics = compute(&answers, Some(&active));
        assert_eq!(metrics.coverage, 1.0);
    }

    #[test]
    fn test_governance_view_groups_domains() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q1",
            Some(ResponseValue::Partial),
            Some(ResponseValue::Partial),
        )); // 0.5 * 0.9 = 0.45
        let metrics = compute(&answers, None);
        let govern = metrics
            .governance_functions
            .iter()
            .find(|g| g.function == GovernanceFunction::Govern)
            .unwrap();
        assert_eq!(govern.domain_count, 1);
        assert!((govern.score - 0.45).abs() < 1e-9);
        let manage = metrics
            .governance_functions
            .iter()
            .find(|g| g.function == GovernanceFunction::Manage)
            .unwrap();
        assert_eq!(manage.score, 0.0);
        assert_eq!(manage.coverage, 0.0);
    }

    #[test]
    fn test_role_view_is_question_level() {
        let mut answers = AnswerSet::new();
        answers.insert(Answer::new(
            "q2",
            Some(ResponseValue::Yes),
            Some(ResponseValue::Yes),
        ));
        let metrics = compute(&answers, None);
        let ops = metrics
            .roles
            .iter()
            .find(|r| r.role == OwnershipRole::PlatformOps)
            .unwrap();
        assert_eq!(ops.total_questions, 1);
        assert!((ops.score - 1.0).abs() < 1e-9);
        let ciso = metrics
            .roles
            .iter()
            .find(|r| r.role == OwnershipRole::Ciso)
            .unwrap();
        assert_eq!(ciso.answered_questions, 0);
    }

    #[test]
    fn test_category_view_classifies_tags() {
        let metrics = compute(&AnswerSet::new(), None);
        let ai = metrics
            .framework_categories
            .iter()
            .find(|c| c.category == FrameworkCategory::AiGovernance)
            .unwrap();
        assert_eq!(ai.total_questions, 1);
        let infosec = metrics
            .framework_categories
            .iter()
            .find(|c| c.category == FrameworkCategory::InformationSecurity)
            .unwrap();
        assert_eq!(infosec.total_questions, 1);
    }
}
