//! Framework-name normalization.
//!
//! Reference data carries free-text framework tags with inconsistent and
//! legacy naming ("NIST AI RMF GOVERN 1.1", "iso42001:2023 §6.1", ...).
//! Normalization runs an ordered list of `(pattern, canonical)` rules,
//! first match wins; a rule with no canonical name excludes the tag, and
//! tags matching nothing are excluded as well. The rule list is data, not
//! branching, so it can be tested rule-by-rule and extended without
//! touching aggregation logic.

use regex::Regex;

/// One normalization rule: a pattern and the canonical name it maps to.
///
/// `canonical: None` marks an explicit exclusion (deprecated or tangential
/// standards suppressed from coverage output).
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    pattern: Regex,
    canonical: Option<&'static str>,
}

impl NormalizationRule {
    /// Create a rule mapping tags matching `pattern` to `canonical`.
    ///
    /// Patterns are compiled case-insensitively. Panics on an invalid
    /// pattern, which is acceptable for the static built-in rule set;
    /// use [`NormalizationRule::try_new`] for caller-supplied rules.
    #[must_use]
    pub fn new(pattern: &str, canonical: &'static str) -> Self {
        Self {
            pattern: case_insensitive(pattern),
            canonical: Some(canonical),
        }
    }

    /// Create an exclusion rule: matching tags map to nothing.
    #[must_use]
    pub fn exclude(pattern: &str) -> Self {
        Self {
            pattern: case_insensitive(pattern),
            canonical: None,
        }
    }

    /// Fallible constructor for caller-supplied rules.
    pub fn try_new(
        pattern: &str,
        canonical: Option<&'static str>,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()?,
            canonical,
        })
    }

    fn matches(&self, tag: &str) -> bool {
        self.pattern.is_match(tag)
    }
}

fn case_insensitive(pattern: &str) -> Regex {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in normalization pattern '{pattern}': {e}"))
}

/// Ordered, first-match-wins normalizer for free-text framework tags.
#[derive(Debug, Clone)]
pub struct FrameworkNormalizer {
    rules: Vec<NormalizationRule>,
    allow_list: Vec<&'static str>,
}

impl FrameworkNormalizer {
    /// Build a normalizer from explicit rules and an allow-list of
    /// canonical names that may appear in coverage output.
    #[must_use]
    pub fn new(rules: Vec<NormalizationRule>, allow_list: Vec<&'static str>) -> Self {
        Self { rules, allow_list }
    }

    /// Normalize one raw tag to its canonical framework name.
    ///
    /// Returns `None` for excluded and unrecognized tags; per policy that
    /// is editorial filtering, not an error.
    #[must_use]
    pub fn normalize(&self, tag: &str) -> Option<&'static str> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        for rule in &self.rules {
            if rule.matches(tag) {
                return rule.canonical;
            }
        }
        None
    }

    /// Canonical names allowed in coverage output, in report order
    #[must_use]
    pub fn allow_list(&self) -> &[&'static str] {
        &self.allow_list
    }

    /// Whether a canonical name is emitted in the final report
    #[must_use]
    pub fn is_allowed(&self, canonical: &str) -> bool {
        self.allow_list.contains(&canonical)
    }
}

impl Default for FrameworkNormalizer {
    /// The curated rule set for the authoritative standards this platform
    /// reports on, plus exclusions for legacy names still present in old
    /// reference data.
    fn default() -> Self {
        let rules = vec![
            // Explicit exclusions first so they win over broader patterns.
            NormalizationRule::exclude(r"bsimm|owasp\s*samm"),
            NormalizationRule::exclude(r"cobit"),
            NormalizationRule::new(r"nist\s*ai\s*rmf|ai\s*rmf\s*\d|govern\s*\d+\.\d+", "NIST AI RMF"),
            NormalizationRule::new(r"iso\s*/?\s*(iec)?\s*42001", "ISO/IEC 42001"),
            NormalizationRule::new(r"iso\s*/?\s*(iec)?\s*27001|iso27k", "ISO/IEC 27001"),
            NormalizationRule::new(r"eu\s*ai\s*act|ai\s*act\s*art", "EU AI Act"),
            NormalizationRule::new(r"owasp\s*(llm|top\s*10\s*for\s*llm)", "OWASP LLM Top 10"),
            NormalizationRule::new(r"mitre\s*atlas|atlas\s*t\d{4}", "MITRE ATLAS"),
            NormalizationRule::new(r"nist\s*csf|csf\s*2", "NIST CSF"),
            NormalizationRule::new(r"csa\s*ccm|cloud\s*controls\s*matrix", "CSA CCM"),
            NormalizationRule::new(r"soc\s*2", "SOC 2"),
            NormalizationRule::new(r"gdpr", "GDPR"),
            NormalizationRule::new(r"lgpd", "LGPD"),
            // Computed internally but not in the allow-list below.
            NormalizationRule::new(r"pci\s*dss", "PCI DSS"),
        ];
        let allow_list = vec![
            "NIST AI RMF",
            "ISO/IEC 42001",
            "ISO/IEC 27001",
            "EU AI Act",
            "OWASP LLM Top 10",
            "MITRE ATLAS",
            "NIST CSF",
            "CSA CCM",
            "SOC 2",
            "GDPR",
            "LGPD",
        ];
        Self::new(rules, allow_list)
    }
}
