//! Per-category advice lookup and severity badges

use crate::RiskTier;
use std::collections::HashMap;

/// Highest category subtotal still badged Low
pub const LOW_SEVERITY_MAX: i64 = 2;
/// Highest category subtotal still badged Medium
pub const MEDIUM_SEVERITY_MAX: i64 = 4;

/// Built-in advice, keyed by exact category name
const ADVICE_TABLE: &[(&str, &str)] = &[
    (
        "Data Sensitivity",
        "Ensure encryption at rest and in transit. Review data classification policies.",
    ),
    (
        "Business Criticality",
        "Implement business continuity and disaster recovery plans.",
    ),
    (
        "Vendor Security Posture",
        "Request third-party audits, certifications, and security test reports.",
    ),
    (
        "Open Source Usage",
        "Assess license compliance and maintain patch management processes.",
    ),
    (
        "Internet Exposure",
        "Enable multi-factor authentication and web application firewalls.",
    ),
    (
        "Compliance Requirements",
        "Engage compliance team to ensure legal obligations are met.",
    ),
    (
        "Incident Response",
        "Ensure vendor conducts regular IR drills and communicates plans.",
    ),
    (
        "Vendor Location",
        "Review cross-border data transfer agreements.",
    ),
    (
        "Contractual Protections",
        "Add specific SLAs, penalties, and breach notification requirements.",
    ),
];

/// Advice returned for categories missing from the table
const UNKNOWN_CATEGORY_ADVICE: &str = "";

/// Severity badge and advice text for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub severity: RiskTier,
    pub text: String,
}

/// Badge for a category subtotal
pub fn severity_for(subtotal: i64) -> RiskTier {
    if subtotal <= LOW_SEVERITY_MAX {
        RiskTier::Low
    } else if subtotal <= MEDIUM_SEVERITY_MAX {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Advice from the built-in table. Unknown categories get empty text.
pub fn advise(category: &str, subtotal: i64) -> Advice {
    Advisor::new().advise(category, subtotal)
}

/// Advice lookup with optional per-category text supplied by configuration.
/// Configured entries take precedence over the built-in table.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    overrides: HashMap<String, String>,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    pub fn advise(&self, category: &str, subtotal: i64) -> Advice {
        Advice {
            severity: severity_for(subtotal),
            text: self.text_for(category).to_string(),
        }
    }

    pub fn text_for(&self, category: &str) -> &str {
        if let Some(text) = self.overrides.get(category) {
            return text;
        }
        ADVICE_TABLE
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, text)| *text)
            .unwrap_or_else(|| {
                tracing::debug!("no advice for category '{}'", category);
                UNKNOWN_CATEGORY_ADVICE
            })
    }

    /// Categories with built-in advice
    pub fn known_categories() -> impl Iterator<Item = &'static str> {
        ADVICE_TABLE.iter().map(|(name, _)| *name)
    }
}
