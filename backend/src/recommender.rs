//! Recommendation Module
//!
//! Matches a user's interests and strengths against a fixed, ordered set of
//! career rules. Each rule is an independent predicate; the output keeps the
//! rule order and only ever names careers drawn from the catalog.
//!
//! Recommending is a pure function of the request and the static catalog.

use crate::catalog::{
    CareerCatalog, CareerEntry, GRAPHIC_DESIGNER, MARKETING_SPECIALIST, NURSE, SOFTWARE_ENGINEER,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================
// REQUEST / RESULT TYPES
// ============================================================

/// Lowercase-normalized interests and strengths for a single call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRequest {
    interests: HashSet<String>,
    strengths: HashSet<String>,
}

impl RecommendationRequest {
    pub fn new<I, S>(interests: I, strengths: S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            interests: normalize(interests),
            strengths: normalize(strengths),
        }
    }

    pub fn interests(&self) -> &HashSet<String> {
        &self.interests
    }

    pub fn strengths(&self) -> &HashSet<String> {
        &self.strengths
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty() && self.strengths.is_empty()
    }

    fn has_any_interest(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.interests.contains(*c))
    }

    fn has_any_strength(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.strengths.contains(*c))
    }
}

fn normalize<T>(values: T) -> HashSet<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_lowercase())
        .collect()
}

/// A matched career, copied out of the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerRecommendation {
    pub career: String,
    pub description: String,
    pub roadmap: Vec<String>,
}

impl From<&CareerEntry> for CareerRecommendation {
    fn from(entry: &CareerEntry) -> Self {
        Self {
            career: entry.name.to_string(),
            description: entry.description.to_string(),
            roadmap: entry.roadmap.iter().map(|step| step.to_string()).collect(),
        }
    }
}

// ============================================================
// CAREER RULES
// ============================================================

/// Fixed inclusion rule for one catalog career
struct CareerRule {
    career: &'static str,
    matches: fn(&RecommendationRequest) -> bool,
}

/// Evaluated in order; output order follows this table.
const CAREER_RULES: [CareerRule; 4] = [
    CareerRule {
        career: SOFTWARE_ENGINEER,
        matches: software_engineer,
    },
    CareerRule {
        career: GRAPHIC_DESIGNER,
        matches: graphic_designer,
    },
    CareerRule {
        career: MARKETING_SPECIALIST,
        matches: marketing_specialist,
    },
    CareerRule {
        career: NURSE,
        matches: nurse,
    },
];

fn software_engineer(req: &RecommendationRequest) -> bool {
    req.has_any_interest(&["coding", "technology"])
        && req.has_any_strength(&["problem solving", "logic"])
}

// Strengths are irrelevant here.
fn graphic_designer(req: &RecommendationRequest) -> bool {
    req.has_any_interest(&["creativity", "design"])
}

fn marketing_specialist(req: &RecommendationRequest) -> bool {
    req.has_any_interest(&["business", "management"])
        && req.has_any_strength(&["communication", "strategic thinking"])
}

fn nurse(req: &RecommendationRequest) -> bool {
    req.has_any_interest(&["healthcare", "medicine"]) && req.has_any_strength(&["empathy"])
}

// ============================================================
// RECOMMENDER
// ============================================================

/// Applies the career rules against a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    catalog: CareerCatalog,
}

impl Recommender {
    pub fn new(catalog: CareerCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Recommend careers for the given request.
    ///
    /// Unmatched input yields an empty list, never an error. A matching rule
    /// whose career is absent from the catalog is skipped and logged.
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<CareerRecommendation> {
        let mut recommendations = Vec::new();

        for rule in CAREER_RULES.iter().filter(|rule| (rule.matches)(request)) {
            match self.catalog.get(rule.career) {
                Some(entry) => recommendations.push(CareerRecommendation::from(entry)),
                None => {
                    log::error!("[RECOMMEND] Rule references unknown career: {}", rule.career);
                }
            }
        }

        log::debug!(
            "[RECOMMEND] interests={:?} strengths={:?} -> {} match(es)",
            request.interests,
            request.strengths,
            recommendations.len()
        );

        recommendations
    }
}

/// Recommend careers from the built-in catalog
pub fn recommend_careers<I, S>(interests: I, strengths: S) -> Vec<CareerRecommendation>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    Recommender::default().recommend(&RecommendationRequest::new(interests, strengths))
}
