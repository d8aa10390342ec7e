//! Record filters expressed as Odoo domains.
//!
//! A filter is an ordered list of terms in prefix notation. Predicates are
//! `[field, operator, value]` triples; connectives are the bare tokens `&`,
//! `|` and `!`. Operators and values are passed through untouched.
//!
//! Equality between filters is decided on the canonical JSON form, so two
//! filters holding the same terms in a different order are different filters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Logical connective token of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connective {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "!")]
    Not,
}

/// One element of a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainTerm {
    /// `(field, operator, value)`
    Condition(String, String, Value),
    Connective(Connective),
}

/// An ordered domain restricting which records are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter {
    terms: Vec<DomainTerm>,
}

impl Filter {
    /// The empty filter: no constraint, every record matches.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(terms: Vec<DomainTerm>) -> Self {
        Self { terms }
    }

    /// Single predicate filter.
    pub fn condition(field: &str, operator: &str, value: impl Into<Value>) -> Self {
        Self::empty().with(field, operator, value)
    }

    /// Append a predicate, builder style.
    pub fn with(mut self, field: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.terms.push(DomainTerm::Condition(
            field.to_string(),
            operator.to_string(),
            value.into(),
        ));
        self
    }

    /// Records carrying a non-zero latitude and longitude.
    pub fn geolocated() -> Self {
        Self::condition("latitude", "!=", 0).with("longitude", "!=", 0)
    }

    /// Conjunction of two domains. Top-level terms are implicitly AND-ed, so
    /// concatenation is enough.
    pub fn and(&self, other: &Filter) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend(self.terms.iter().cloned());
        terms.extend(other.terms.iter().cloned());
        Self { terms }
    }

    pub fn terms(&self) -> &[DomainTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compact JSON form used for equality checks.
    pub fn canonical(&self) -> String {
        serde_json::to_string(&self.terms).unwrap_or_default()
    }

    /// Parse a JSON domain such as `[["site_category", "=", "canopy"]]`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
