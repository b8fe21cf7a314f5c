//! Request and response bodies for the JSON API

use serde::{Deserialize, Serialize};

use crate::types::divisor::{DisplayColor, DivisorRule};

/// Query string for `GET /api/classify`
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyQuery {
    /// Kept as text so malformed or missing input reaches the bound parser
    #[serde(default)]
    pub bound: String,
}

/// Form body for `POST /calculator`
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub number: String,
}

/// Response for `GET /api/divisors`
#[derive(Debug, Clone, Serialize)]
pub struct DivisorsResponse {
    pub divisors: Vec<DivisorInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisorInfo {
    pub divisor: u64,
    pub color: DisplayColor,
    pub label: String,
}

impl From<&DivisorRule> for DivisorInfo {
    fn from(rule: &DivisorRule) -> Self {
        Self {
            divisor: rule.divisor,
            color: rule.color,
            label: rule.label.to_string(),
        }
    }
}

/// Error body returned by the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
