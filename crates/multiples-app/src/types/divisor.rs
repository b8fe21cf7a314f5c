//! The fixed divisor table and the display colors derived from it.
//!
//! Table order is priority order: when a number matches several divisors,
//! the earliest row (the smallest divisor) decides its color.

use serde::{Deserialize, Serialize};

/// Display color of a classified number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Red,
    Blue,
    Neutral,
}

impl DisplayColor {
    /// Color for a record's primary divisor; `None` maps to `Neutral`
    pub fn for_primary(primary: Option<u64>) -> Self {
        primary
            .and_then(rule_for)
            .map(|rule| rule.color)
            .unwrap_or(DisplayColor::Neutral)
    }

    /// CSS class used by the calculator page
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayColor::Green => "text-green-500",
            DisplayColor::Red => "text-red-500",
            DisplayColor::Blue => "text-blue-500",
            DisplayColor::Neutral => "text-black",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayColor::Green => "green",
            DisplayColor::Red => "red",
            DisplayColor::Blue => "blue",
            DisplayColor::Neutral => "neutral",
        }
    }
}

/// One row of the divisor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisorRule {
    pub divisor: u64,
    pub color: DisplayColor,
    /// Heading shown on the home page card
    pub label: &'static str,
}

pub static DIVISOR_TABLE: [DivisorRule; 3] = [
    DivisorRule {
        divisor: 3,
        color: DisplayColor::Green,
        label: "Múltiplos de 3",
    },
    DivisorRule {
        divisor: 5,
        color: DisplayColor::Red,
        label: "Múltiplos de 5",
    },
    DivisorRule {
        divisor: 7,
        color: DisplayColor::Blue,
        label: "Múltiplos de 7",
    },
];

/// Look up the table row for a divisor
pub fn rule_for(divisor: u64) -> Option<&'static DivisorRule> {
    DIVISOR_TABLE.iter().find(|rule| rule.divisor == divisor)
}

impl DivisorRule {
    /// First `count` positive multiples, e.g. `3, 6, 9, 12, 15`
    pub fn sample_multiples(&self, count: u64) -> Vec<u64> {
        (1..=count).map(|k| k * self.divisor).collect()
    }
}
