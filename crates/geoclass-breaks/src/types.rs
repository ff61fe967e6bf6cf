//! Core types for class representation

use geoclass_core::{AttributeValue, Error, Result, SymbolValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Equal-width value ranges
    EqualInterval,
    /// Equally many features per class, by rank
    EqualCount,
    /// One class per distinct value
    Categorical,
    /// Fisher-Jenks variance-minimizing breaks
    NaturalBreaks,
}

impl Algorithm {
    /// How features are matched against classes built by this algorithm
    pub fn membership(self) -> Membership {
        match self {
            Algorithm::EqualInterval | Algorithm::NaturalBreaks => Membership::Value,
            Algorithm::EqualCount => Membership::Rank,
            Algorithm::Categorical => Membership::Unique,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::EqualInterval => "equal interval",
            Algorithm::EqualCount => "equal classes",
            Algorithm::Categorical => "categorical",
            Algorithm::NaturalBreaks => "natural breaks",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "equal interval" => Ok(Algorithm::EqualInterval),
            "equal classes" | "equal count" | "quantile" => Ok(Algorithm::EqualCount),
            "categorical" | "unique" | "unique value" => Ok(Algorithm::Categorical),
            "natural breaks" | "jenks" => Ok(Algorithm::NaturalBreaks),
            _ => Err(Error::invalid_argument(format!(
                "classification type '{s}' must be one of: equal interval, equal classes, categorical, natural breaks"
            ))),
        }
    }
}

/// Rule deciding which class a feature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Value within the class bounds, both inclusive
    Value,
    /// Sorted position within the class rank range
    Rank,
    /// Value equal to the class value
    Unique,
}

/// Membership bounds of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassRange {
    /// Value-space bounds, both inclusive
    Value { min: f64, max: f64 },
    /// Rank bounds into the sorted values, both inclusive
    Rank { first: usize, last: usize },
    /// A single category
    Exact { value: AttributeValue },
}

impl ClassRange {
    /// Test a feature's sorted position and value against these bounds
    pub fn contains(&self, rank: usize, value: &AttributeValue) -> bool {
        match self {
            ClassRange::Value { min, max } => value
                .as_number()
                .is_some_and(|v| v >= *min && v <= *max),
            ClassRange::Rank { first, last } => rank >= *first && rank <= *last,
            ClassRange::Exact { value: class_value } => class_value == value,
        }
    }
}

/// One class of a classification: bounds plus the symbol it assigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolClass {
    /// Bounds used for the membership test
    pub range: ClassRange,
    /// Smallest value shown for this class in a legend
    pub membership_min: AttributeValue,
    /// Largest value shown for this class in a legend
    pub membership_max: AttributeValue,
    /// Position of the class, starting at 0
    pub ordinal: usize,
    /// Symbol assigned to members
    pub symbol: SymbolValue,
}

impl SymbolClass {
    /// Check if a feature falls within this class
    pub fn contains(&self, rank: usize, value: &AttributeValue) -> bool {
        self.range.contains(rank, value)
    }

    /// Legend label, e.g. `"1.5 - 3"` or the category itself
    pub fn label(&self) -> String {
        match &self.range {
            ClassRange::Exact { value } => format_value(value),
            _ => format!(
                "{} - {}",
                format_value(&self.membership_min),
                format_value(&self.membership_max)
            ),
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} [{}]: {}", self.ordinal, self.label(), self.symbol)
    }
}

/// Numbers with at most two decimals, trailing zeros dropped
fn format_value(value: &AttributeValue) -> String {
    match value.as_number() {
        Some(n) => {
            let text = format!("{n:.2}");
            let text = text.trim_end_matches('0').trim_end_matches('.');
            if text == "-0" {
                "0".to_string()
            } else {
                text.to_string()
            }
        }
        None => value.to_string(),
    }
}
