//! Read-only legend view of a classification

use crate::classifier::Classification;
use geoclass_core::{AttributeValue, SymbolType, SymbolValue};
use serde::Serialize;

/// One legend row: a label and the swatch drawn next to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub min: AttributeValue,
    pub max: AttributeValue,
    pub symbol: SymbolValue,
}

/// Everything a legend renderer needs for one classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    /// Caption: the attribute field that was classified
    pub value_field: String,
    pub symbol_type: SymbolType,
    pub entries: Vec<LegendEntry>,
}

impl Classification {
    /// Legend rows in class order, empty until the classification is calculated
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.classes()
            .unwrap_or_default()
            .iter()
            .map(|class| LegendEntry {
                label: class.label(),
                min: class.membership_min.clone(),
                max: class.membership_max.clone(),
                symbol: class.symbol,
            })
            .collect()
    }

    /// The full legend, `None` until the classification is calculated
    pub fn legend(&self) -> Option<Legend> {
        self.is_classified().then(|| Legend {
            value_field: self.value_field().to_string(),
            symbol_type: self.symbol_type(),
            entries: self.legend_entries(),
        })
    }
}
