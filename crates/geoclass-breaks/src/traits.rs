//! Core traits for class building

use crate::types::{Membership, SymbolClass};
use geoclass_core::{AttributeValue, Result, SymbolValue};

/// Trait for building symbol classes from an axis of attribute values
pub trait ClassBuilder {
    /// Build classes from values sorted ascending
    ///
    /// `symbols` holds one symbol per class, already resized to the class
    /// count. Builders that generate their own symbols ignore it.
    fn build_sorted(&self, sorted: &[AttributeValue], symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>>;

    /// Build classes from values in any order
    fn build(&self, values: &[AttributeValue], symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>> {
        let mut sorted = values.to_vec();
        sorted.sort();
        self.build_sorted(&sorted, symbols)
    }

    /// Rule used to match features against the built classes
    fn membership(&self) -> Membership;

    /// Get the target number of classes (if known before building)
    fn target_classes(&self) -> Option<usize> {
        None
    }
}
