//! Classification requests

use geoclass_breaks::{Algorithm, SymbolRange};
use geoclass_core::{AttributeValue, Error, Result, SymbolType};
use serde::Serialize;
use std::collections::BTreeSet;

/// Class count used when none is given
pub const DEFAULT_CLASS_COUNT: usize = 5;

/// What to classify and how: one symbol axis driven by one attribute field
///
/// Built through [`ClassificationSpec::builder`], which rejects requests
/// that can never be classified. A spec is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationSpec {
    symbol_type: SymbolType,
    value_field: String,
    symbol_range: Option<SymbolRange>,
    algorithm: Algorithm,
    class_count: usize,
    exclude_values: BTreeSet<AttributeValue>,
}

impl ClassificationSpec {
    /// Start a spec for `symbol_type` driven by the attribute `value_field`
    pub fn builder(symbol_type: SymbolType, value_field: impl Into<String>) -> ClassificationSpecBuilder {
        ClassificationSpecBuilder {
            symbol_type,
            value_field: value_field.into(),
            symbol_range: None,
            algorithm: Algorithm::EqualInterval,
            class_count: DEFAULT_CLASS_COUNT,
            exclude_values: BTreeSet::new(),
        }
    }

    /// A graduated classification over `symbol_range`
    pub fn graduated(
        symbol_type: SymbolType,
        value_field: impl Into<String>,
        symbol_range: impl Into<SymbolRange>,
        algorithm: Algorithm,
        class_count: usize,
    ) -> Result<Self> {
        Self::builder(symbol_type, value_field)
            .symbol_range(symbol_range)
            .algorithm(algorithm)
            .class_count(class_count)
            .build()
    }

    /// A categorical classification, one random color per distinct value
    pub fn categorical(symbol_type: SymbolType, value_field: impl Into<String>) -> Result<Self> {
        Self::builder(symbol_type, value_field)
            .algorithm(Algorithm::Categorical)
            .build()
    }

    pub fn symbol_type(&self) -> SymbolType {
        self.symbol_type
    }

    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    /// Anchor symbols; `None` for categorical classifications
    pub fn symbol_range(&self) -> Option<&SymbolRange> {
        self.symbol_range.as_ref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Requested class count, ignored by categorical classifications
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn exclude_values(&self) -> &BTreeSet<AttributeValue> {
        &self.exclude_values
    }

    pub fn is_excluded(&self, value: &AttributeValue) -> bool {
        self.exclude_values.contains(value)
    }
}

/// Builder for [`ClassificationSpec`]
#[derive(Debug, Clone)]
pub struct ClassificationSpecBuilder {
    symbol_type: SymbolType,
    value_field: String,
    symbol_range: Option<SymbolRange>,
    algorithm: Algorithm,
    class_count: usize,
    exclude_values: BTreeSet<AttributeValue>,
}

impl ClassificationSpecBuilder {
    pub fn symbol_range(mut self, range: impl Into<SymbolRange>) -> Self {
        self.symbol_range = Some(range.into());
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn class_count(mut self, class_count: usize) -> Self {
        self.class_count = class_count;
        self
    }

    /// Drop features with this value before classifying
    pub fn exclude(mut self, value: impl Into<AttributeValue>) -> Self {
        self.exclude_values.insert(value.into());
        self
    }

    pub fn exclude_all<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.exclude_values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<ClassificationSpec> {
        if self.value_field.trim().is_empty() {
            return Err(Error::invalid_argument("value field must not be empty"));
        }

        if self.algorithm == Algorithm::Categorical {
            if !self.symbol_type.is_color() {
                return Err(Error::invalid_argument(format!(
                    "categorical classification needs a color symbol type, got {}",
                    self.symbol_type
                )));
            }
        } else {
            if self.class_count == 0 {
                return Err(Error::invalid_class_count(self.class_count));
            }
            let range = self.symbol_range.as_ref().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{} classification of {} needs a symbol range",
                    self.algorithm, self.symbol_type
                ))
            })?;
            if range.len() < 2 {
                return Err(Error::invalid_argument(format!(
                    "symbol range needs at least 2 values, got {}",
                    range.len()
                )));
            }
            if range.is_color() != self.symbol_type.is_color() {
                return Err(Error::invalid_argument(format!(
                    "symbol range of {} does not fit symbol type {}",
                    if range.is_color() { "colors" } else { "sizes" },
                    self.symbol_type
                )));
            }
        }

        Ok(ClassificationSpec {
            symbol_type: self.symbol_type,
            value_field: self.value_field,
            symbol_range: self.symbol_range,
            algorithm: self.algorithm,
            class_count: self.class_count,
            exclude_values: self.exclude_values,
        })
    }
}
