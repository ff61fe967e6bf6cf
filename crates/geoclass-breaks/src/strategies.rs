//! Class building strategies

use crate::jenks::natural_breaks;
use crate::traits::ClassBuilder;
use crate::types::{ClassRange, Membership, SymbolClass};
use geoclass_core::{AttributeValue, ColorPalette, Error, JenksConfig, Result, SymbolValue};
use tracing::debug;

/// Equal-width value ranges
///
/// Splits `[min, max]` into `class_count` ranges of equal width. The last
/// range ends exactly at `max`.
#[derive(Debug, Clone)]
pub struct EqualInterval {
    class_count: usize,
}

impl EqualInterval {
    pub fn new(class_count: usize) -> Self {
        Self { class_count }
    }
}

impl ClassBuilder for EqualInterval {
    fn build_sorted(&self, sorted: &[AttributeValue], symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>> {
        check_symbols(self.class_count, symbols)?;
        let values = numeric_values(sorted, "equal interval")?;

        let min = values[0];
        let max = values[values.len() - 1];
        let width = (max - min) / self.class_count as f64;
        debug!(
            "Equal interval over [{}, {}] with {} classes of width {}",
            min, max, self.class_count, width
        );

        let last = self.class_count - 1;
        let classes = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                let lower = min + i as f64 * width;
                let upper = if i == last { max } else { min + (i + 1) as f64 * width };
                value_class(i, lower, upper, symbol.clone())
            })
            .collect();
        Ok(classes)
    }

    fn membership(&self) -> Membership {
        Membership::Value
    }

    fn target_classes(&self) -> Option<usize> {
        Some(self.class_count)
    }
}

/// Equally many features per class, by sorted position
///
/// Each class holds `n / class_count` ranks and the last class absorbs the
/// remainder. Equal values on a boundary can end up in different classes.
#[derive(Debug, Clone)]
pub struct EqualCount {
    class_count: usize,
}

impl EqualCount {
    pub fn new(class_count: usize) -> Self {
        Self { class_count }
    }
}

impl ClassBuilder for EqualCount {
    fn build_sorted(&self, sorted: &[AttributeValue], symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>> {
        check_symbols(self.class_count, symbols)?;
        let values = numeric_values(sorted, "equal count")?;
        Error::check_sufficient(self.class_count, values.len())?;

        let size = values.len() / self.class_count;
        let last = self.class_count - 1;
        debug!(
            "Equal count over {} values with {} classes of {} ranks",
            values.len(),
            self.class_count,
            size
        );

        let classes = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                let first = i * size;
                let end = if i == last { values.len() - 1 } else { (i + 1) * size - 1 };
                SymbolClass {
                    range: ClassRange::Rank { first, last: end },
                    membership_min: AttributeValue::number(values[first]),
                    membership_max: AttributeValue::number(values[end]),
                    ordinal: i,
                    symbol: symbol.clone(),
                }
            })
            .collect();
        Ok(classes)
    }

    fn membership(&self) -> Membership {
        Membership::Rank
    }

    fn target_classes(&self) -> Option<usize> {
        Some(self.class_count)
    }
}

/// One class per distinct value, each with its own generated color
///
/// The palette is cloned for every build, so building twice from the same
/// palette gives the same colors.
#[derive(Debug, Clone)]
pub struct Categorical {
    palette: ColorPalette,
}

impl Categorical {
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }
}

impl ClassBuilder for Categorical {
    fn build_sorted(&self, sorted: &[AttributeValue], _symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>> {
        if sorted.is_empty() {
            return Err(Error::empty_dataset("categorical"));
        }
        check_single_kind(sorted)?;

        let mut palette = self.palette.clone();
        let mut classes: Vec<SymbolClass> = Vec::new();
        for value in sorted {
            if classes.last().is_some_and(|c| &c.membership_min == value) {
                continue;
            }
            classes.push(SymbolClass {
                range: ClassRange::Exact { value: value.clone() },
                membership_min: value.clone(),
                membership_max: value.clone(),
                ordinal: classes.len(),
                symbol: SymbolValue::Color(palette.next_color()),
            });
        }

        debug!("Categorical found {} distinct values in {}", classes.len(), sorted.len());
        Ok(classes)
    }

    fn membership(&self) -> Membership {
        Membership::Unique
    }
}

/// Fisher-Jenks natural breaks
#[derive(Debug, Clone)]
pub struct NaturalBreaks {
    class_count: usize,
    config: JenksConfig,
}

impl NaturalBreaks {
    pub fn new(class_count: usize) -> Self {
        Self {
            class_count,
            config: JenksConfig::default(),
        }
    }

    /// Use the given sampling settings for large inputs
    pub fn with_config(mut self, config: JenksConfig) -> Self {
        self.config = config;
        self
    }
}

impl ClassBuilder for NaturalBreaks {
    fn build_sorted(&self, sorted: &[AttributeValue], symbols: &[SymbolValue]) -> Result<Vec<SymbolClass>> {
        check_symbols(self.class_count, symbols)?;
        let values = numeric_values(sorted, "natural breaks")?;

        let breaks = natural_breaks(&values, self.class_count, &self.config)?;
        debug!("Natural breaks for {} values: {:?}", values.len(), breaks);

        let classes = symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| value_class(i, breaks[i], breaks[i + 1], symbol.clone()))
            .collect();
        Ok(classes)
    }

    fn membership(&self) -> Membership {
        Membership::Value
    }

    fn target_classes(&self) -> Option<usize> {
        Some(self.class_count)
    }
}

fn value_class(ordinal: usize, min: f64, max: f64, symbol: SymbolValue) -> SymbolClass {
    SymbolClass {
        range: ClassRange::Value { min, max },
        membership_min: AttributeValue::number(min),
        membership_max: AttributeValue::number(max),
        ordinal,
        symbol,
    }
}

fn check_symbols(class_count: usize, symbols: &[SymbolValue]) -> Result<()> {
    if class_count == 0 {
        return Err(Error::invalid_class_count(class_count));
    }
    if symbols.len() != class_count {
        return Err(Error::invalid_argument(format!(
            "expected {class_count} symbols, one per class, got {}",
            symbols.len()
        )));
    }
    Ok(())
}

/// Finite numbers of a non-empty, all-numeric axis
fn numeric_values(sorted: &[AttributeValue], context: &str) -> Result<Vec<f64>> {
    if sorted.is_empty() {
        return Err(Error::empty_dataset(context));
    }
    let values = sorted
        .iter()
        .map(|v| {
            v.as_number().ok_or_else(|| {
                Error::invalid_argument(format!("{context} classification needs numeric values, found '{v}'"))
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    if values.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(values)
}

fn check_single_kind(values: &[AttributeValue]) -> Result<()> {
    let kind = values[0].kind();
    match values.iter().find(|v| v.kind() != kind) {
        Some(other) => Err(Error::invalid_argument(format!(
            "cannot classify a mix of {kind} and {} values",
            other.kind()
        ))),
        None => Ok(()),
    }
}
