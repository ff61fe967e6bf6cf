//! The multi-axis classifier
//!
//! A [`Classifier`] holds, per feature, one attribute value for each symbol
//! type it was given, plus the symbols resolved for it so far. Every
//! registered [`ClassificationSpec`] turns the values of one symbol type into
//! classes and writes each member's class symbol back into the symbol store.
//!
//! ```text
//! add_value ──► value store ──► calculate_classes ──► symbol store ──► symbol
//!                                  │
//!                                  └─ sort, resize symbols, build classes,
//!                                     assign members
//! ```

use crate::classification::ClassificationSpec;
use geoclass_breaks::{
    Algorithm, Categorical, ClassBuilder, EqualCount, EqualInterval, Membership, NaturalBreaks, SymbolClass,
};
use geoclass_core::{
    AttributeValue, ClassifierConfig, ColorPalette, Error, FeatureId, Result, SymbolMap, SymbolType, SymbolValue,
};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Handle to a classification registered on a [`Classifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassificationId(usize);

impl ClassificationId {
    /// Position of the classification in registration order
    pub fn index(self) -> usize {
        self.0
    }
}

/// A registered spec and, once calculated, its classes
#[derive(Debug, Clone)]
pub struct Classification {
    spec: ClassificationSpec,
    classes: Option<Vec<SymbolClass>>,
}

impl Classification {
    pub fn spec(&self) -> &ClassificationSpec {
        &self.spec
    }

    pub fn symbol_type(&self) -> SymbolType {
        self.spec.symbol_type()
    }

    pub fn value_field(&self) -> &str {
        self.spec.value_field()
    }

    /// Classes from the last successful calculation
    pub fn classes(&self) -> Option<&[SymbolClass]> {
        self.classes.as_deref()
    }

    pub fn is_classified(&self) -> bool {
        self.classes.is_some()
    }
}

#[derive(Debug, Clone)]
struct FeatureEntry {
    id: FeatureId,
    values: SymbolMap<AttributeValue>,
    symbols: SymbolMap<SymbolValue>,
}

/// Classifies feature values into symbols along several symbol types at once
#[derive(Debug)]
pub struct Classifier {
    config: ClassifierConfig,
    rng: StdRng,
    features: Vec<FeatureEntry>,
    index: HashMap<FeatureId, usize>,
    classifications: Vec<Classification>,
    sorted_values: Vec<(FeatureId, AttributeValue)>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with default settings and an unseeded color source
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            features: Vec::new(),
            index: HashMap::new(),
            classifications: Vec::new(),
            sorted_values: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Register a classification; no data is touched until it is calculated
    pub fn add_classification(&mut self, spec: ClassificationSpec) -> ClassificationId {
        let id = ClassificationId(self.classifications.len());
        debug!(
            "Registered classification {} of {} by '{}' ({})",
            id.0,
            spec.symbol_type(),
            spec.value_field(),
            spec.algorithm()
        );
        self.classifications.push(Classification { spec, classes: None });
        id
    }

    /// Set a feature's value for one symbol type
    ///
    /// Any symbols already resolved for the feature are discarded.
    pub fn add_value(&mut self, id: impl Into<FeatureId>, symbol_type: SymbolType, value: impl Into<AttributeValue>) {
        let id = id.into();
        let position = match self.index.get(&id) {
            Some(&position) => position,
            None => {
                let position = self.features.len();
                self.index.insert(id.clone(), position);
                self.features.push(FeatureEntry {
                    id,
                    values: SymbolMap::new(),
                    symbols: SymbolMap::new(),
                });
                position
            }
        };
        let entry = &mut self.features[position];
        entry.values.insert(symbol_type, value.into());
        entry.symbols = SymbolMap::new();
    }

    /// Build the classes of one classification and assign every member its symbol
    ///
    /// Either all classes are built and assigned, or on error nothing changes.
    /// Recalculating replaces the previous symbols of that symbol type.
    #[instrument(skip(self))]
    pub fn calculate_classes(&mut self, id: ClassificationId) -> Result<()> {
        let spec = self
            .classifications
            .get(id.0)
            .map(|c| c.spec.clone())
            .ok_or_else(|| Error::invalid_argument(format!("unknown classification {}", id.0)))?;
        let symbol_type = spec.symbol_type();

        let mut members: Vec<(usize, AttributeValue)> = Vec::new();
        let mut excluded = 0usize;
        for (position, entry) in self.features.iter().enumerate() {
            if let Some(value) = entry.values.get(symbol_type) {
                if spec.is_excluded(value) {
                    excluded += 1;
                } else {
                    members.push((position, value.clone()));
                }
            }
        }
        // stable: ties keep insertion order
        members.sort_by(|a, b| a.1.cmp(&b.1));
        debug!(
            "Classifying {} values of {} ({} excluded) with {}",
            members.len(),
            symbol_type,
            excluded,
            spec.algorithm()
        );

        let values: Vec<AttributeValue> = members.iter().map(|(_, v)| v.clone()).collect();
        let (builder, symbols) = self.prepare(&spec)?;
        let classes = builder.build_sorted(&values, &symbols)?;
        let assigned = assign(builder.membership(), &classes, &values)?;

        for entry in &mut self.features {
            entry.symbols.remove(symbol_type);
        }
        for (&(position, _), symbol) in members.iter().zip(assigned) {
            self.features[position].symbols.insert(symbol_type, symbol);
        }
        self.sorted_values = members
            .into_iter()
            .map(|(position, value)| (self.features[position].id.clone(), value))
            .collect();
        debug!("Built {} classes for {}", classes.len(), symbol_type);
        self.classifications[id.0].classes = Some(classes);

        Ok(())
    }

    /// Calculate every classification in registration order, stopping at the first error
    pub fn calculate_all(&mut self) -> Result<()> {
        for position in 0..self.classifications.len() {
            self.calculate_classes(ClassificationId(position))?;
        }
        Ok(())
    }

    /// Resolved symbol of a feature, `None` if it was excluded or never classified
    pub fn symbol(&self, id: &FeatureId, symbol_type: SymbolType) -> Option<&SymbolValue> {
        self.symbols(id)?.get(symbol_type)
    }

    /// All resolved symbols of a feature
    pub fn symbols(&self, id: &FeatureId) -> Option<&SymbolMap<SymbolValue>> {
        self.index.get(id).map(|&position| &self.features[position].symbols)
    }

    /// The value registered for a feature and symbol type
    pub fn value(&self, id: &FeatureId, symbol_type: SymbolType) -> Option<&AttributeValue> {
        self.index
            .get(id)
            .and_then(|&position| self.features[position].values.get(symbol_type))
    }

    /// Sorted `(feature, value)` pairs of the most recent calculation
    pub fn sorted_values(&self) -> &[(FeatureId, AttributeValue)] {
        &self.sorted_values
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn classification(&self, id: ClassificationId) -> Option<&Classification> {
        self.classifications.get(id.0)
    }

    /// Number of features with at least one registered value
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Pick the class builder and the per-class symbols for a spec
    fn prepare(&mut self, spec: &ClassificationSpec) -> Result<(Box<dyn ClassBuilder>, Vec<SymbolValue>)> {
        let class_count = spec.class_count();
        let symbols = match spec.algorithm() {
            Algorithm::Categorical => Vec::new(),
            _ => resized_symbols(spec)?,
        };
        let builder: Box<dyn ClassBuilder> = match spec.algorithm() {
            Algorithm::EqualInterval => Box::new(EqualInterval::new(class_count)),
            Algorithm::EqualCount => Box::new(EqualCount::new(class_count)),
            Algorithm::NaturalBreaks => Box::new(NaturalBreaks::new(class_count).with_config(self.config.jenks)),
            Algorithm::Categorical => Box::new(Categorical::new(ColorPalette::random(
                &mut self.rng,
                self.config.categorical_style,
            ))),
        };
        Ok((builder, symbols))
    }
}

fn resized_symbols(spec: &ClassificationSpec) -> Result<Vec<SymbolValue>> {
    spec.symbol_range()
        .ok_or_else(|| Error::invalid_argument(format!("{} classification needs a symbol range", spec.algorithm())))?
        .resize(spec.class_count())
}

/// One symbol per sorted value, from the first class that admits it
fn assign(membership: Membership, classes: &[SymbolClass], sorted: &[AttributeValue]) -> Result<Vec<SymbolValue>> {
    match membership {
        Membership::Value | Membership::Rank => sorted
            .iter()
            .enumerate()
            .map(|(rank, value)| {
                classes
                    .iter()
                    .find(|c| c.contains(rank, value))
                    .map(|c| c.symbol)
                    .ok_or_else(|| Error::invalid_argument(format!("value {value} at rank {rank} fits no class")))
            })
            .collect(),
        Membership::Unique => {
            // classes follow the distinct values in sorted order
            let mut cursor = 0;
            sorted
                .iter()
                .map(|value| {
                    while cursor < classes.len() && !classes[cursor].contains(0, value) {
                        cursor += 1;
                    }
                    classes
                        .get(cursor)
                        .map(|c| c.symbol)
                        .ok_or_else(|| Error::invalid_argument(format!("value {value} has no category")))
                })
                .collect()
        }
    }
}
