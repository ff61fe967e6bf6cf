//! Automatic classification of a whole layer of features

use crate::classification::ClassificationSpec;
use crate::classifier::{ClassificationId, Classifier};
use crate::feature::Feature;
use crate::options::SymbolOptions;
use crate::query::Query;
use geoclass_core::{ClassifierConfig, FeatureId, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, instrument};

/// A named set of features drawn with shared defaults and classified symbols
#[derive(Debug)]
pub struct Layer {
    name: String,
    options: SymbolOptions,
    exclude: Option<Query>,
    classifier: Classifier,
}

impl Layer {
    /// Layer with default options around a random fill color
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ClassifierConfig::default())
    }

    /// Layer whose classifier, and random fill color, use `config`
    pub fn with_config(name: impl Into<String>, config: ClassifierConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let options = SymbolOptions::random(&mut StdRng::seed_from_u64(seed));
        Self {
            name: name.into(),
            options,
            exclude: None,
            classifier: Classifier::with_config(config),
        }
    }

    pub fn with_options(mut self, options: SymbolOptions) -> Self {
        self.options = options;
        self
    }

    /// Leave out every feature matching `query`
    pub fn with_exclude_query(mut self, query: Query) -> Self {
        self.exclude = Some(query);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &SymbolOptions {
        &self.options
    }

    pub fn exclude_query(&self) -> Option<&Query> {
        self.exclude.as_ref()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn add_classification(&mut self, spec: ClassificationSpec) -> ClassificationId {
        self.classifier.add_classification(spec)
    }

    /// Register every feature's classified attributes, then calculate all classes
    ///
    /// Features matching the exclude query are skipped entirely. A feature
    /// without the field of a classification is skipped for that one only.
    #[instrument(skip(self, features), fields(layer = %self.name))]
    pub fn classify<F: Feature>(&mut self, features: &[F]) -> Result<()> {
        let specs: Vec<ClassificationSpec> = self
            .classifier
            .classifications()
            .iter()
            .map(|c| c.spec().clone())
            .collect();

        let mut skipped = 0usize;
        for feature in features {
            if self.exclude.as_ref().is_some_and(|q| q.matches(feature)) {
                skipped += 1;
                continue;
            }
            let id = feature.id();
            for spec in &specs {
                if let Some(value) = feature.attribute(spec.value_field()) {
                    self.classifier.add_value(id.clone(), spec.symbol_type(), value);
                }
            }
        }
        debug!(
            "Layer '{}' registered {} features ({} excluded by query)",
            self.name,
            features.len() - skipped,
            skipped
        );

        self.classifier.calculate_all()
    }

    /// Drawing options of a feature, or `None` if nothing classified it
    pub fn symbolize(&self, id: &FeatureId) -> Option<SymbolOptions> {
        let symbols = self.classifier.symbols(id)?;
        if symbols.is_empty() {
            return None;
        }
        match self.options.overlay(symbols) {
            Ok(options) => Some(options),
            Err(err) => {
                debug!("Layer '{}' cannot draw feature {}: {}", self.name, id, err);
                None
            }
        }
    }
}
