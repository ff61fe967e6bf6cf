//! Feature source seam
//!
//! Readers of vector data (shapefiles and the like) live outside this crate.
//! They hand features in through the [`Feature`] trait; [`Record`] is a
//! plain in-memory implementation.

use geoclass_core::{AttributeValue, FeatureId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A feature with a stable id and named attributes
pub trait Feature {
    fn id(&self) -> FeatureId;

    /// Value of the named attribute, `None` if the feature has no such field
    fn attribute(&self, field: &str) -> Option<AttributeValue>;
}

impl<F: Feature + ?Sized> Feature for &F {
    fn id(&self) -> FeatureId {
        (**self).id()
    }

    fn attribute(&self, field: &str) -> Option<AttributeValue> {
        (**self).attribute(field)
    }
}

/// An attribute row held in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: FeatureId,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Record {
    pub fn new(id: impl Into<FeatureId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, field: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(field, value);
        self
    }

    pub fn set_attribute(&mut self, field: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(field.into(), value.into());
    }
}

impl Feature for Record {
    fn id(&self) -> FeatureId {
        self.id.clone()
    }

    fn attribute(&self, field: &str) -> Option<AttributeValue> {
        self.attributes.get(field).cloned()
    }
}
