//! # Data Source Registry
//!
//! A slug-keyed map of registered data source plugins. The registry is
//! built once at startup and only read afterwards, so lookups hand out
//! cheap `Arc` clones without any locking.

use crate::datasource::traits::DataSource;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Static metadata describing a registered data source, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct DataSourceDescriptor {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub content_key: String,
}

/// Registry of data source plugins, keyed by slug.
#[derive(Default)]
pub struct DataSourceRegistry {
    sources: HashMap<String, Arc<dyn DataSource>>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Registers a data source under its own slug. A later registration
    /// with the same slug replaces the earlier one.
    pub fn register(&mut self, source: Arc<dyn DataSource>) {
        self.sources.insert(source.slug().to_string(), source);
    }

    /// Looks up a data source by slug.
    pub fn get(&self, slug: &str) -> Option<Arc<dyn DataSource>> {
        self.sources.get(slug).cloned()
    }

    /// Descriptors for every registered source, sorted by slug for
    /// stable listings.
    pub fn descriptors(&self) -> Vec<DataSourceDescriptor> {
        let mut descriptors: Vec<DataSourceDescriptor> = self
            .sources
            .values()
            .map(|s| DataSourceDescriptor {
                name: s.name().to_string(),
                slug: s.slug().to_string(),
                description: s.description().to_string(),
                content_key: s.content_key().to_string(),
            })
            .collect();
        descriptors.sort_by(|a, b| a.slug.cmp(&b.slug));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
