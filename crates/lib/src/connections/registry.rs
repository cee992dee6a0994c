//! # Connection Handler Registry
//!
//! Connection handlers are keyed by `provider_slug/slug`, since slugs are
//! only unique within a provider. Like the data source registry, this is
//! built at startup and read-only afterwards.

use crate::connections::models::ConnectionKind;
use crate::connections::traits::ConnectionHandler;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Static metadata describing a registered connection handler.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionHandlerDescriptor {
    pub name: String,
    pub slug: String,
    pub provider_slug: String,
    pub description: String,
    pub kind: ConnectionKind,
}

/// Registry of connection handlers, keyed by `provider_slug/slug`.
#[derive(Default)]
pub struct ConnectionRegistry {
    handlers: HashMap<String, Arc<dyn ConnectionHandler>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    fn key(provider_slug: &str, slug: &str) -> String {
        format!("{provider_slug}/{slug}")
    }

    pub fn register(&mut self, handler: Arc<dyn ConnectionHandler>) {
        let key = Self::key(handler.provider_slug(), handler.slug());
        self.handlers.insert(key, handler);
    }

    pub fn get(&self, provider_slug: &str, slug: &str) -> Option<Arc<dyn ConnectionHandler>> {
        self.handlers.get(&Self::key(provider_slug, slug)).cloned()
    }

    /// Descriptors for every registered handler, sorted by registry key.
    pub fn descriptors(&self) -> Vec<ConnectionHandlerDescriptor> {
        let mut descriptors: Vec<ConnectionHandlerDescriptor> = self
            .handlers
            .values()
            .map(|h| ConnectionHandlerDescriptor {
                name: h.name().to_string(),
                slug: h.slug().to_string(),
                provider_slug: h.provider_slug().to_string(),
                description: h.description().to_string(),
                kind: h.kind(),
            })
            .collect();
        descriptors.sort_by(|a, b| {
            (a.provider_slug.as_str(), a.slug.as_str())
                .cmp(&(b.provider_slug.as_str(), b.slug.as_str()))
        });
        descriptors
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
