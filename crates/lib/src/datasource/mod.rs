//! # Data Source Plugins
//!
//! The plugin contract, registry, shared types, and document persistence
//! for data sources. Concrete sources live in their own crates and
//! implement [`DataSource`].

pub mod registry;
pub mod storage;
pub mod traits;
pub mod types;

pub use registry::{DataSourceDescriptor, DataSourceRegistry};
pub use traits::{DataSource, DataSourceError};
pub use types::{DataSourceEntryItem, IngestionSummary};
