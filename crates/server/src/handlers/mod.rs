//! # API Route Handlers
//!
//! The Axum handlers, grouped by surface: `general` for the banner and
//! health probe, `ingest` for the data source endpoints, `connections`
//! for handler listing and activation. Everything re-exports flat so
//! the router refers to `handlers::<name>`.

pub mod connections;
pub mod general;
pub mod ingest;

pub use connections::*;
pub use general::*;
pub use ingest::*;

use super::{errors::AppError, state::AppState};
