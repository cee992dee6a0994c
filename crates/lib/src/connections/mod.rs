//! # Connection Plugins
//!
//! Named credential records and the handlers that activate them by
//! probing their target systems. Concrete handlers live in their own
//! crates and implement [`ConnectionHandler`].

pub mod models;
pub mod registry;
pub mod storage;
pub mod traits;

pub use models::{Connection, ConnectionKind, ConnectionStatus};
pub use registry::{ConnectionHandlerDescriptor, ConnectionRegistry};
pub use storage::ConnectionError;
pub use traits::{ActivationOutcome, ConnectionHandler};
