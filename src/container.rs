//! The seam between the facade layer and the host's DI container.

use crate::error::ServiceError;
use crate::service::Service;

use std::sync::Arc;

/// A host-supplied registry that maps string keys to live services.
///
/// The facade layer never registers, wires, or tears down services; it only
/// asks the host's container to resolve a key when a call is forwarded.
/// Resolution failures (typically "unknown service") carry the host's own
/// error type and reach the caller unchanged.
pub trait Container: Send + Sync {
  /// Resolves the service registered under `key`.
  fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError>;
}
