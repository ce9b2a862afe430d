//! The error surface of the facade layer.

use thiserror::Error;

/// The error type host containers and forwarded methods fail with.
///
/// The facade layer never inspects or translates these; they travel to the
/// caller unchanged inside [`Error::Resolution`] or [`Error::Method`].
pub type ServiceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the `portico` library.
///
/// The first four variants are produced by this crate. `Resolution` and
/// `Method` are transparent carriers: their display and source are exactly
/// the underlying error from the host container or the forwarded method.
#[derive(Debug, Error)]
pub enum Error {
  /// A container install was attempted with no container at all.
  #[error("container cannot be absent")]
  AbsentContainer,

  /// A container reference was already installed earlier in the process.
  #[error("container is already set")]
  AlreadySet,

  /// A call was forwarded before any container was installed.
  #[error("container is not set")]
  NotSet,

  /// The resolved service exposes no method under the requested name.
  ///
  /// Raised after resolution and before any invocation.
  #[error("method `{method}` does not exist on service `{accessor}`")]
  NoSuchMethod {
    /// The accessor key the facade resolved.
    accessor: String,
    /// The method name the caller asked for.
    method: String,
  },

  /// The container failed to resolve the accessor key.
  #[error(transparent)]
  Resolution(ServiceError),

  /// The forwarded method itself failed.
  #[error(transparent)]
  Method(ServiceError),
}

/// A specialized `Result` type for facade operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
