//! The process-wide facade hub and its access function.

use crate::hub::FacadeHub;

use once_cell::sync::Lazy;

// The one and only process-wide hub. Created on its first access in a
// thread-safe manner; its container slot starts empty.
static GLOBAL_HUB: Lazy<FacadeHub> = Lazy::new(FacadeHub::default);

/// Provides a reference to the process-wide facade hub.
///
/// Concrete facades read their container from this hub unless they point
/// somewhere else, and the boot shim installs into it.
///
/// # Examples
///
/// ```
/// use portico::hub;
///
/// // Nothing has booted in this process, so the slot is still empty.
/// assert!(hub().container().is_none());
/// ```
pub fn hub() -> &'static FacadeHub {
  &GLOBAL_HUB
}
