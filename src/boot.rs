//! The boot-time bridge between a host framework and the facade hub.

use crate::container::Container;
use crate::error::Result;
use crate::global;
use crate::hub::FacadeHub;

use std::sync::Arc;

/// A one-shot startup hook that installs the host's container.
///
/// The host framework builds its container, wraps it in a `Bootstrap`, and
/// calls [`boot`](Bootstrap::boot) on its startup signal, once per process.
/// Errors are deliberately not caught here: a double boot or an absent
/// container is a lifecycle bug in the host, and startup should abort on it.
///
/// # Examples
///
/// ```
/// use portico::{Bootstrap, Container, FacadeHub, MethodTable, Service, ServiceError, Value};
/// use std::sync::Arc;
///
/// struct Registry {
///   clock: Arc<MethodTable>,
/// }
///
/// impl Container for Registry {
///   fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
///     match key {
///       "clock" => Ok(self.clock.clone()),
///       other => Err(format!("unknown service `{}`", other).into()),
///     }
///   }
/// }
///
/// let clock = MethodTable::new().method("now", |_| Ok(Value::from(1_700_000_000)));
/// let registry = Registry { clock: Arc::new(clock) };
///
/// let hub = FacadeHub::new();
/// Bootstrap::new(Arc::new(registry)).boot_into(&hub)?;
///
/// assert!(hub.container().is_some());
/// assert_eq!(hub.forward("clock", "now", vec![])?, Value::from(1_700_000_000));
/// # Ok::<(), portico::Error>(())
/// ```
pub struct Bootstrap {
  container: Option<Arc<dyn Container>>,
}

impl Bootstrap {
  /// Wraps an already-built container, ready to install.
  pub fn new(container: Arc<dyn Container>) -> Self {
    Self {
      container: Some(container),
    }
  }

  /// A bootstrap carrying no container.
  ///
  /// Booting it fails with [`AbsentContainer`]. Hosts whose container
  /// handle is still optional at boot time hit this path instead of
  /// silently installing nothing.
  ///
  /// [`AbsentContainer`]: crate::Error::AbsentContainer
  pub fn empty() -> Self {
    Self { container: None }
  }

  /// Installs the wrapped container into the process-wide hub.
  pub fn boot(&self) -> Result<()> {
    self.boot_into(global::hub())
  }

  /// Installs the wrapped container into `hub`.
  pub fn boot_into(&self, hub: &FacadeHub) -> Result<()> {
    hub.set_container(self.container.clone())
  }
}
