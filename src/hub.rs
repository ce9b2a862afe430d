//! The shared container slot and the call-forwarding core.

use crate::container::Container;
use crate::error::{Error, Result};
use crate::service::Args;

use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Holds the process-wide container reference and forwards facade calls.
///
/// The slot is write-once: the first successful [`set_container`] wins and
/// the reference stays in place for the life of the hub. Production code
/// reaches the hub through [`hub()`](crate::hub); tests build their own hubs
/// so no state leaks between cases and nothing ever needs resetting.
///
/// [`set_container`]: FacadeHub::set_container
///
/// # Examples
///
/// ```
/// use portico::FacadeHub;
///
/// let hub = FacadeHub::new();
/// assert!(hub.container().is_none());
/// ```
#[derive(Default)]
pub struct FacadeHub {
  slot: OnceCell<Arc<dyn Container>>,
}

impl FacadeHub {
  /// Creates a hub with no container installed.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the installed container, or `None` if none was installed yet.
  ///
  /// The returned `Arc` is the exact reference that was installed. Never
  /// fails and has no side effects.
  pub fn container(&self) -> Option<Arc<dyn Container>> {
    self.slot.get().cloned()
  }

  /// Installs `container` as the hub's one and only container reference.
  ///
  /// Passing `None` fails with [`Error::AbsentContainer`]; a second install
  /// fails with [`Error::AlreadySet`]. Neither failure changes the slot.
  /// The existence check and the write are a single atomic step, so
  /// concurrent first-time installs cannot both succeed.
  pub fn set_container(&self, container: Option<Arc<dyn Container>>) -> Result<()> {
    let container = container.ok_or(Error::AbsentContainer)?;
    self.slot.set(container).map_err(|_| Error::AlreadySet)?;
    debug!("facade container installed");
    Ok(())
  }

  /// Resolves `accessor` from the installed container and replays `method`
  /// with `args` onto the resolved service.
  ///
  /// The checks run in a fixed order:
  ///
  /// 1. no container installed yet fails with [`Error::NotSet`] and nothing
  ///    is forwarded;
  /// 2. the container resolves `accessor`; its own failure passes through
  ///    unchanged as [`Error::Resolution`];
  /// 3. a service without the requested method fails with
  ///    [`Error::NoSuchMethod`], before any invocation;
  /// 4. the method runs with `args`, positionally, and its value or failure
  ///    is returned unmodified (failures as [`Error::Method`]).
  pub fn forward(&self, accessor: &str, method: &str, args: Args) -> Result<Value> {
    let container = self.slot.get().ok_or(Error::NotSet)?;
    let service = container.resolve(accessor).map_err(Error::Resolution)?;
    let callable = service.lookup(method).ok_or_else(|| Error::NoSuchMethod {
      accessor: accessor.to_owned(),
      method: method.to_owned(),
    })?;
    trace!(accessor, method, "forwarding facade call");
    (*callable)(args).map_err(Error::Method)
  }
}
