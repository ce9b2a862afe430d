//! The facade contract: a static-style proxy over one container service.

use crate::container::Container;
use crate::error::Result;
use crate::global;
use crate::hub::FacadeHub;
use crate::service::Args;

use serde_json::Value;
use std::sync::Arc;

/// A static-style proxy for a single service resolved out of a shared
/// container.
///
/// Implementors supply exactly one thing: the [`accessor`] key naming the
/// backing service. Everything else is provided: [`call`] resolves the
/// service through the facade's hub at call time and replays the method
/// name and arguments onto it, so the call site never learns which concrete
/// instance handled the call.
///
/// Facade variants are zero-state unit structs; declare them with
/// [`crate::facade!`].
///
/// [`accessor`]: Facade::accessor
/// [`call`]: Facade::call
pub trait Facade {
  /// The key the backing service is registered under in the container.
  ///
  /// Must be pure and deterministic. Nothing validates the key up front;
  /// an unknown key surfaces as a resolution failure at call time.
  fn accessor() -> &'static str;

  /// The hub this facade reads its container from.
  ///
  /// Defaults to the process-wide hub. Test facades can point at a
  /// `'static` hub of their own instead.
  fn hub() -> &'static FacadeHub {
    global::hub()
  }

  /// Forwards `method` with positional `args` to the backing service.
  ///
  /// See [`FacadeHub::forward`] for the failure modes and their order.
  fn call(method: &str, args: Args) -> Result<Value> {
    Self::hub().forward(Self::accessor(), method, args)
  }

  /// Returns the container behind this facade, or `None` before boot.
  fn container() -> Option<Arc<dyn Container>> {
    Self::hub().container()
  }

  /// Installs `container` behind this facade.
  ///
  /// Subject to the same guards as [`FacadeHub::set_container`]: an absent
  /// container is rejected and the first successful install is final.
  fn set_container(container: Option<Arc<dyn Container>>) -> Result<()> {
    Self::hub().set_container(container)
  }
}
