//! # Portico
//!
//! Static-style facades over a shared dependency-injection container.
//!
//! A facade is a zero-state proxy type that forwards method calls, by name,
//! to a service resolved out of a container at call time. The container is
//! built and owned by the host framework; this crate holds exactly one
//! shared, write-once reference to it and replays calls onto whatever the
//! container resolves.
//!
//! ## Core Concepts
//!
//! - **Hub**: [`FacadeHub`] holds the process-wide container reference. The
//!   slot is write-once: the first installed container wins for the life
//!   of the process. A static hub is available via [`hub()`](crate::hub()).
//! - **Container**: the host's DI container, behind the [`Container`]
//!   trait. This crate never registers or wires services itself.
//! - **Service**: a resolved instance's dynamic call surface, usually a
//!   [`MethodTable`] of named callables built when the service is
//!   constructed.
//! - **Facade**: a unit struct implementing [`Facade`], declared with
//!   [`facade!`](crate::facade!); calls go through [`Facade::call`] or
//!   [`invoke!`](crate::invoke!).
//! - **Boot**: [`Bootstrap`] installs the host's container exactly once on
//!   the host's startup signal; a second boot fails and should abort
//!   startup.
//!
//! ## Quick Start
//!
//! ```
//! use portico::{facade, Bootstrap, Container, Facade, MethodTable, Service, ServiceError, Value};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! // The host's container. Portico only ever asks it to resolve a key.
//! struct Registry {
//!   services: HashMap<String, Arc<dyn Service>>,
//! }
//!
//! impl Container for Registry {
//!   fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
//!     self
//!       .services
//!       .get(key)
//!       .cloned()
//!       .ok_or_else(|| format!("unknown service `{}`", key).into())
//!   }
//! }
//!
//! // A service exposes named methods through a `MethodTable`.
//! fn greeter() -> MethodTable {
//!   MethodTable::new().method("greet", |args| {
//!     let name = args.first().and_then(Value::as_str).unwrap_or("stranger");
//!     Ok(Value::from(format!("Hello, {}", name)))
//!   })
//! }
//!
//! // A facade variant: one unit struct, one accessor key.
//! facade! {
//!   /// Static-style proxy for the greeter service.
//!   pub struct Greeter => "greeter";
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // The host builds its container and boots the facade layer once.
//!   let mut services: HashMap<String, Arc<dyn Service>> = HashMap::new();
//!   services.insert("greeter".to_string(), Arc::new(greeter()));
//!   Bootstrap::new(Arc::new(Registry { services })).boot()?;
//!
//!   // Any call site in the process can now go through the facade.
//!   let reply = Greeter::call("greet", vec![Value::from("World")])?;
//!   assert_eq!(reply, Value::from("Hello, World"));
//!   Ok(())
//! }
//! ```
//!
//! Method names are looked up at call time; there is no compile-time check
//! that a facade's backing service exposes a given method. That is the
//! trade that lets call sites stay decoupled from concrete service types.

mod boot;
mod container;
mod error;
mod facade;
mod global;
mod hub;
mod macros;
mod service;

pub use boot::Bootstrap;
pub use container::Container;
pub use error::{Error, Result, ServiceError};
pub use facade::Facade;
pub use global::hub;
pub use hub::FacadeHub;
pub use service::{Args, Method, MethodTable, Service};

/// The dynamic value type forwarded calls traffic in.
///
/// Re-exported from `serde_json` so hosts and call sites share one value
/// model for arguments and returns.
pub use serde_json::Value;
