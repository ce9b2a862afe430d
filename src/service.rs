//! Dynamic call surfaces: what a resolved service exposes to facades.

use crate::error::ServiceError;

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Positional arguments delivered to a forwarded method.
pub type Args = Vec<Value>;

/// A callable exported by a service under a method name.
pub type Method = Arc<dyn Fn(Args) -> Result<Value, ServiceError> + Send + Sync>;

/// The call surface a resolved service exposes to the facade layer.
///
/// Methods are looked up by name, per call. Nothing checks at compile time
/// that a method exists; that flexibility is the point of a facade, and the
/// cost is that a bad name only surfaces when the call is forwarded.
pub trait Service: Send + Sync {
  /// Returns the callable registered under `method`, or `None` if the
  /// service does not expose it.
  fn lookup(&self, method: &str) -> Option<Method>;
}

/// A method registry built when a service is constructed.
///
/// This is the standard way to give a service a dynamic call surface:
/// register closures under method names (capturing whatever state they
/// need) and hand the finished table to the host container. The table is
/// not meant to change after it is shared.
///
/// # Examples
///
/// ```
/// use portico::{MethodTable, Value};
///
/// let greeter = MethodTable::new().method("greet", |args| {
///   let name = args.first().and_then(Value::as_str).unwrap_or("stranger");
///   Ok(Value::from(format!("Hello, {}", name)))
/// });
///
/// assert!(greeter.contains("greet"));
/// assert!(!greeter.contains("missing"));
/// ```
#[derive(Default)]
pub struct MethodTable {
  methods: HashMap<String, Method>,
}

impl MethodTable {
  /// Creates a new, empty `MethodTable`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `method` under `name`.
  ///
  /// The last registration for a given name wins.
  pub fn insert(
    &mut self,
    name: impl Into<String>,
    method: impl Fn(Args) -> Result<Value, ServiceError> + Send + Sync + 'static,
  ) {
    self.methods.insert(name.into(), Arc::new(method));
  }

  /// Builder-style [`insert`](MethodTable::insert).
  pub fn method(
    mut self,
    name: impl Into<String>,
    method: impl Fn(Args) -> Result<Value, ServiceError> + Send + Sync + 'static,
  ) -> Self {
    self.insert(name, method);
    self
  }

  /// Returns `true` if a callable is registered under `name`.
  pub fn contains(&self, name: &str) -> bool {
    self.methods.contains_key(name)
  }

  /// Iterates over the registered method names, in no particular order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.methods.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.methods.len()
  }

  pub fn is_empty(&self) -> bool {
    self.methods.is_empty()
  }
}

impl Service for MethodTable {
  fn lookup(&self, method: &str) -> Option<Method> {
    self.methods.get(method).cloned()
  }
}
