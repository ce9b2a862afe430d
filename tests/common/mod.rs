#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use portico::{Container, MethodTable, Service, ServiceError, Value};

/// Resolution failure returned by [`MapContainer`] for keys it does not hold.
///
/// A concrete type (rather than a boxed string) so tests can downcast the
/// pass-through error and prove it crossed the facade layer untouched.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownService(pub String);

impl fmt::Display for UnknownService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown service `{}`", self.0)
  }
}

impl std::error::Error for UnknownService {}

/// Minimal host-side container: a key -> service map.
#[derive(Default)]
pub struct MapContainer {
  services: HashMap<String, Arc<dyn Service>>,
}

impl MapContainer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, key: &str, table: MethodTable) -> Self {
    self.services.insert(key.to_string(), Arc::new(table));
    self
  }
}

impl Container for MapContainer {
  fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
    self
      .services
      .get(key)
      .cloned()
      .ok_or_else(|| Box::new(UnknownService(key.to_string())) as ServiceError)
  }
}

/// A service with a single `greet` method: `greet("World")` -> `"Hello, World"`.
pub fn greeter() -> MethodTable {
  MethodTable::new().method("greet", |args| {
    let name = args.first().and_then(Value::as_str).unwrap_or("stranger");
    Ok(Value::from(format!("Hello, {}", name)))
  })
}

/// A service whose `all` method hands every argument back as an array, in
/// the order received.
pub fn echo() -> MethodTable {
  MethodTable::new().method("all", |args| Ok(Value::Array(args)))
}

/// A service whose only method always fails, for pass-through assertions.
pub fn flaky() -> MethodTable {
  MethodTable::new().method("explode", |_| Err("service exploded".into()))
}
