use portico::{hub, Container, FacadeHub, MethodTable, Service, ServiceError, Value};
use std::collections::HashMap;
use std::sync::Arc;

struct Registry {
  services: HashMap<String, Arc<dyn Service>>,
}

impl Registry {
  fn with(key: &str, table: MethodTable) -> Self {
    let mut services: HashMap<String, Arc<dyn Service>> = HashMap::new();
    services.insert(key.to_string(), Arc::new(table));
    Self { services }
  }
}

impl Container for Registry {
  fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
    self
      .services
      .get(key)
      .cloned()
      .ok_or_else(|| format!("unknown service `{}`", key).into())
  }
}

// A function that forwards through whichever hub it is handed. By accepting
// a `&FacadeHub`, it can be exercised against a controlled environment.
fn shout_greeting(hub: &FacadeHub, name: &str) -> String {
  let reply = hub
    .forward("greeter", "greet", vec![Value::from(name)])
    .expect("greeter not reachable through this hub");
  reply.as_str().map(str::to_uppercase).unwrap_or_default()
}

fn main() {
  // --- Scenario with a Local Hub ---
  println!("--- Running against a local hub ---");
  let local = FacadeHub::new();
  let greeter = MethodTable::new().method("greet", |args| {
    let name = args.first().and_then(Value::as_str).unwrap_or("stranger");
    Ok(Value::from(format!("Hello, {}", name)))
  });
  local
    .set_container(Some(Arc::new(Registry::with("greeter", greeter))))
    .expect("install into the local hub");

  let result = shout_greeting(&local, "portico");
  println!("Result: {}", result);
  assert_eq!(result, "HELLO, PORTICO");

  // --- Verify Isolation ---
  // The container installed into `local` should NOT exist in the
  // process-wide hub.
  assert!(
    hub().container().is_none(),
    "the local container should not have leaked into the global hub!"
  );

  println!("\nVerified that the local hub is isolated from the global one.");
}
