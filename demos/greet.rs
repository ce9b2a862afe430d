use portico::{facade, invoke, Bootstrap, Container, Facade, MethodTable, Service, ServiceError, Value};
use std::collections::HashMap;
use std::sync::Arc;

// The host-side container: key -> service, built once at startup.
struct Registry {
  services: HashMap<String, Arc<dyn Service>>,
}

impl Registry {
  fn new() -> Self {
    Self {
      services: HashMap::new(),
    }
  }

  fn register(mut self, key: &str, table: MethodTable) -> Self {
    self.services.insert(key.to_string(), Arc::new(table));
    self
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

facade! {
  /// Static-style proxy for the greeter service.
  pub struct Greeter => "greeter";
}

fn main() {
  // --- Host Startup ---
  // The host builds its container and boots the facade layer once.
  let greeter = MethodTable::new().method("greet", |args| {
    let name = args.first().and_then(Value::as_str).unwrap_or("stranger");
    Ok(Value::from(format!("Hello, {}", name)))
  });
  let registry = Registry::new().register("greeter", greeter);
  Bootstrap::new(Arc::new(registry)).boot().expect("first boot must succeed");
  println!("Container booted; facades are live.");

  // --- Call Sites ---
  // Any code in the process can now go through the facade without holding
  // a container or service handle.
  let reply = Greeter::call("greet", vec![Value::from("World")]).expect("greet should forward");
  println!("Greeter::call(\"greet\", [\"World\"]) -> {}", reply);
  assert_eq!(reply, Value::from("Hello, World"));

  // The same call, through the forwarding macro.
  let via_macro = invoke!(Greeter, greet("Rustacean")).expect("macro forwards the same way");
  println!("invoke!(Greeter, greet(\"Rustacean\")) -> {}", via_macro);
  assert_eq!(via_macro, Value::from("Hello, Rustacean"));

  // Missing arguments are the service's business; this one falls back.
  let fallback = Greeter::call("greet", vec![]).expect("greet should forward");
  println!("Greeter::call(\"greet\", []) -> {}", fallback);
  assert_eq!(fallback, Value::from("Hello, stranger"));
}
