use portico::{hub, Bootstrap, Container, Error, MethodTable, Service, ServiceError, Value};
use std::sync::Arc;

// A container holding exactly one service.
struct SingleService {
  clock: Arc<MethodTable>,
}

impl Container for SingleService {
  fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
    match key {
      "clock" => Ok(self.clock.clone()),
      other => Err(format!("unknown service `{}`", other).into()),
    }
  }
}

fn main() {
  // --- An empty bootstrap is rejected ---
  println!("Booting with no container at all...");
  match Bootstrap::empty().boot() {
    Err(Error::AbsentContainer) => println!("Correctly rejected: {}", Error::AbsentContainer),
    other => panic!("expected AbsentContainer, got {:?}", other),
  }
  assert!(
    hub().container().is_none(),
    "a failed boot must not consume the slot!"
  );

  // --- The first real boot wins ---
  let clock = MethodTable::new().method("now", |_| Ok(Value::from(1_700_000_000)));
  let container = Arc::new(SingleService { clock: Arc::new(clock) });
  Bootstrap::new(container).boot().expect("first boot must succeed");
  println!("\nBooted the real container.");

  let now = hub().forward("clock", "now", vec![]).expect("clock should resolve");
  println!("clock.now() -> {}", now);

  // --- A second boot is rejected and changes nothing ---
  println!("\nBooting a replacement container...");
  let replacement = Arc::new(SingleService {
    clock: Arc::new(MethodTable::new()),
  });
  match Bootstrap::new(replacement).boot() {
    Err(Error::AlreadySet) => println!("Correctly rejected: {}", Error::AlreadySet),
    other => panic!("expected AlreadySet, got {:?}", other),
  }

  let still = hub().forward("clock", "now", vec![]).expect("clock should resolve");
  println!("clock.now() still -> {}", still);
  assert_eq!(still, Value::from(1_700_000_000));
}
