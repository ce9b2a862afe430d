mod common;

use common::{greeter, MapContainer};
use portico::{facade, hub, Bootstrap, Container, Error, Facade, Value};
use std::sync::Arc;

facade! {
  /// Proxy for the demo greeter service.
  struct Greeter => "greeter";
}

// The process-wide slot is write-once, so its whole lifecycle runs as one
// test in its own binary. Everything else in the suite uses per-test hubs.
#[test]
fn test_global_hub_lifecycle() {
  // Before boot: nothing is installed and calls are rejected.
  assert!(hub().container().is_none());
  assert!(matches!(Greeter::call("greet", vec![]), Err(Error::NotSet)));

  // Absent containers are rejected without consuming the slot.
  assert!(matches!(hub().set_container(None), Err(Error::AbsentContainer)));
  assert!(matches!(Bootstrap::empty().boot(), Err(Error::AbsentContainer)));
  assert!(hub().container().is_none());

  // The first boot wins.
  let container: Arc<dyn Container> = Arc::new(MapContainer::new().with("greeter", greeter()));
  Bootstrap::new(container.clone()).boot().unwrap();
  assert!(Arc::ptr_eq(&hub().container().unwrap(), &container));

  // Facade calls now forward through the global hub.
  let reply = Greeter::call("greet", vec![Value::from("World")]).unwrap();
  assert_eq!(reply, Value::from("Hello, World"));
  assert!(Greeter::container().is_some());

  // A second boot fails and leaves the original reference in place.
  let replacement: Arc<dyn Container> = Arc::new(MapContainer::new());
  assert!(matches!(
    Bootstrap::new(replacement).boot(),
    Err(Error::AlreadySet)
  ));
  assert!(Arc::ptr_eq(&hub().container().unwrap(), &container));
}
