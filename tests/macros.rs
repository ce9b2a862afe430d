mod common;

use common::{greeter, MapContainer};
use portico::{facade, hub, invoke, invoke_from, Error, Facade, FacadeHub, MethodTable, Value};
use serde_json::json;
use std::sync::{Arc, Once};

facade! {
  /// Proxy for the calculator service.
  pub struct Calculator => "calculator";
  struct Greeter => "greeter";
}

fn calculator() -> MethodTable {
  MethodTable::new()
    .method("add", |args| {
      let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
      Ok(Value::from(sum))
    })
    .method("concat", |args| {
      let joined: String = args.iter().filter_map(Value::as_str).collect();
      Ok(Value::from(joined))
    })
}

// Tests in this binary run in parallel and all read the process-wide slot,
// so the shared container is installed exactly once.
static INSTALL: Once = Once::new();

fn install_demo_container() {
  INSTALL.call_once(|| {
    let container = MapContainer::new()
      .with("calculator", calculator())
      .with("greeter", greeter());
    hub().set_container(Some(Arc::new(container))).unwrap();
  });
}

#[test]
fn test_facade_declares_unit_variants_with_accessors() {
  assert_eq!(Calculator::accessor(), "calculator");
  assert_eq!(Greeter::accessor(), "greeter");
}

#[test]
fn test_invoke_forwards_the_method_name_and_arguments() {
  // Arrange
  install_demo_container();

  // Act + Assert
  assert_eq!(invoke!(Calculator, add(2, 3, 4)).unwrap(), Value::from(9));
  assert_eq!(
    invoke!(Calculator, concat("por", "tico")).unwrap(),
    Value::from("portico")
  );
}

#[test]
fn test_invoke_accepts_prebuilt_values_and_trailing_commas() {
  // Arrange
  install_demo_container();

  // Act
  let reply = invoke!(Calculator, add(json!(40), 1, 1,)).unwrap();

  // Assert
  assert_eq!(reply, Value::from(42));
}

#[test]
fn test_invoke_surfaces_missing_methods() {
  // Arrange
  install_demo_container();

  // Act
  let result = invoke!(Calculator, subtract(5, 3));

  // Assert
  match result {
    Err(Error::NoSuchMethod { accessor, method }) => {
      assert_eq!(accessor, "calculator");
      assert_eq!(method, "subtract");
    }
    other => panic!("expected NoSuchMethod, got {:?}", other),
  }
}

#[test]
fn test_invoke_from_targets_an_explicit_hub() {
  // Arrange
  let hub = FacadeHub::new();
  let container = MapContainer::new().with("calculator", calculator());
  hub.set_container(Some(Arc::new(container))).unwrap();

  // Act + Assert: the process-wide hub is not involved.
  assert_eq!(invoke_from!(&hub, Calculator, add(1, 2)).unwrap(), Value::from(3));
  assert_eq!(invoke_from!(&hub, Calculator, add()).unwrap(), Value::from(0));
}
