use portico::{facade, Bootstrap, Container, Error, Facade, MethodTable, Service, ServiceError, Value};
use std::sync::Arc;

struct Registry {
  mailer: Arc<MethodTable>,
}

impl Container for Registry {
  fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
    match key {
      "mailer" => Ok(self.mailer.clone()),
      other => Err(format!("no service registered under `{}`", other).into()),
    }
  }
}

facade! {
  pub struct Mailer => "mailer";
  pub struct Queue => "queue";
}

fn main() {
  // --- Calling before boot ---
  println!("Calling through a facade before anything booted...");
  match Mailer::call("send", vec![]) {
    Err(Error::NotSet) => println!("Correctly rejected: {}", Error::NotSet),
    other => panic!("expected NotSet, got {:?}", other),
  }

  // --- Boot, then walk the remaining failure modes ---
  let mailer = MethodTable::new().method("send", |args| {
    let to = args.first().and_then(Value::as_str).unwrap_or("nobody");
    Ok(Value::from(format!("sent to {}", to)))
  });
  Bootstrap::new(Arc::new(Registry { mailer: Arc::new(mailer) }))
    .boot()
    .expect("boot");

  // A facade whose accessor the container cannot resolve. The container's
  // own error comes back word for word.
  println!("\nCalling a facade whose service is not in the container...");
  match Queue::call("push", vec![Value::from("job-1")]) {
    Err(Error::Resolution(source)) => println!("Container says: {}", source),
    other => panic!("expected Resolution, got {:?}", other),
  }

  // A method the resolved service does not expose. Nothing was invoked.
  println!("\nCalling a method the mailer does not expose...");
  match Mailer::call("archive", vec![]) {
    Err(Error::NoSuchMethod { accessor, method }) => {
      println!("Correctly rejected: no `{}` on `{}`.", method, accessor)
    }
    other => panic!("expected NoSuchMethod, got {:?}", other),
  }

  // --- The happy path still works ---
  println!("\nAnd the mailer itself is unaffected:");
  let receipt = Mailer::call("send", vec![Value::from("ops@example.com")]).expect("send");
  println!("{}", receipt);
  assert_eq!(receipt, Value::from("sent to ops@example.com"));
}
