//! Public macros for declaring facades and forwarding calls.

/// Declares one or more zero-state facade variants.
///
/// Each declaration produces a unit struct and a [`Facade`](crate::Facade)
/// implementation whose accessor is the given key. Attributes and doc
/// comments carry over to the generated struct.
///
/// # Examples
///
/// ```
/// use portico::{facade, Facade};
///
/// facade! {
///   /// Proxy for the session service.
///   pub struct Session => "session";
///   pub struct Cache => "cache.default";
/// }
///
/// assert_eq!(Session::accessor(), "session");
/// assert_eq!(Cache::accessor(), "cache.default");
/// ```
#[macro_export]
macro_rules! facade {
  ($(
    $(#[$meta:meta])*
    $vis:vis struct $name:ident => $accessor:expr;
  )+) => {
    $(
      $(#[$meta])*
      $vis struct $name;

      impl $crate::Facade for $name {
        fn accessor() -> &'static str {
          $accessor
        }
      }
    )+
  };
}

/// Forwards a method call through a facade.
///
/// Arguments are converted with `Value::from`, so numbers, strings, and
/// prebuilt `serde_json::Value`s (for example from `serde_json::json!`)
/// all work. The expansion returns the forwarded call's `Result`; nothing
/// panics here.
///
/// # Examples
///
/// ```
/// use portico::{facade, invoke, Bootstrap, Container, MethodTable, Service, ServiceError, Value};
/// use std::sync::Arc;
///
/// struct Registry {
///   calc: Arc<MethodTable>,
/// }
///
/// impl Container for Registry {
///   fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
///     match key {
///       "calc" => Ok(self.calc.clone()),
///       other => Err(format!("unknown service `{}`", other).into()),
///     }
///   }
/// }
///
/// facade! {
///   pub struct Calc => "calc";
/// }
///
/// let calc = MethodTable::new().method("add", |args| {
///   let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
///   Ok(Value::from(sum))
/// });
/// Bootstrap::new(Arc::new(Registry { calc: Arc::new(calc) })).boot()?;
///
/// assert_eq!(invoke!(Calc, add(2, 3, 4))?, Value::from(9));
/// assert_eq!(invoke!(Calc, add())?, Value::from(0));
/// # Ok::<(), portico::Error>(())
/// ```
#[macro_export]
macro_rules! invoke {
  ($facade:ty, $method:ident ( $($arg:expr),* $(,)? )) => {
    <$facade as $crate::Facade>::call(
      stringify!($method),
      vec![$($crate::Value::from($arg)),*],
    )
  };
}

/// Forwards a method call through a facade against an explicit hub.
///
/// Same argument conversion as [`invoke!`](crate::invoke!), but the call
/// goes to the given [`FacadeHub`](crate::FacadeHub) instead of the
/// facade's own hub. Useful when a test wires a throwaway hub.
///
/// # Examples
///
/// ```
/// use portico::{facade, invoke_from, Container, FacadeHub, MethodTable, Service, ServiceError, Value};
/// use std::sync::Arc;
///
/// struct Registry {
///   echo: Arc<MethodTable>,
/// }
///
/// impl Container for Registry {
///   fn resolve(&self, key: &str) -> Result<Arc<dyn Service>, ServiceError> {
///     match key {
///       "echo" => Ok(self.echo.clone()),
///       other => Err(format!("unknown service `{}`", other).into()),
///     }
///   }
/// }
///
/// facade! {
///   pub struct Echo => "echo";
/// }
///
/// let echo = MethodTable::new().method("first", |mut args| {
///   Ok(args.drain(..).next().unwrap_or(Value::Null))
/// });
///
/// let hub = FacadeHub::new();
/// hub.set_container(Some(Arc::new(Registry { echo: Arc::new(echo) })))?;
///
/// assert_eq!(invoke_from!(&hub, Echo, first("verbatim"))?, Value::from("verbatim"));
/// # Ok::<(), portico::Error>(())
/// ```
#[macro_export]
macro_rules! invoke_from {
  ($hub:expr, $facade:ty, $method:ident ( $($arg:expr),* $(,)? )) => {
    ($hub).forward(
      <$facade as $crate::Facade>::accessor(),
      stringify!($method),
      vec![$($crate::Value::from($arg)),*],
    )
  };
}
