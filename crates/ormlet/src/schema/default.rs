//! Default values for fields, and the generators commonly used with them.

use ormlet_core::stmt::Value;

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Value used for a field the first time a record is saved without it.
#[derive(Clone)]
pub enum FieldDefault {
    /// A fixed value
    Value(Value),

    /// Called to produce a fresh value, e.g. a generated key or a timestamp
    Generator(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl FieldDefault {
    pub fn generator<F, V>(f: F) -> FieldDefault
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        FieldDefault::Generator(Arc::new(move || f().into()))
    }

    /// Produce the default, calling the generator if there is one.
    pub fn resolve(&self) -> Value {
        match self {
            FieldDefault::Value(value) => value.clone(),
            FieldDefault::Generator(f) => f(),
        }
    }

    pub fn is_generator(&self) -> bool {
        matches!(self, FieldDefault::Generator(_))
    }
}

impl From<Value> for FieldDefault {
    fn from(value: Value) -> Self {
        FieldDefault::Value(value)
    }
}

impl core::fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FieldDefault::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldDefault::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// A new, roughly time-ordered unique id: a 15 digit millisecond timestamp,
/// 32 hex digits of a random UUID, then `000`. Always 50 characters.
pub fn next_id() -> String {
    format!(
        "{:015}{}000",
        unix_millis(),
        uuid::Uuid::new_v4().simple()
    )
}

/// Seconds since the Unix epoch, with sub-second precision.
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
