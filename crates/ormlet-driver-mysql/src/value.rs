use mysql_async::prelude::ToValue;
use ormlet_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a value read from a result row.
    ///
    /// The binary protocol returns character columns as bytes; those are
    /// turned back into strings when they hold valid UTF-8.
    pub fn from_sql(value: mysql_async::Value) -> Self {
        use mysql_async::Value::*;

        let core_value = match value {
            NULL => CoreValue::Null,
            Int(value) => CoreValue::I64(value),
            UInt(value) => match i64::try_from(value) {
                Ok(value) => CoreValue::I64(value),
                Err(_) => CoreValue::String(value.to_string()),
            },
            Float(value) => CoreValue::F64(value as f64),
            Double(value) => CoreValue::F64(value),
            Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(value) => CoreValue::String(value),
                Err(err) => CoreValue::Bytes(err.into_bytes()),
            },
            Date(year, month, day, hour, minute, second, micros) => CoreValue::String(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{micros:06}"
            )),
            Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if negative { "-" } else { "" };
                let hours = days * 24 + u32::from(hours);
                CoreValue::String(format!(
                    "{sign}{hours:02}:{minutes:02}:{seconds:02}.{micros:06}"
                ))
            }
        };

        Value(core_value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => mysql_async::Value::Bytes(value.clone()),
        }
    }
}
