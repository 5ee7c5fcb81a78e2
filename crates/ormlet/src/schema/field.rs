use super::FieldDefault;

use ormlet_core::stmt::Value;

/// Describes one column of a record type.
///
/// Fields are built with one of the kind constructors ([`Field::string`],
/// [`Field::boolean`], ...) or [`Field::new`], adjusted with the consuming
/// modifiers, then handed to the schema builder. Once compiled into a
/// [`Schema`](super::Schema) a field is never modified.
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name, when it differs from the attribute name
    name: Option<String>,

    /// Column type as written in DDL
    column_type: String,

    ty: FieldTy,

    primary_key: bool,

    default: Option<FieldDefault>,
}

/// Kind of value a field holds.
///
/// Databases do not always hand back the type that was stored (MySQL and
/// SQLite both return booleans as integers), so values loaded from a row are
/// normalized to the field's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTy {
    /// No normalization
    Any,
    String,
    Bool,
    Integer,
    Float,
    Text,
}

impl Field {
    pub fn new(
        name: Option<&str>,
        column_type: impl Into<String>,
        primary_key: bool,
        default: Option<FieldDefault>,
    ) -> Field {
        Field {
            name: name.map(str::to_string),
            column_type: column_type.into(),
            ty: FieldTy::Any,
            primary_key,
            default,
        }
    }

    /// `varchar(100)`, no default
    pub fn string() -> Field {
        Field::kind(FieldTy::String, "varchar(100)", None)
    }

    /// `boolean`, defaults to `false`
    pub fn boolean() -> Field {
        Field::kind(FieldTy::Bool, "boolean", Some(Value::Bool(false).into()))
    }

    /// `bigint`, defaults to `0`
    pub fn integer() -> Field {
        Field::kind(FieldTy::Integer, "bigint", Some(Value::I64(0).into()))
    }

    /// `real`, defaults to `0.0`
    pub fn float() -> Field {
        Field::kind(FieldTy::Float, "real", Some(Value::F64(0.0).into()))
    }

    /// `text`, no default
    pub fn text() -> Field {
        Field::kind(FieldTy::Text, "text", None)
    }

    fn kind(ty: FieldTy, column_type: &str, default: Option<FieldDefault>) -> Field {
        Field {
            name: None,
            column_type: column_type.to_string(),
            ty,
            primary_key: false,
            default,
        }
    }

    /// Store the field in a column with a different name than the attribute.
    pub fn name(mut self, name: impl Into<String>) -> Field {
        self.name = Some(name.into());
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    /// Use a fixed default value.
    pub fn default(mut self, value: impl Into<Value>) -> Field {
        self.default = Some(FieldDefault::Value(value.into()));
        self
    }

    /// Compute the default by calling `f` the first time a record needs it.
    pub fn default_with<F, V>(mut self, f: F) -> Field
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.default = Some(FieldDefault::generator(f));
        self
    }

    pub fn no_default(mut self) -> Field {
        self.default = None;
        self
    }

    /// Override the column type, e.g. `varchar(50)`.
    pub fn ddl(mut self, column_type: impl Into<String>) -> Field {
        self.column_type = column_type.into();
        self
    }

    pub fn column_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn column_type(&self) -> &str {
        &self.column_type
    }

    pub fn ty(&self) -> FieldTy {
        self.ty
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn default_value(&self) -> Option<&FieldDefault> {
        self.default.as_ref()
    }
}

impl FieldTy {
    /// Bring a value loaded from the database back to this kind.
    pub fn normalize(self, value: Value) -> Value {
        match (self, value) {
            (FieldTy::Bool, Value::I64(v)) => Value::Bool(v != 0),
            (FieldTy::Integer, Value::Bool(v)) => Value::I64(v as i64),
            (FieldTy::Float, Value::I64(v)) => Value::F64(v as f64),
            (FieldTy::String | FieldTy::Text, Value::Bytes(bytes)) => match String::from_utf8(bytes) {
                Ok(s) => Value::String(s),
                Err(err) => Value::Bytes(err.into_bytes()),
            },
            (_, value) => value,
        }
    }

    fn field_kind(self) -> &'static str {
        match self {
            FieldTy::Any => "Field",
            FieldTy::String => "StringField",
            FieldTy::Bool => "BooleanField",
            FieldTy::Integer => "IntegerField",
            FieldTy::Float => "FloatField",
            FieldTy::Text => "TextField",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "<{}, {}", self.ty.field_kind(), self.column_type)?;
        if let Some(name) = &self.name {
            write!(f, ":{name}")?;
        }
        f.write_str(">")
    }
}
