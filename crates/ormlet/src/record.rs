use crate::{Db, Schema};

use indexmap::IndexMap;
use ormlet_core::{
    stmt::{Row, Value},
    Error, Result,
};
use tracing::{debug, warn};

use std::sync::Arc;

/// One row of a record type, as attribute values.
///
/// An attribute that was never assigned is *unset*. Unset attributes pick up
/// their field's default when the record is saved; an attribute explicitly
/// set to [`Value::Null`] does not.
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// An empty record: every attribute unset.
    pub fn new(schema: &Arc<Schema>) -> Record {
        Record {
            schema: schema.clone(),
            values: IndexMap::with_capacity(schema.mapping().len()),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn set(&mut self, attr: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.check_attr(attr)?;
        self.values.insert(attr.to_string(), value.into());
        Ok(self)
    }

    /// Consuming form of [`Record::set`].
    pub fn with(mut self, attr: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(attr, value)?;
        Ok(self)
    }

    /// The attribute's value, or `None` while it is unset.
    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.values.get(attr)
    }

    /// The attribute's value converted to `T`. Unset reads as null.
    pub fn get_as<T>(&self, attr: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        self.check_attr(attr)?;
        T::try_from(self.value(attr))
    }

    /// The attribute's value, or null while it is unset. Never resolves a
    /// default.
    pub fn value(&self, attr: &str) -> Value {
        self.values.get(attr).cloned().unwrap_or_default()
    }

    /// The attribute's value. An unset attribute whose field has a default
    /// takes the default now: a generator is called and its result stored,
    /// so later calls see the same value.
    pub fn value_or_default(&mut self, attr: &str) -> Result<Value> {
        if let Some(value) = self.values.get(attr) {
            return Ok(value.clone());
        }

        let field = self
            .schema
            .field(attr)
            .ok_or_else(|| Error::unknown_field(self.schema.name(), attr))?;

        let Some(default) = field.default_value() else {
            return Ok(Value::Null);
        };

        let value = default.resolve();
        debug!(model = %self.schema.name(), attribute = %attr, value = %value, "using default value");
        self.values.insert(attr.to_string(), value.clone());
        Ok(value)
    }

    /// Clear the attribute so it reads as unset again.
    pub fn unset(&mut self, attr: &str) -> Option<Value> {
        self.values.shift_remove(attr)
    }

    pub fn is_set(&self, attr: &str) -> bool {
        self.values.contains_key(attr)
    }

    /// Value of the primary key attribute.
    pub fn primary_key(&self) -> Value {
        self.value(self.schema.primary_key())
    }

    /// Set attributes, in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(attr, value)| (attr.as_str(), value))
    }

    /// Build a record from a result row of the schema's select statement.
    pub fn from_row(schema: &Arc<Schema>, row: Row) -> Result<Record> {
        let mut record = Record::new(schema);

        for (column, value) in row {
            let attr = schema
                .attribute_for_column(&column)
                .ok_or_else(|| Error::unknown_field(schema.name(), &column))?;
            let ty = schema.mapping()[attr].ty();

            record.values.insert(attr.to_string(), ty.normalize(value));
        }

        Ok(record)
    }

    /// Insert the record. Unset attributes with a default take it first,
    /// non-key attributes in declaration order and then the key. Once the row
    /// is inserted, attributes that are still unset read as set to null, as
    /// stored.
    ///
    /// Returns the number of affected rows; anything other than 1 is logged
    /// as a warning.
    pub async fn save(&mut self, db: &Db) -> Result<u64> {
        let schema = self.schema.clone();
        db.check_flavor(&schema)?;

        let mut args = Vec::with_capacity(schema.fields().len() + 1);
        for attr in schema.fields() {
            args.push(self.value_or_default(attr)?);
        }
        args.push(self.value_or_default(schema.primary_key())?);

        let rows = db.run_mutation(schema.insert(), args).await?;
        if rows != 1 {
            warn!(model = %schema.name(), rows, "failed to insert record: affected rows");
            return Ok(rows);
        }

        // Attributes still unset were written as null
        for attr in schema.mapping().keys() {
            if !self.values.contains_key(attr) {
                self.values.insert(attr.clone(), Value::Null);
            }
        }
        Ok(rows)
    }

    /// Write every non-key attribute to the row with this record's key.
    /// Unset attributes are written as null.
    pub async fn update(&self, db: &Db) -> Result<u64> {
        db.check_flavor(&self.schema)?;

        let args = self
            .schema
            .fields()
            .iter()
            .map(|attr| self.value(attr))
            .chain(std::iter::once(self.primary_key()))
            .collect();

        let rows = db.run_mutation(self.schema.update(), args).await?;
        if rows != 1 {
            warn!(model = %self.schema.name(), rows, "failed to update by primary key: affected rows");
        }
        Ok(rows)
    }

    /// Delete the row with this record's key.
    pub async fn remove(&self, db: &Db) -> Result<u64> {
        db.check_flavor(&self.schema)?;

        let rows = db
            .run_mutation(self.schema.delete(), vec![self.primary_key()])
            .await?;
        if rows != 1 {
            warn!(model = %self.schema.name(), rows, "failed to remove by primary key: affected rows");
        }
        Ok(rows)
    }

    fn check_attr(&self, attr: &str) -> Result<()> {
        match self.schema.field(attr) {
            Some(_) => Ok(()),
            None => Err(Error::unknown_field(self.schema.name(), attr)),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && self.values == other.values
    }
}

impl core::fmt::Debug for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut fmt = f.debug_struct(self.schema.name());
        for (attr, value) in &self.values {
            fmt.field(attr, value);
        }
        fmt.finish()
    }
}
