mod builder;
pub use builder::Builder;

pub mod default;
pub use default::FieldDefault;

mod field;
pub use field::{Field, FieldTy};

use ormlet_core::driver::Flavor;

use indexmap::IndexMap;

/// The compiled description of one record type: how its attributes map to
/// columns, which attribute is the primary key, and the canonical statement
/// templates used to persist it.
///
/// A schema is produced once by [`Schema::builder`] and then shared
/// read-only (as `Arc<Schema>`) by every record of that type.
#[derive(Debug)]
pub struct Schema {
    /// Name of the record type
    pub(crate) name: String,

    pub(crate) table_name: String,

    /// Dialect used to quote identifiers in the templates
    pub(crate) flavor: Flavor,

    /// Attribute name to field, in declaration order
    pub(crate) mapping: IndexMap<String, Field>,

    /// Attribute holding the primary key
    pub(crate) primary_key: String,

    /// Non-key attributes, in declaration order
    pub(crate) fields: Vec<String>,

    pub(crate) select: String,
    pub(crate) insert: String,
    pub(crate) update: String,
    pub(crate) delete: String,

    /// `<key column>=?`, appended to `select` to look a record up by key
    pub(crate) key_filter: String,
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn mapping(&self) -> &IndexMap<String, Field> {
        &self.mapping
    }

    pub fn field(&self, attr: &str) -> Option<&Field> {
        self.mapping.get(attr)
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn primary_key_field(&self) -> &Field {
        &self.mapping[&self.primary_key]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Column backing `attr`, or `None` if the schema has no such attribute.
    pub fn column_name<'a>(&'a self, attr: &'a str) -> Option<&'a str> {
        self.mapping
            .get(attr)
            .map(|field| field.column_name().unwrap_or(attr))
    }

    /// Attribute backed by `column`.
    pub fn attribute_for_column(&self, column: &str) -> Option<&str> {
        self.mapping
            .iter()
            .find(|(attr, field)| field.column_name().unwrap_or(attr) == column)
            .map(|(attr, _)| attr.as_str())
    }

    /// `select <key>, <fields...> from <table>`
    pub fn select(&self) -> &str {
        &self.select
    }

    /// `insert into <table> (<fields...>, <key>) values (?, ...)`
    pub fn insert(&self) -> &str {
        &self.insert
    }

    /// `update <table> set <field>=?, ... where <key>=?`
    pub fn update(&self) -> &str {
        &self.update
    }

    /// `delete from <table> where <key>=?`
    pub fn delete(&self) -> &str {
        &self.delete
    }

    pub(crate) fn key_filter(&self) -> &str {
        &self.key_filter
    }
}
