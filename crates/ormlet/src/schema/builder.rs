use super::{Field, Schema};

use indexmap::IndexMap;
use ormlet_core::{driver::Flavor, Error, Result};
use ormlet_sql::{Serializer, Statement};
use tracing::info;

use std::sync::Arc;

/// Declares a record type and compiles it into a [`Schema`].
///
/// ```
/// use ormlet::{schema::default::next_id, Field, Schema};
///
/// let schema = Schema::builder("User")
///     .table("users")
///     .field("id", Field::string().primary_key().default_with(next_id).ddl("varchar(50)"))
///     .field("email", Field::string().ddl("varchar(50)"))
///     .field("admin", Field::boolean())
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.primary_key(), "id");
/// assert_eq!(schema.select(), "select `id`, `email`, `admin` from `users`");
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    table_name: Option<String>,
    flavor: Flavor,

    /// Declared fields, in declaration order
    fields: Vec<(String, Field)>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            table_name: None,
            flavor: Flavor::default(),
            fields: vec![],
        }
    }

    /// Name of the backing table. Defaults to the record type's name.
    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.table_name = Some(name.into());
        self
    }

    /// SQL dialect used when quoting identifiers. Defaults to MySQL.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Declare an attribute.
    pub fn field(&mut self, attr: impl Into<String>, field: Field) -> &mut Self {
        self.fields.push((attr.into(), field));
        self
    }

    /// Compile the declaration.
    ///
    /// Fails with an invalid schema error when the declaration has no
    /// primary key, more than one primary key, or two fields sharing an
    /// attribute or column name. The output only depends on the declaration,
    /// so building the same declaration twice yields identical schemas.
    pub fn build(&self) -> Result<Arc<Schema>> {
        let table_name = self.table_name.clone().unwrap_or_else(|| self.name.clone());
        info!(model = %self.name, table = %table_name, "found model");

        let mut mapping: IndexMap<String, Field> = IndexMap::with_capacity(self.fields.len());
        let mut primary_key = None;
        let mut fields = vec![];

        for (attr, field) in &self.fields {
            info!(model = %self.name, attribute = %attr, field = %field, "found mapping");

            if mapping.contains_key(attr) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{attr}` in model `{}`",
                    self.name
                )));
            }

            let column = field.column_name().unwrap_or(attr);
            if let Some((other, _)) = mapping
                .iter()
                .find(|(other, f): &(&String, &Field)| f.column_name().unwrap_or(other) == column)
            {
                return Err(Error::invalid_schema(format!(
                    "fields `{other}` and `{attr}` of model `{}` both map to column `{column}`",
                    self.name
                )));
            }

            if field.is_primary_key() {
                if primary_key.is_some() {
                    return Err(Error::invalid_schema(format!(
                        "duplicate primary key for field: {attr}"
                    )));
                }
                primary_key = Some(attr.clone());
            } else {
                fields.push(attr.clone());
            }

            mapping.insert(attr.clone(), field.clone());
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::invalid_schema(format!(
                "primary key not found for model `{}`",
                self.name
            )));
        };

        let column = |attr: &str| -> String {
            mapping[attr]
                .column_name()
                .unwrap_or(attr)
                .to_string()
        };

        let key = column(&primary_key);
        let columns = fields.iter().map(|attr| column(attr)).collect::<Vec<_>>();

        let serializer = Serializer::new(self.flavor);

        let select = serializer.serialize(&Statement::select(
            &table_name,
            std::iter::once(key.as_str()).chain(columns.iter().map(String::as_str)),
        ));

        let insert = serializer.serialize(&Statement::insert(
            &table_name,
            columns
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(key.as_str())),
        ));

        let update = serializer.serialize(&Statement::update(
            &table_name,
            columns.iter().map(String::as_str),
            &key,
        ));

        let delete = serializer.serialize(&Statement::delete(&table_name, &key));

        let key_filter = format!("{}=?", serializer.quote(&key));

        Ok(Arc::new(Schema {
            name: self.name.clone(),
            table_name,
            flavor: self.flavor,
            mapping,
            primary_key,
            fields,
            select,
            insert,
            update,
            delete,
            key_filter,
        }))
    }
}
