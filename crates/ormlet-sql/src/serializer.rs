#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::Placeholder;

mod statement;

mod substitute;

use crate::{stmt::Statement, Flavor};

/// Serialize statements to SQL text for one database flavor.
///
/// Statements are rendered as templates using the generic `?` placeholder.
/// [`Serializer::substitute`] rewrites a template into the flavor's native
/// placeholder syntax right before it is sent to the database.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement<'_>) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Quote a table or column name.
    pub fn quote(&self, name: &str) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        Ident(name).to_sql(&mut fmt);
        ret
    }
}
