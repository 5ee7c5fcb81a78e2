mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Select, SelectExpr};

mod update;
pub use update::Update;

/// A statement template over one table.
///
/// Only the shapes needed to persist a single record type are modeled;
/// anything else is appended as raw text through [`crate::Clauses`].
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Select(Select<'a>),
    SelectExpr(SelectExpr<'a>),
    Insert(Insert<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
}

impl<'a> Statement<'a> {
    pub fn select(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Select {
            table,
            columns: columns.into_iter().collect(),
        }
        .into()
    }

    pub fn select_expr(table: &'a str, expr: &'a str, alias: &'a str) -> Self {
        SelectExpr { table, expr, alias }.into()
    }

    pub fn insert(table: &'a str, columns: impl IntoIterator<Item = &'a str>) -> Self {
        Insert {
            table,
            columns: columns.into_iter().collect(),
        }
        .into()
    }

    pub fn update(
        table: &'a str,
        columns: impl IntoIterator<Item = &'a str>,
        key: &'a str,
    ) -> Self {
        Update {
            table,
            columns: columns.into_iter().collect(),
            key,
        }
        .into()
    }

    pub fn delete(table: &'a str, key: &'a str) -> Self {
        Delete { table, key }.into()
    }
}
