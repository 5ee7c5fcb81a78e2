use super::Operation;

use crate::stmt::Value;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// Statement text, in the driver's native placeholder syntax
    pub sql: String,

    /// Values bound to the placeholders, in order
    pub params: Vec<Value>,

    /// Stop fetching after this many rows
    pub limit: Option<usize>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
