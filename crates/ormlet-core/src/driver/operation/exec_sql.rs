use super::Operation;

use crate::stmt::Value;

#[derive(Debug, Clone)]
pub struct ExecSql {
    /// Statement text, in the driver's native placeholder syntax
    pub sql: String,

    /// Values bound to the placeholders, in order
    pub params: Vec<Value>,
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}
