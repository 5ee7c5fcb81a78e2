mod exec_sql;
pub use exec_sql::ExecSql;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Run a statement that returns rows
    QuerySql(QuerySql),

    /// Run a statement that reports an affected row count
    ExecSql(ExecSql),
}

impl Operation {
    pub fn sql(&self) -> &str {
        match self {
            Operation::QuerySql(op) => &op.sql,
            Operation::ExecSql(op) => &op.sql,
        }
    }

    pub fn params(&self) -> &[crate::stmt::Value] {
        match self {
            Operation::QuerySql(op) => &op.params,
            Operation::ExecSql(op) => &op.params,
        }
    }
}
