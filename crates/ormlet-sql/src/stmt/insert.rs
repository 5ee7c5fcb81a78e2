use super::Statement;

/// `insert into <table> (<columns>) values (?, ...)`, one placeholder per
/// column.
#[derive(Debug, Clone)]
pub struct Insert<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
}

impl<'a> From<Insert<'a>> for Statement<'a> {
    fn from(value: Insert<'a>) -> Self {
        Statement::Insert(value)
    }
}
