use super::Statement;

/// `delete from <table> where <key>=?`
#[derive(Debug, Clone)]
pub struct Delete<'a> {
    pub table: &'a str,
    pub key: &'a str,
}

impl<'a> From<Delete<'a>> for Statement<'a> {
    fn from(value: Delete<'a>) -> Self {
        Statement::Delete(value)
    }
}
