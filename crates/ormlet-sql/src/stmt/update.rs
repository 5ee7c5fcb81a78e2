use super::Statement;

/// `update <table> set <column>=?, ... where <key>=?`
///
/// The key placeholder is always last.
#[derive(Debug, Clone)]
pub struct Update<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
    pub key: &'a str,
}

impl<'a> From<Update<'a>> for Statement<'a> {
    fn from(value: Update<'a>) -> Self {
        Statement::Update(value)
    }
}
