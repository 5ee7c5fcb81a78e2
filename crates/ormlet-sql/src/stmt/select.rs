use super::Statement;

/// `select <columns> from <table>`
#[derive(Debug, Clone)]
pub struct Select<'a> {
    pub table: &'a str,
    pub columns: Vec<&'a str>,
}

/// `select <expr> as <alias> from <table>`, where `expr` is raw SQL.
#[derive(Debug, Clone)]
pub struct SelectExpr<'a> {
    pub table: &'a str,
    pub expr: &'a str,
    pub alias: &'a str,
}

impl<'a> From<Select<'a>> for Statement<'a> {
    fn from(value: Select<'a>) -> Self {
        Statement::Select(value)
    }
}

impl<'a> From<SelectExpr<'a>> for Statement<'a> {
    fn from(value: SelectExpr<'a>) -> Self {
        Statement::SelectExpr(value)
    }
}
