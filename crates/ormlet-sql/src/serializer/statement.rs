use super::{params::Generic, Comma, Formatter, Ident, ToSql};

use crate::stmt::{Delete, Insert, Select, SelectExpr, Statement, Update};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::SelectExpr(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(self.table);

        fmt!(f, "select " columns " from " table);
    }
}

impl ToSql for &SelectExpr<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = Ident(self.alias);
        let table = Ident(self.table);

        fmt!(f, "select " self.expr " as " alias " from " table);
    }
}

impl ToSql for &Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table);
        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(self.columns.iter().map(|_| Generic));

        fmt!(f, "insert into " table " (" columns ") values (" values ")");
    }
}

impl ToSql for &Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table);
        let key = Ident(self.key);

        fmt!(f, "update " table " set ");

        if self.columns.is_empty() {
            // Only a key: keep the statement valid with a no-op assignment
            fmt!(f, Ident(self.key) "=" Ident(self.key));
        } else {
            let assignments = Comma(self.columns.iter().map(|column| Assign(column)));
            fmt!(f, assignments);
        }

        fmt!(f, " where " key "=" Generic);
    }
}

impl ToSql for &Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.table);
        let key = Ident(self.key);

        fmt!(f, "delete from " table " where " key "=" Generic);
    }
}

/// `<column>=?`
struct Assign<'a>(&'a str);

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) "=" Generic);
    }
}
