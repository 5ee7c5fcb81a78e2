mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, OptsBuilder, Params,
};
use ormlet_core::{
    async_trait,
    driver::{Driver, Flavor, Operation, Response},
    stmt::Row,
    Error, Result,
};
use tracing::debug;

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db: String,

    /// Sent as `SET NAMES <charset>` on every new connection
    pub charset: String,

    pub autocommit: bool,
}

impl ConnectOptions {
    /// Statements run once on every new connection.
    pub fn init_statements(&self) -> Vec<String> {
        vec![
            format!("SET NAMES {}", self.charset),
            format!("SET autocommit={}", u8::from(self.autocommit)),
        ]
    }

    fn to_opts(&self) -> OptsBuilder {
        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
            .db_name(Some(self.db.clone()))
            .init(self.init_statements())
            // Report matched rows rather than changed rows, so an update that
            // writes identical values still counts as one affected row.
            .client_found_rows(true)
    }
}

#[derive(Debug)]
pub struct MySQL {
    options: ConnectOptions,
}

impl MySQL {
    pub fn new(options: ConnectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }
}

#[async_trait]
impl Driver for MySQL {
    fn flavor(&self) -> Flavor {
        Flavor::Mysql
    }

    async fn connect(&self) -> Result<Box<dyn ormlet_core::driver::Connection>> {
        debug!(host = %self.options.host, port = self.options.port, db = %self.options.db, "connect to mysql");

        let conn = Conn::new(self.options.to_opts())
            .await
            .map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ormlet_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let params = to_params(op.params());

        match op {
            Operation::QuerySql(op) => {
                let mut result = self
                    .conn
                    .exec_iter(op.sql.as_str(), params)
                    .await
                    .map_err(Error::driver)?;

                let mut rows = vec![];

                while op.limit.map_or(true, |limit| rows.len() < limit) {
                    let Some(row) = result.next().await.map_err(Error::driver)? else {
                        break;
                    };
                    rows.push(load_row(row));
                }

                // Discard anything past the limit so the connection is ready
                // for the next statement.
                result.drop_result().await.map_err(Error::driver)?;

                Ok(Response::values(rows))
            }
            Operation::ExecSql(op) => {
                self.conn
                    .exec_drop(op.sql.as_str(), params)
                    .await
                    .map_err(Error::driver)?;

                Ok(Response::count(self.conn.affected_rows()))
            }
        }
    }
}

fn to_params(values: &[ormlet_core::stmt::Value]) -> Params {
    if values.is_empty() {
        return Params::Empty;
    }

    Params::Positional(
        values
            .iter()
            .map(|value| Value::from(value.clone()).to_value())
            .collect(),
    )
}

fn load_row(mut row: mysql_async::Row) -> Row {
    let columns = row.columns();
    let mut ret = Row::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let value = row
            .take::<mysql_async::Value, usize>(index)
            .map(|value| Value::from_sql(value).into_inner())
            .unwrap_or_default();
        ret.push(column.name_str().into_owned(), value);
    }

    ret
}
