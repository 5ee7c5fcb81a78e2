mod value;
pub(crate) use value::Value;

use ormlet_core::{
    async_trait,
    driver::{Driver, Flavor, Operation, Response},
    stmt::Row,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:<path>` or
    /// `sqlite::memory:` URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_configuration(format!("invalid connection URL: {err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn connect(&self) -> Result<Box<dyn ormlet_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    /// Each in-memory connection is its own database.
    fn max_connections(&self) -> Option<usize> {
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        debug!("open in-memory sqlite database");
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "open sqlite database");
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl ormlet_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let params = op
            .params()
            .iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>();

        let (sql, limit) = match op {
            Operation::QuerySql(op) => (op.sql, op.limit),
            Operation::ExecSql(op) => {
                let count = self
                    .connection
                    .execute(&op.sql, rusqlite::params_from_iter(params.iter()))
                    .map_err(Error::driver)?;

                return Ok(Response::count(count as u64));
            }
        };

        let mut stmt = self.connection.prepare_cached(&sql).map_err(Error::driver)?;

        let columns = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while limit.map_or(true, |limit| ret.len() < limit) {
            let Some(row) = rows.next().map_err(Error::driver)? else {
                break;
            };

            let mut record = Row::with_capacity(columns.len());
            for (index, column) in columns.iter().enumerate() {
                let value = row.get_ref(index).map_err(Error::driver)?;
                record.push(column.as_str(), Value::from_sql(value).into_inner());
            }
            ret.push(record);
        }

        Ok(Response::values(ret))
    }
}
