mod pool;
pub use pool::{Pool, PoolConfig, PoolConnection, Status};

#[cfg(feature = "mysql")]
use crate::Config;
use crate::{Filter, FindAll, Record, Schema};

use ormlet_core::{
    driver::{
        operation::{ExecSql, QuerySql},
        Driver, Flavor,
    },
    stmt::{Row, Value},
    Error, Result,
};
use ormlet_sql::{Serializer, Statement};
use tracing::info;

use std::sync::Arc;

/// Column alias holding the result of [`Db::find_number`].
pub const NUMBER_ALIAS: &str = "_num_";

/// A database handle.
///
/// Cloning is cheap: every clone shares the same connection pool. Each call
/// leases one connection for its duration and returns it when the call
/// finishes, fails or is cancelled.
#[derive(Debug, Clone)]
pub struct Db {
    pool: Arc<Pool>,
}

impl Db {
    /// Create the connection pool for `driver`.
    pub async fn new(driver: impl Driver, config: PoolConfig) -> Result<Db> {
        let pool = Pool::new(driver, config).await?;
        Ok(Db::from(pool))
    }

    /// Connect to the MySQL server described by `config`.
    #[cfg(feature = "mysql")]
    pub async fn connect(config: &Config) -> Result<Db> {
        config.validate()?;

        let driver = ormlet_driver_mysql::MySQL::new(config.connect_options()?);
        Db::new(driver, config.pool_config()).await
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn flavor(&self) -> Flavor {
        self.pool.flavor()
    }

    /// Close the pool. Calls already holding a connection finish normally;
    /// new calls fail.
    pub fn close(&self) {
        self.pool.close();
    }

    /// Run a statement that returns rows.
    ///
    /// `template` uses `?` placeholders, one per entry of `args`. With a
    /// `limit`, at most that many rows are fetched.
    pub async fn run_query(
        &self,
        template: &str,
        args: Vec<Value>,
        limit: Option<usize>,
    ) -> Result<Vec<Row>> {
        info!(sql = %template, args = args.len(), "run query");
        let sql = self.prepare(template, &args)?;

        let mut connection = self.pool.get().await?;
        let response = connection
            .exec(
                QuerySql {
                    sql,
                    params: args,
                    limit,
                }
                .into(),
            )
            .await?;
        let rows = response.rows.into_values()?;

        info!(rows = rows.len(), "rows returned");
        Ok(rows)
    }

    /// Run an INSERT, UPDATE or DELETE and return the number of affected
    /// rows.
    pub async fn run_mutation(&self, template: &str, args: Vec<Value>) -> Result<u64> {
        info!(sql = %template, args = args.len(), "run mutation");
        let sql = self.prepare(template, &args)?;

        let mut connection = self.pool.get().await?;
        let response = connection.exec(ExecSql { sql, params: args }.into()).await?;
        response.rows.into_count()
    }

    /// Look a record up by primary key.
    pub async fn find(&self, schema: &Arc<Schema>, key: impl Into<Value>) -> Result<Option<Record>> {
        self.check_flavor(schema)?;

        let sql = format!("{} where {}", schema.select(), schema.key_filter());
        let rows = self.run_query(&sql, vec![key.into()], Some(1)).await?;

        rows.into_iter()
            .next()
            .map(|row| Record::from_row(schema, row))
            .transpose()
    }

    /// Load every record matching `query`, in the order the database returns
    /// them.
    pub async fn find_all(&self, schema: &Arc<Schema>, query: FindAll) -> Result<Vec<Record>> {
        self.check_flavor(schema)?;

        let (sql, args) = query.apply(schema.select());
        let rows = self.run_query(&sql, args, None).await?;

        rows.into_iter()
            .map(|row| Record::from_row(schema, row))
            .collect()
    }

    /// Evaluate a numeric expression such as `count(*)` over the table.
    ///
    /// Returns `None` when no row comes back or the result is null.
    pub async fn find_number(
        &self,
        schema: &Arc<Schema>,
        expr: &str,
        filter: Option<Filter>,
    ) -> Result<Option<i64>> {
        self.check_flavor(schema)?;

        let template = Serializer::new(schema.flavor()).serialize(&Statement::select_expr(
            schema.table_name(),
            expr,
            NUMBER_ALIAS,
        ));

        let query = match filter {
            Some(filter) => FindAll::new().filter(filter),
            None => FindAll::new(),
        };
        let (sql, args) = query.apply(&template);

        let Some(mut row) = self.run_query(&sql, args, Some(1)).await?.into_iter().next() else {
            return Ok(None);
        };

        let value = match row.take(NUMBER_ALIAS) {
            Some(value) => value,
            None => row
                .get_index(0)
                .map(|(_, value)| value.clone())
                .unwrap_or_default(),
        };

        if value.is_null() {
            return Ok(None);
        }

        value.to_i64().map(Some)
    }

    /// Templates quote identifiers for the flavor they were compiled for; they
    /// cannot run against a database of another flavor.
    pub(crate) fn check_flavor(&self, schema: &Schema) -> Result<()> {
        if schema.flavor() != self.flavor() {
            return Err(Error::invalid_schema(format!(
                "model `{}` was compiled for {} but the database is {}",
                schema.name(),
                schema.flavor(),
                self.flavor()
            )));
        }

        Ok(())
    }

    /// Check the argument count and rewrite the template's placeholders for
    /// the driver.
    fn prepare(&self, template: &str, args: &[Value]) -> Result<String> {
        let serializer = Serializer::new(self.flavor());

        let expected = serializer.placeholder_count(template);
        if expected != args.len() {
            return Err(Error::invalid_statement(format!(
                "expected {expected} arguments, got {}; sql={template}",
                args.len()
            )));
        }

        Ok(serializer.substitute(template))
    }
}

impl From<Pool> for Db {
    fn from(pool: Pool) -> Db {
        Db {
            pool: Arc::new(pool),
        }
    }
}
