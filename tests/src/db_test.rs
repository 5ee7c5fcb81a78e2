use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};
use ormlet::{Db, Flavor, PoolConfig, Schema};
use ormlet_sql::Serializer;
use std::sync::{Arc, Mutex};

/// Wraps one test run: owns the runtime, the backend and the log of every
/// operation sent to the database.
pub struct DbTest {
    runtime: Option<tokio::runtime::Runtime>,
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    /// Create a new DbTest with a current-thread runtime.
    pub fn new(setup: impl Setup) -> Self {
        crate::init_tracing();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime: Some(runtime),
            setup: Box::new(setup),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Run the test body on the test's runtime.
    pub fn run<F, Fut>(mut self, test_fn: F)
    where
        F: FnOnce(DbTest) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let runtime = self.runtime.take().expect("runtime already consumed");
        runtime.block_on(test_fn(self));
    }

    pub fn flavor(&self) -> Flavor {
        self.setup.flavor()
    }

    /// Connect with the default pool configuration.
    pub async fn setup_db(&mut self) -> Db {
        self.try_setup_db(PoolConfig::default()).await.unwrap()
    }

    /// Connect through a logging driver. Every operation the returned handle
    /// runs shows up in [`DbTest::log`].
    pub async fn try_setup_db(&mut self, config: PoolConfig) -> ormlet::Result<Db> {
        let driver = LoggingDriver::new(self.setup.driver());
        self.ops_log = driver.ops_log_handle();

        Db::new(driver, config).await
    }

    /// Compile a schema for this backend and create its table, dropping any
    /// previous one. The log is cleared afterwards.
    pub async fn create_table(&mut self, db: &Db, builder: &mut ormlet::schema::Builder) -> Arc<Schema> {
        let schema = builder.flavor(self.flavor()).build().unwrap();
        let serializer = Serializer::new(self.flavor());

        let table = serializer.quote(schema.table_name());
        let columns = schema
            .mapping()
            .iter()
            .map(|(attr, field)| {
                let column = serializer.quote(field.column_name().unwrap_or(attr));
                if field.is_primary_key() {
                    format!("{column} {} primary key", field.column_type())
                } else {
                    format!("{column} {}", field.column_type())
                }
            })
            .collect::<Vec<_>>();

        db.run_mutation(&format!("drop table if exists {table}"), vec![])
            .await
            .unwrap();
        db.run_mutation(
            &format!("create table {table} ({})", columns.join(", ")),
            vec![],
        )
        .await
        .unwrap();

        self.log().clear();
        schema
    }

    pub fn log(&mut self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}
