mod config;
pub use config::Config;

pub mod db;
pub use db::{Db, Pool, PoolConfig};

pub mod find;
pub use find::{Filter, FindAll};

mod record;
pub use record::Record;

pub mod schema;
pub use schema::{Field, FieldDefault, FieldTy, Schema};

pub mod driver {
    pub use ormlet_core::driver::*;

    #[cfg(feature = "mysql")]
    pub use ormlet_driver_mysql::{ConnectOptions, MySQL};

    #[cfg(feature = "sqlite")]
    pub use ormlet_driver_sqlite::Sqlite;
}

pub use ormlet_core::{
    stmt::{Row, Value},
    Error, Result,
};
pub use ormlet_sql::{Flavor, Limit};
