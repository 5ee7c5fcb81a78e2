use ormlet::{
    driver::{Driver, Sqlite},
    Flavor,
};

use crate::Setup;

/// A private in-memory database per test.
pub struct SetupSqlite;

impl Setup for SetupSqlite {
    fn driver(&self) -> Box<dyn Driver> {
        Box::new(Sqlite::in_memory())
    }

    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }
}
