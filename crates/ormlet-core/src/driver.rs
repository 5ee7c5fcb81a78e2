mod flavor;
pub use flavor::Flavor;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// Opens connections to one database.
///
/// A driver is handed to the connection pool once at startup; the pool calls
/// [`Driver::connect`] whenever it needs another connection.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect spoken by connections from this driver.
    fn flavor(&self) -> Flavor;

    /// Open a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on concurrently open connections, if the driver has one.
    ///
    /// An in-memory SQLite database only exists inside a single connection,
    /// so that driver caps the pool at one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single open database connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute an operation. The statement text in the operation already uses
    /// the driver's native placeholder syntax.
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
