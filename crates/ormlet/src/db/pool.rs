//! Connection pooling for database connections.

use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

pub use deadpool::Status;
use deadpool::managed::PoolError;
use ormlet_core::{
    driver::{Connection, Driver, Flavor},
    Error, Result,
};
use tracing::info;

/// Configuration for connection pool behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Most connections open at once
    pub max_size: usize,

    /// Connections opened when the pool is created
    pub min_size: usize,

    /// How long [`Pool::get`] waits for a free connection. `None` waits
    /// forever.
    pub wait_timeout: Option<Duration>,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: 10,
            min_size: 1,
            wait_timeout: None,
        }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::invalid_configuration("maxsize must be at least 1"));
        }

        if self.min_size > self.max_size {
            return Err(Error::invalid_configuration(format!(
                "minsize ({}) must not exceed maxsize ({})",
                self.min_size, self.max_size
            )));
        }

        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A connection pool that manages database connections.
#[derive(Debug)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
    flavor: Flavor,
}

impl Pool {
    /// Creates a new connection pool from the given driver and opens
    /// `config.min_size` connections up front.
    pub async fn new(driver: impl Driver, config: PoolConfig) -> Result<Self> {
        config.validate()?;

        let flavor = driver.flavor();
        let max_size = match driver.max_connections() {
            Some(max_connections) => config.max_size.min(max_connections),
            None => config.max_size,
        };
        let min_size = config.min_size.min(max_size);

        let inner = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1)
        .max_size(max_size)
        .wait_timeout(config.wait_timeout)
        .build()
        .map_err(Error::connection_pool)?;

        let mut warm = Vec::with_capacity(min_size);
        for _ in 0..min_size {
            warm.push(inner.get().await.map_err(pool_error)?);
        }
        drop(warm);

        info!(%flavor, max_size, min_size, "create database connection pool");

        Ok(Self { inner, flavor })
    }

    /// Retrieves a connection from the pool, waiting while every connection
    /// is leased.
    pub async fn get(&self) -> Result<PoolConnection> {
        let connection = self.inner.get().await.map_err(pool_error)?;
        Ok(PoolConnection { inner: connection })
    }

    /// SQL dialect of the pooled connections.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn status(&self) -> Status {
        self.inner.status()
    }

    /// Close the pool. Waiting and future calls to [`Pool::get`] fail;
    /// connections are dropped as their leases end.
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Driver errors raised while opening a connection pass through unchanged.
fn pool_error(err: PoolError<Error>) -> Error {
    match err {
        PoolError::Backend(err) => err,
        err => Error::connection_pool(err),
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = Error;

    async fn create(&self) -> Result<Self::Type> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection leased from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl core::fmt::Debug for PoolConnection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PoolConnection").finish_non_exhaustive()
    }
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
