//! Database access for Ecoleta services.
//!
//! [`Db`] owns the `SeaORM` connection pool. Reads go through [`Db::conn`];
//! writes that must land together go through [`Db::in_transaction`], which
//! commits when the callback returns `Ok` and rolls back on every other exit
//! path, including early returns via `?`.

mod config;
mod error;
mod tx_error;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    TransactionError, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

pub use config::DbConfig;
pub use error::DbError;
pub use tx_error::{InfraError, TxError};

/// Anything repositories can run statements against: the pooled connection
/// or an open transaction.
pub trait DbRunner: ConnectionTrait + Send + Sync {}

impl<T: ConnectionTrait + Send + Sync> DbRunner for T {}

/// Boxed future returned by transaction callbacks.
pub type TxFuture<'c, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>;

#[derive(Clone, Debug)]
pub struct Db {
    conn: DatabaseConnection,
}

impl Db {
    /// Open a connection pool for the configured DSN.
    ///
    /// # Errors
    /// Returns [`DbError::Connect`] if the database is unreachable or the DSN is invalid.
    pub async fn connect(cfg: &DbConfig) -> Result<Self, DbError> {
        let mut opts = ConnectOptions::new(cfg.dsn.clone());
        opts.sqlx_logging(false);

        if let Some(max) = cfg.max_conns {
            opts.max_connections(max);
        }
        // An in-memory SQLite database lives exactly as long as its connection.
        if cfg.is_in_memory() {
            opts.max_connections(1)
                .min_connections(1)
                .max_lifetime(Duration::from_secs(u64::from(u32::MAX)));
        }

        tracing::debug!(dsn = %cfg.redacted_dsn(), "Connecting to database");
        let conn = Database::connect(opts).await.map_err(DbError::Connect)?;
        tracing::info!(backend = ?conn.get_database_backend(), "Database connected");

        Ok(Self { conn })
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending migrations of `M`.
    ///
    /// # Errors
    /// Returns [`DbError::Migration`] if any migration fails.
    pub async fn run_migrations<M: MigratorTrait>(&self) -> Result<(), DbError> {
        M::up(&self.conn, None).await.map_err(DbError::Migration)?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Run `f` inside a single transaction.
    ///
    /// The transaction commits only if `f` returns `Ok`. A domain error from
    /// `f` comes back as [`TxError::Domain`] after rollback; failures to
    /// begin or commit come back as [`TxError::Infra`].
    ///
    /// # Errors
    /// See above.
    pub async fn in_transaction<F, T, E>(&self, f: F) -> Result<T, TxError<E>>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxFuture<'c, T, E> + Send,
        T: Send + 'static,
        E: std::fmt::Display + std::fmt::Debug + Send + 'static,
    {
        self.conn.transaction(f).await.map_err(|e| match e {
            TransactionError::Connection(db) => {
                tracing::error!(error = %db, "Transaction failed at the database layer");
                TxError::Infra(InfraError::new(db.to_string()))
            }
            TransactionError::Transaction(domain) => {
                tracing::debug!(error = %domain, "Transaction rolled back");
                TxError::Domain(domain)
            }
        })
    }
}
