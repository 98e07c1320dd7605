use crate::sql::base::error::{ConnectorError, DbError};
use async_trait::async_trait;
use model::{execution::connection::ConnectionDescriptor, records::outcome::AuditRow};

/// The session seam between the audit runner and a concrete driver.
///
/// One session, one caller: the runner executes checks strictly sequentially
/// and reuses the same underlying connection for all of them.
#[async_trait]
pub trait SqlAdapter {
    /// Opens one authenticated session for the descriptor.
    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectorError>
    where
        Self: Sized;

    /// Runs one read-only query and fetches every row into memory, already
    /// stringified. No timeout, no pagination; the catalog bounds output.
    async fn fetch_all(&self, query: &str) -> Result<Vec<AuditRow>, DbError>;

    /// Releases the session. Called exactly once after the full run,
    /// regardless of per-check outcomes.
    async fn close(&self) -> Result<(), DbError>;
}
