use crate::sql::{
    base::{
        adapter::SqlAdapter,
        error::{ConnectorError, DbError},
    },
    oracle::row::stringify_row,
};
use async_trait::async_trait;
use model::{execution::connection::ConnectionDescriptor, records::outcome::AuditRow};
use oracle::Connection;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Oracle session over the blocking `oracle` driver.
///
/// The driver is synchronous, so every call hops onto tokio's blocking pool.
/// The runner issues one query at a time; the mutex exists so the connection
/// can cross into blocking tasks, not for concurrent callers.
#[derive(Clone)]
pub struct OracleAdapter {
    conn: Arc<Mutex<Connection>>,
}

#[async_trait]
impl SqlAdapter for OracleAdapter {
    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectorError> {
        let username = descriptor.username.clone();
        let password = descriptor.password.clone();
        let connect_string = descriptor.connect_string();

        debug!("Opening Oracle session to {connect_string} as {username}");
        let conn = tokio::task::spawn_blocking(move || {
            Connection::connect(&username, &password, &connect_string)
        })
        .await??;

        Ok(OracleAdapter {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn fetch_all(&self, query: &str) -> Result<Vec<AuditRow>, DbError> {
        let conn = Arc::clone(&self.conn);
        let query = query.to_string();

        tokio::task::spawn_blocking(move || -> Result<Vec<AuditRow>, DbError> {
            let conn = conn.lock().map_err(|_| DbError::Poisoned)?;
            let rows = conn.query(&query, &[])?;
            let mut fetched = Vec::new();
            for row in rows {
                fetched.push(stringify_row(&row?));
            }
            Ok(fetched)
        })
        .await?
    }

    async fn close(&self) -> Result<(), DbError> {
        let conn = Arc::clone(&self.conn);

        debug!("Closing Oracle session");
        tokio::task::spawn_blocking(move || -> Result<(), DbError> {
            let conn = conn.lock().map_err(|_| DbError::Poisoned)?;
            conn.close()?;
            Ok(())
        })
        .await?
    }
}
