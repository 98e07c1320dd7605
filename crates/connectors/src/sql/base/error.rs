use thiserror::Error;

/// All errors coming from the query layer.
///
/// The `Sql` variant is transparent: its display text is embedded verbatim
/// in the report behind the `Error: ` prefix, so the driver message
/// (`ORA-00942: ...`) must come through unwrapped.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any Oracle driver error.
    #[error("{0}")]
    Sql(#[from] oracle::Error),

    /// The blocking query task was cancelled or panicked.
    #[error("Query task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// The session mutex was poisoned by a panicking caller.
    #[error("Session lock poisoned")]
    Poisoned,

    /// Error text reported by an adapter outside the driver type.
    #[error("{0}")]
    Adapter(String),
}

/// Errors happening during session setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The Oracle driver failed to authenticate or reach the instance.
    #[error("Oracle connection failed: {0}")]
    Oracle(#[from] oracle::Error),

    /// The blocking connect task was cancelled or panicked.
    #[error("Connect task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
