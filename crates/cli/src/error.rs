use connectors::sql::base::error::{ConnectorError, DbError};
use report::error::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read audit input: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Connection error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Failed to write the audit report: {0}")]
    Report(#[from] ReportError),
}
