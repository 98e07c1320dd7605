use thiserror::Error;

/// Errors from report rendering and writing.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Template compilation or rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Creating the report directory or writing the document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
