use crate::{error::ReportError, html};
use chrono::{DateTime, Local};
use model::records::outcome::CheckResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory the report lands in, relative to the working directory.
pub const REPORT_DIR: &str = "cis_html_reports";

/// Timestamped file name within the report directory.
pub fn report_path(base_dir: &Path, generated_at: DateTime<Local>) -> PathBuf {
    base_dir.join(format!(
        "oracle_cis_report_{}.html",
        generated_at.format("%Y%m%d_%H%M%S")
    ))
}

/// Renders the report fully in memory, then writes it in one call.
///
/// The directory is created if absent. A render failure writes nothing, not
/// even the directory.
pub async fn write_report(
    results: &[CheckResult],
    base_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    let document = html::render(results, generated_at)?;

    tokio::fs::create_dir_all(base_dir).await?;
    let path = report_path(base_dir, generated_at);
    tokio::fs::write(&path, document).await?;

    info!("Report written to {}", path.display());
    Ok(path)
}
