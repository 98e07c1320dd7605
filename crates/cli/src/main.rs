use crate::error::CliError;
use chrono::Local;
use connectors::sql::{base::adapter::SqlAdapter, oracle::adapter::OracleAdapter};
use report::writer;
use runner::execution::executor;
use std::path::Path;
use tracing::{Level, info, warn};

mod error;
mod prompt;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("Oracle Database CIS Audit");
    let descriptor = prompt::collect_credentials()?;

    info!("Connecting to Oracle at {}", descriptor.connect_string());
    let session = match OracleAdapter::connect(&descriptor).await {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Connection failed: {err}");
            std::process::exit(1);
        }
    };
    info!("Connected.");

    let checks = catalog::builtin_checks();
    let results = executor::run(&session, &checks).await;

    // Closed exactly once, whatever the per-check outcomes were.
    if let Err(err) = session.close().await {
        warn!("Failed to close the Oracle session cleanly: {err}");
    }

    let generated_at = Local::now();
    let path = writer::write_report(&results, Path::new(writer::REPORT_DIR), generated_at).await?;
    println!("Report saved to: {}", path.display());

    Ok(())
}
