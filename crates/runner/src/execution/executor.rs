use connectors::sql::base::adapter::SqlAdapter;
use model::records::{
    check::CheckDescriptor,
    outcome::{CheckOutput, CheckResult},
};
use tracing::{info, warn};

/// Runs every catalog check in order against one session.
///
/// Infallible by construction: a failing query degrades to an `Error` output
/// for that check alone and the run moves on to the next one. No retries, no
/// partial persistence between checks. The returned vector has exactly one
/// entry per descriptor, in catalog order.
pub async fn run<A>(adapter: &A, checks: &[CheckDescriptor]) -> Vec<CheckResult>
where
    A: SqlAdapter + Sync + ?Sized,
{
    let total = checks.len();
    let mut results = Vec::with_capacity(total);

    for (idx, check) in checks.iter().enumerate() {
        info!(
            "Running check {}/{}: {} ({})",
            idx + 1,
            total,
            check.id,
            check.description
        );

        let output = match adapter.fetch_all(&check.query).await {
            Ok(rows) => CheckOutput::rows(rows),
            Err(err) => {
                warn!("Check {} failed: {err}", check.id);
                CheckOutput::error(err)
            }
        };

        results.push(CheckResult::new(check, output));
    }

    info!("Audit run completed: {total} checks executed");
    results
}
