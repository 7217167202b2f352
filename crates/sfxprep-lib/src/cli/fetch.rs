use crate::cli::FetchParams;
use crate::download::{ProvisionReport, provision_all};
use crate::error::SfxPrepError;
use crate::report::Reporter;

/// Runs the provisioning loop with progress printed to stdout. Individual
/// asset failures are part of the returned report, not an error.
pub async fn run_fetch(params: FetchParams) -> Result<ProvisionReport, SfxPrepError> {
    let FetchParams {
        request,
        manual_sources,
    } = params;

    let mut reporter = Reporter::stdout(manual_sources);
    let report = provision_all(request, &mut reporter).await?;

    if !report.is_complete() {
        tracing::warn!(
            "{} of {} assets could not be downloaded",
            report.failed().count(),
            report.outcomes.len()
        );
    }
    Ok(report)
}
