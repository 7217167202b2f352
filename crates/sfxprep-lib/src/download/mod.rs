mod fetch;
mod provision;
mod types;

pub use fetch::{FetchError, build_http_client, fetch_candidate};
pub use provision::{provision_all, provision_asset};
pub use types::{AssetOutcome, FailedAttempt, ProvisionReport, ProvisionRequest};
