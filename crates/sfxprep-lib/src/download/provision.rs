use super::fetch::{build_http_client, fetch_candidate};
use super::types::{AssetOutcome, FailedAttempt, ProvisionReport, ProvisionRequest};
use crate::config::Asset;
use crate::error::SfxPrepError;
use crate::report::Reporter;
use reqwest::Client;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Tries each candidate URL of `asset` in order and stops at the first one
/// that yields a non-empty file. Failed attempts are collected, never raised.
pub async fn provision_asset<W: Write>(
    client: &Client,
    asset: &Asset,
    output_dir: &Path,
    reporter: &mut Reporter<W>,
) -> Result<AssetOutcome, SfxPrepError> {
    reporter.asset_started(asset)?;
    let output_path = output_dir.join(&asset.name);

    let mut attempts = Vec::new();
    for url in &asset.urls {
        debug!(asset = %asset.name, url = %url, "Trying candidate");

        match fetch_candidate(client, url, &output_path).await {
            Ok(size) => {
                info!(asset = %asset.name, url = %url, output = %output_path.display(), size, "Downloaded");
                reporter.asset_downloaded(asset, size)?;
                return Ok(AssetOutcome::Downloaded {
                    name: asset.name.clone(),
                    path: output_path,
                    url: url.clone(),
                    size,
                });
            }
            Err(error) => {
                debug!(asset = %asset.name, url = %url, "Candidate failed: {}", error);
                attempts.push(FailedAttempt {
                    url: url.clone(),
                    error,
                });
            }
        }
    }

    warn!(asset = %asset.name, attempts = attempts.len(), "All candidate URLs failed");
    reporter.asset_failed(asset, &attempts)?;
    Ok(AssetOutcome::Failed {
        name: asset.name.clone(),
        attempts,
    })
}

/// Runs the whole provisioning pass: one asset at a time, in declaration
/// order. Only process-level problems (output directory, HTTP client,
/// console) are returned as errors; failed assets end up in the report.
pub async fn provision_all<W: Write>(
    request: ProvisionRequest,
    reporter: &mut Reporter<W>,
) -> Result<ProvisionReport, SfxPrepError> {
    let ProvisionRequest {
        assets,
        output_dir,
        http,
    } = request;

    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(|e| SfxPrepError::OutputDirectoryCreation {
            path: output_dir.clone(),
            reason: e.to_string(),
        })?;

    let client = build_http_client(&http)?;

    info!(output = %output_dir.display(), assets = assets.len(), "Provisioning assets");
    reporter.start(&output_dir, assets.len())?;

    let mut report = ProvisionReport::default();
    for asset in &assets {
        let outcome = provision_asset(&client, asset, &output_dir, reporter).await?;
        report.outcomes.push(outcome);
    }

    reporter.finish(&report, &assets)?;
    info!(
        downloaded = report.succeeded().count(),
        failed = report.failed().count(),
        "Provisioning finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetDescriptor, HttpConfig, builtin_manual_sources};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn asset(name: &str, urls: Vec<String>) -> Asset {
        AssetDescriptor {
            name: name.to_string(),
            description: format!("{name} sound"),
            urls,
            search_keywords: vec!["test".to_string()],
        }
        .resolve()
        .unwrap()
    }

    #[tokio::test]
    async fn test_provision_asset_falls_back_to_next_mirror() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/primary/win.mp3"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/secondary/win.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 512]))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tertiary/win.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![2u8; 512]))
            .expect(0)
            .mount(&server)
            .await;

        let asset = asset(
            "win.mp3",
            vec![
                format!("{}/primary/win.mp3", server.uri()),
                format!("{}/secondary/win.mp3", server.uri()),
                format!("{}/tertiary/win.mp3", server.uri()),
            ],
        );
        let dir = tempfile::tempdir().unwrap();
        let client = build_http_client(&HttpConfig::default()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), builtin_manual_sources());

        let outcome = provision_asset(&client, &asset, dir.path(), &mut reporter)
            .await
            .unwrap();

        match outcome {
            AssetOutcome::Downloaded { url, size, path, .. } => {
                assert!(url.path().starts_with("/secondary/"));
                assert_eq!(size, 512);
                assert_eq!(std::fs::read(path).unwrap(), vec![1u8; 512]);
            }
            other => panic!("expected download, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_provision_asset_collects_every_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let asset = asset(
            "confetti.mp3",
            vec![
                format!("{}/a/confetti.mp3", server.uri()),
                format!("{}/b/confetti.mp3", server.uri()),
            ],
        );
        let dir = tempfile::tempdir().unwrap();
        let client = build_http_client(&HttpConfig::default()).unwrap();
        let mut reporter = Reporter::new(Vec::new(), builtin_manual_sources());

        let outcome = provision_asset(&client, &asset, dir.path(), &mut reporter)
            .await
            .unwrap();

        match outcome {
            AssetOutcome::Failed { name, attempts } => {
                assert_eq!(name, "confetti.mp3");
                assert_eq!(attempts.len(), 2);
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(!dir.path().join("confetti.mp3").exists());

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("[X] Failed to download confetti.mp3"));
    }

    #[tokio::test]
    async fn test_provision_all_fails_when_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("sfx");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let request = ProvisionRequest {
            assets: vec![asset("win.mp3", vec!["http://127.0.0.1:9/win.mp3".to_string()])],
            output_dir: blocker,
            http: HttpConfig::default(),
        };
        let mut reporter = Reporter::new(Vec::new(), builtin_manual_sources());

        let result = provision_all(request, &mut reporter).await;

        assert!(matches!(
            result,
            Err(SfxPrepError::OutputDirectoryCreation { .. })
        ));
    }
}
