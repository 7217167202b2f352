use crate::config::HttpConfig;
use crate::error::SfxPrepError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("response body is empty")]
    EmptyBody,

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is empty after writing")]
    EmptyFile { path: PathBuf },
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(error)
        }
    }
}

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue, SfxPrepError> {
    HeaderValue::from_str(value).map_err(|e| SfxPrepError::ConfigValidation {
        details: format!("invalid {name} header value {value:?}: {e}"),
    })
}

/// Builds the client shared by every request of a run. The header set and
/// the timeout are fixed for the whole run. The timeout bounds connecting and
/// each individual read, not the whole transfer.
pub fn build_http_client(http: &HttpConfig) -> Result<Client, SfxPrepError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value(&USER_AGENT, &http.user_agent)?);
    headers.insert(ACCEPT, header_value(&ACCEPT, &http.accept)?);
    headers.insert(REFERER, header_value(&REFERER, &http.referer)?);

    let client = Client::builder()
        .default_headers(headers)
        .connect_timeout(http.timeout())
        .read_timeout(http.timeout())
        .build()?;
    Ok(client)
}

/// Fetches one candidate URL into `output_path` and returns the size of the
/// written file.
///
/// The body is received in full before the file is touched, so a failed
/// attempt never truncates an existing file.
pub async fn fetch_candidate(
    client: &Client,
    url: &Url,
    output_path: &Path,
) -> Result<u64, FetchError> {
    tracing::trace!(url = %url, output = %output_path.display(), "Requesting");

    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status));
    }

    let body = response.bytes().await?;
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let write_error = |source: std::io::Error| FetchError::Write {
        path: output_path.to_path_buf(),
        source,
    };
    tokio::fs::write(output_path, &body)
        .await
        .map_err(write_error)?;
    let size = tokio::fs::metadata(output_path)
        .await
        .map_err(write_error)?
        .len();

    if size == 0 {
        return Err(FetchError::EmptyFile {
            path: output_path.to_path_buf(),
        });
    }
    Ok(size)
}
