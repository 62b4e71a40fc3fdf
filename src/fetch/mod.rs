//! HTTP retrieval of remote datasets.
//!
//! Sources starting with `http://` or `https://` are downloaded through an
//! [`HttpClient`]; everything else is read from disk by the pipeline.

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Request, Response};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Upper bound on a whole dataset download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Transport seam for dataset downloads.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// `reqwest` client identifying itself as this tool, with a download
/// timeout and gzip transfer decoding.
pub struct DatasetClient(reqwest::Client);

impl DatasetClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for DatasetClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Issues a `GET` for `url` through `client` and returns the response body.
///
/// # Errors
///
/// Fails on an unparseable URL, a transport error, or a non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Bytes> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    let body = resp.bytes().await?;
    debug!(url, bytes = body.len(), "Fetched remote dataset");
    Ok(body)
}

/// Returns `true` when `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
