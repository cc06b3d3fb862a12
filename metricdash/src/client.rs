//! HTTP client for the metrics API: one authenticated GET per snapshot.

use std::{fs, io, path::Path};

use reqwest::{header::AUTHORIZATION, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::types::{ApiResponse, Snapshot};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("read TLS CA {path}: {source}")]
    ReadCa {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Why a fetch failed. Only logged; the UI shows a generic message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    url: Url,
    api_key: Option<String>,
}

impl MetricsClient {
    pub fn new(cfg: &Config) -> Result<Self, BuildError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("metricdash/", env!("CARGO_PKG_VERSION")));
        if let Some(path) = cfg.tls_ca.as_deref() {
            builder = builder.add_root_certificate(load_ca(path)?);
        }
        Ok(Self {
            http: builder.build()?,
            url: cfg.metrics_url(),
            api_key: cfg.api_key.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `GET {base}/api/metrics/{host}` with the bearer token; no network call without a key.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let key = self.api_key.as_deref().ok_or(FetchError::MissingCredential)?;
        let resp = self
            .http
            .get(self.url.clone())
            .header(AUTHORIZATION, format!("Bearer {key}"))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        let parsed: ApiResponse = serde_json::from_slice(&body)?;
        Ok(parsed.data)
    }
}

fn load_ca(path: &Path) -> Result<reqwest::Certificate, BuildError> {
    let pem = fs::read(path).map_err(|source| BuildError::ReadCa {
        path: path.display().to_string(),
        source,
    })?;
    Ok(reqwest::Certificate::from_pem(&pem)?)
}
