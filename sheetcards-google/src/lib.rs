//! Google Sheets and Google Docs over their REST APIs.
//!
//! Authentication is a ready-made OAuth bearer token (for example the output
//! of `gcloud auth print-access-token`); obtaining one is left to the caller.

use reqwest::{Client, Response, Url};
use sheetcards_core::CoreError;
use std::fmt;
use std::time::Duration;

pub mod a1;
pub mod docs;
pub mod sheets;

pub use docs::{DocsClient, DocumentFile};
pub use sheets::SheetsTable;

pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/";
pub const DOCS_API_URL: &str = "https://docs.googleapis.com/";

const USER_AGENT_VALUE: &str = concat!("sheetcards/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

fn http_client() -> Result<Client, CoreError> {
    Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| CoreError::RemoteRead(format!("failed to create HTTP client: {e}")))
}

fn parse_base(base: &str) -> Result<Url, CoreError> {
    let url = Url::parse(base).map_err(|_| CoreError::ConfigurationMissing("valid Google API base URL"))?;
    if url.cannot_be_a_base() {
        return Err(CoreError::ConfigurationMissing("valid Google API base URL"));
    }
    Ok(url)
}

fn join_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Turns a non-2xx response into `kind(status: body)`.
async fn check_status(resp: Response, kind: fn(String) -> CoreError) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(%status, "google api request failed");
    Err(kind(format!("{status}: {}", body.trim())))
}
