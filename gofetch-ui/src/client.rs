use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use gofetch_api::limits::{check_declared, CappedBody, MAX_RESPONSE_BYTES};
use gofetch_api::response::parse_body;
use gofetch_api::{SearchRequest, SearchResponse};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    TooLarge(#[from] gofetch_api::limits::LimitError),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type SearchResult = Result<Option<SearchResponse>, ClientError>;
pub type SearchFuture<'a> = Pin<Box<dyn Future<Output = SearchResult> + Send + 'a>>;

/// The backend the controller queries. `Ok(None)` is a JSON `null` body.
pub trait SearchApi: Send + Sync {
    fn search<'a>(&'a self, req: &'a SearchRequest) -> SearchFuture<'a>;
}

/// `SearchApi` over HTTP: one GET per call, no retries.
#[derive(Clone)]
pub struct HttpSearchApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpSearchApi {
    pub fn new(base: Url, req_timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(req_timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for a request, keeping any path prefix on the base.
    pub fn request_url(&self, req: &SearchRequest) -> Result<Url, ClientError> {
        let base = self.base.as_str().trim_end_matches('/');
        let raw = format!("{}{}", base, req.path_and_query());
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }

    async fn fetch(&self, req: &SearchRequest) -> SearchResult {
        let url = self.request_url(req)?;
        debug!(%url, "search request");
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        if let Some(len) = resp.content_length() {
            check_declared(len, MAX_RESPONSE_BYTES)?;
        }
        let body = read_capped(resp).await?;
        Ok(parse_body(&body)?)
    }
}

impl SearchApi for HttpSearchApi {
    fn search<'a>(&'a self, req: &'a SearchRequest) -> SearchFuture<'a> {
        Box::pin(self.fetch(req))
    }
}

async fn read_capped(mut resp: reqwest::Response) -> Result<Vec<u8>, ClientError> {
    let mut body = CappedBody::default();
    while let Some(chunk) = resp.chunk().await.map_err(map_transport)? {
        body.extend(&chunk)?;
    }
    Ok(body.into_inner())
}

fn map_transport(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(err.to_string())
    }
}
