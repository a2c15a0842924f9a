//! `reqwest` transport shared by the employee and attendance endpoints.

use crate::error::{ApiError, ErrorBody};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for one HRM backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` must end with `/`; see [`crate::config::parse_base_url`].
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Url(e.to_string()))
    }

    /// Start a request tagged with a fresh request id.
    pub(crate) fn request(&self, method: Method, url: Url) -> (RequestBuilder, String) {
        let request_id = Uuid::new_v4().to_string();
        debug!(%method, %url, request_id = %request_id, "Sending request");
        let builder = self
            .client
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id.as_str());
        (builder, request_id)
    }

    /// Turn a non-2xx response into [`ApiError::Rejected`] carrying the parsed body.
    pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %raw, "Backend rejected request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            body: ErrorBody::parse(&raw),
        })
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
