use crate::{PracticumError, PracticumResult, ReviewApi};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub struct PracticumClient {
    endpoint: String,
    token: String,
    client: Client,
    timeout: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct PracticumClientOptions {
    pub token: String,
    pub endpoint: Option<String>,
    /// Upper bound for each request, applied on top of `client`. No timeout
    /// when `None`.
    pub timeout: Option<Duration>,
    pub client: Option<Client>,
}

impl PracticumClient {
    /// # Errors
    ///
    /// [`PracticumError::Transport`] when the default HTTP client cannot be
    /// built.
    pub fn new(options: PracticumClientOptions) -> PracticumResult<Self> {
        let PracticumClientOptions {
            token,
            endpoint,
            timeout,
            client,
        } = options;

        let client = match client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token,
            client,
            timeout,
        })
    }

    fn request_headers(&self) -> PracticumResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth_header =
            HeaderValue::from_str(&format!("OAuth {}", self.token)).map_err(|error| {
                PracticumError::InvalidInput(format!(
                    "Invalid Practicum token header value: {error}"
                ))
            })?;
        auth_header.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_header);

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ReviewApi for PracticumClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn homework_statuses(&self, from_date: i64) -> PracticumResult<Value> {
        if from_date < 0 {
            return Err(PracticumError::InvalidInput(format!(
                "from_date must be a non-negative Unix timestamp, got {from_date}"
            )));
        }

        debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let mut request = self
            .client
            .get(&self.endpoint)
            .headers(self.request_headers()?)
            .query(&[("from_date", from_date)]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PracticumError::StatusCode(
                status,
                response.text().await.unwrap_or_default(),
            ));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|error| PracticumError::Schema(format!("response body is not JSON: {error}")))
    }
}
