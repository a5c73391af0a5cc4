use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::BitqueryError;
use crate::query::{EventsQuery, GraphQlRequest};
use crate::types::{EvmData, EvmEvent, GraphQlResponse};

const SAMPLE_LEN: usize = 512;

/// Thin GraphQL-over-HTTPS client authenticated with a bearer token.
///
/// One POST per call. Timeouts and proxies are whatever the supplied
/// [`reqwest::Client`] was built with.
#[derive(Clone)]
pub struct BitqueryClient {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl std::fmt::Debug for BitqueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitqueryClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl BitqueryClient {
    pub fn new(endpoint: Url, token: impl Into<String>) -> Self {
        Self::with_http(HttpClient::new(), endpoint, token)
    }

    pub fn with_http(http: HttpClient, endpoint: Url, token: impl Into<String>) -> Self {
        Self {
            http,
            endpoint,
            token: token.into(),
        }
    }

    /// POST a request and decode `data` into `T`.
    pub async fn query<T: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<T, BitqueryError> {
        let res = self
            .http
            .post(self.endpoint.as_str())
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;
        let status = res.status();
        let bytes = res.bytes().await?;

        if !status.is_success() {
            return Err(BitqueryError::Status {
                status,
                sample: sample(&bytes),
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_slice(&bytes).map_err(|source| {
            BitqueryError::Decode {
                source,
                sample: sample(&bytes),
            }
        })?;

        if !envelope.errors.is_empty() {
            return Err(BitqueryError::GraphQl(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        envelope.data.ok_or(BitqueryError::MissingData)
    }

    /// Run an [`EventsQuery`] and return the events in the order Bitquery sent them.
    pub async fn evm_events(&self, query: &EventsQuery) -> Result<Vec<EvmEvent>, BitqueryError> {
        let data: EvmData = self.query(&query.to_request()).await?;
        Ok(data.evm.events)
    }
}

fn sample(bytes: &[u8]) -> String {
    let mut s = String::from_utf8_lossy(bytes).to_string();
    if s.len() > SAMPLE_LEN {
        let mut cut = SAMPLE_LEN;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}
