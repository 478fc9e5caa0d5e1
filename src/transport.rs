use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use url::Url;

/// Error reported by a [`Transport`] when the HTTP exchange itself fails
/// (connection refused, TLS failure, timeout, ...).
#[derive(Debug, Clone, Error)]
#[error("transport request failed: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Raw reply from a transport: status code plus the unparsed body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The HTTP capability the client delegates to.
///
/// Implementations own connection handling, TLS and timeouts. The client
/// only needs one GET shape; status filtering and JSON interpretation
/// happen on the client side so a transport can stay dumb.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(
        &self,
        url: Url,
        query: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: Url,
        query: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.http.get(url).query(query);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
