//! Outbound waitlist transport.
//!
//! The collection endpoint is a third-party script reached cross-origin
//! without CORS negotiation, so the response is opaque: neither status nor
//! body can be read. Dispatch completing is the only signal available, and
//! nothing here inspects the response.

use thiserror::Error;
use tracing::debug;

use super::subscription::WaitlistEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be constructed locally.
    #[error("unable to build waitlist request: {0}")]
    Build(String),
    /// The request was built but could not be sent.
    #[error("waitlist request was not dispatched: {0}")]
    Dispatch(String),
}

/// Sink for waitlist entries.
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    /// Send one entry. At most one attempt; no retries.
    async fn send(&self, entry: &WaitlistEntry) -> Result<(), TransportError>;
}

/// POSTs entries as JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    pub endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

pub(crate) fn encode(entry: &WaitlistEntry) -> Result<String, TransportError> {
    serde_json::to_string(entry).map_err(|err| TransportError::Build(err.to_string()))
}

impl WaitlistTransport for HttpTransport {
    async fn send(&self, entry: &WaitlistEntry) -> Result<(), TransportError> {
        let body = encode(entry)?;
        debug!(endpoint = %self.endpoint, "posting waitlist entry");

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestMode;

            Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .mode(RequestMode::NoCors)
                .body(body)
                .send()
                .await
                .map(|_opaque| ())
                .map_err(|err| TransportError::Dispatch(err.to_string()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use reqwest::header::CONTENT_TYPE;

            let client = reqwest::Client::new();
            match client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
            {
                Ok(_opaque) => Ok(()),
                Err(err) if err.is_builder() => Err(TransportError::Build(err.to_string())),
                Err(err) => Err(TransportError::Dispatch(err.to_string())),
            }
        }
    }
}
