//! ILS proxy client.
//!
//! One POST per call against `<base-url>/<ActionName>` with a JSON payload.
//! Non-2xx statuses, malformed bodies, and network failures each map to
//! their own [`ProxyError`] variant; nothing is retried. Failures are
//! reported to the tracing sink and surfaced to the caller.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error};

use crate::registry::ActionName;

/// Proxy endpoint the original deployment pointed at.
pub const DEFAULT_PROXY_URL: &str = "https://192.168.1.14:3001/api/ils/";

/// Where the proxy lives. Injected into the transport at construction,
/// never a module-level global.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub base_url: String,
    /// The local proxy usually runs with a self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROXY_URL.to_string(),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Proxy answered outside the 2xx range.
    #[error("HTTP error {status}")]
    Http { status: reqwest::StatusCode },
    /// Response body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// One service-reported business fault. Faults ride inside an otherwise
/// successful response; they are data, not exceptions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Fault {
    #[serde(rename = "Message")]
    pub message: String,
    /// Extra diagnostic fields the service may attach.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `Faults` arrives either as a single object or as a list; views always
/// see an ordered slice.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FaultList {
    One(Fault),
    Many(Vec<Fault>),
}

impl FaultList {
    pub fn as_slice(&self) -> &[Fault] {
        match self {
            FaultList::One(fault) => std::slice::from_ref(fault),
            FaultList::Many(faults) => faults,
        }
    }
}

/// Decoded proxy response.
///
/// Body and faults are mutually informative, not mutually exclusive: a
/// response may carry faults alongside a usable body, or either alone.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    #[serde(rename = "Body", default)]
    pub body: Value,
    #[serde(rename = "Faults", default)]
    pub faults: Option<FaultList>,
}

/// HTTP client bound to one proxy configuration.
pub struct ProxyTransport {
    client: reqwest::Client,
    config: ProxyConfig,
}

impl ProxyTransport {
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { client, config })
    }

    /// Endpoint for one action: the base URL with the action name appended.
    pub fn action_url(&self, action: ActionName) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            action.as_str()
        )
    }

    /// POST the payload to the action's endpoint and decode the envelope.
    pub async fn send(
        &self,
        action: ActionName,
        payload: &Map<String, Value>,
    ) -> Result<ResponseEnvelope, ProxyError> {
        let result = self.send_inner(action, payload).await;
        if let Err(err) = &result {
            error!(action = action.as_str(), error = %err, "ILS proxy call failed");
        }
        result
    }

    async fn send_inner(
        &self,
        action: ActionName,
        payload: &Map<String, Value>,
    ) -> Result<ResponseEnvelope, ProxyError> {
        let url = self.action_url(action);
        debug!(%url, "calling ILS proxy");

        // `.json` sets Content-Type: application/json.
        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Http { status });
        }

        let text = response.text().await?;
        let envelope = serde_json::from_str(&text)?;
        Ok(envelope)
    }
}
