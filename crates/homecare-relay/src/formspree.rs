//! Formspree Relay
//!
//! Implementation of `FormRelay` over `reqwest`. Runs unchanged on `wasm32`,
//! where `reqwest` delegates to the browser's `fetch`.

use async_trait::async_trait;
use homecare_core::{FormRelay, IntakeError, RelayReply, Result};
use reqwest::header::ACCEPT;

/// Form relay backed by an HTTP client
#[derive(Clone, Debug, Default)]
pub struct FormspreeRelay {
    client: reqwest::Client,
}

impl FormspreeRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, custom TLS)
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl FormRelay for FormspreeRelay {
    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<RelayReply> {
        let response = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Form relay unreachable: {}", e);
                IntakeError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();

        // An unreadable body only matters for rejections, where it degrades
        // to the generic message.
        let body = response.text().await.unwrap_or_default();

        Ok(RelayReply { status, body })
    }
}
