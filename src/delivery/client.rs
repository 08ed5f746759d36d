use anyhow::Result;
use serde_json::Value;

use super::protocol::DeliveryReceipt;
use crate::contact::types::ContactMessage;

/// Posts accepted contact messages to the upstream endpoint.
///
/// Wraps one shared `reqwest::Client`; the service constructs a single
/// instance at startup and hands it to the handlers behind an `Arc`.
pub struct DeliveryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DeliveryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Relays one message upstream. Issues exactly one POST per call; there
    /// is no retry.
    ///
    /// A non-2xx status or an explicit `success: false` in the reply body is
    /// an error. Any other 2xx reply counts as delivered, including replies
    /// whose body is not JSON.
    pub async fn deliver(&self, msg: &ContactMessage) -> Result<DeliveryReceipt> {
        let response = self.client.post(&self.endpoint).json(msg).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("Contact POST failed {}", status));
        }

        let body = response.json::<Value>().await.ok();
        let flag = body
            .as_ref()
            .and_then(|b| b.get("success"))
            .and_then(Value::as_bool);
        if flag == Some(false) {
            tracing::warn!("Upstream accepted the POST but reported success=false");
            return Err(anyhow::anyhow!("Upstream rejected contact message"));
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
