use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub event_id: Uuid,
    pub group_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptor {
    pub id: String,
    pub name: String,
    pub invite_link: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub event_id: Uuid,
    pub phone: String,
    pub amount: f64,
    pub concept: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollRequest {
    pub question: String,
    pub options: Vec<String>,
}

/// Bearer-authenticated pass-through client for the WhatsApp messaging
/// backend. Provider responses for payments and polls are opaque; they are
/// returned as raw JSON.
#[derive(Clone)]
pub struct WhatsappClient {
    client: Client,
    base_url: String,
    token: String,
}

impl WhatsappClient {
    pub fn new(config: &ServiceConfig, token: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.messaging_base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub async fn create_group(
        &self,
        request: &CreateGroupRequest,
    ) -> Result<GroupDescriptor, ServiceError> {
        let url = format!("{}/groups", self.base_url);
        info!(
            "Creating group '{}' for event {}",
            request.group_name, request.event_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                context: "createGroup",
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            let group = response.json::<GroupDescriptor>().await.map_err(|source| {
                ServiceError::Transport {
                    context: "createGroup",
                    source,
                }
            })?;
            info!("Group created: {} ({})", group.name, group.id);
            Ok(group)
        } else {
            Err(Self::status_error("createGroup", status, response).await)
        }
    }

    pub async fn send_payment_request(
        &self,
        request: &PaymentRequest,
    ) -> Result<Value, ServiceError> {
        let url = format!("{}/payments", self.base_url);
        info!(
            "Requesting {} from {} for event {}",
            request.amount, request.phone, request.event_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                context: "sendPaymentRequest",
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Value>()
                .await
                .map_err(|source| ServiceError::Transport {
                    context: "sendPaymentRequest",
                    source,
                })
        } else {
            Err(Self::status_error("sendPaymentRequest", status, response).await)
        }
    }

    pub async fn send_poll(&self, request: &PollRequest) -> Result<Value, ServiceError> {
        let url = format!("{}/polls", self.base_url);
        info!(
            "Sending poll '{}' with {} options",
            request.question,
            request.options.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                context: "sendPoll",
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Value>()
                .await
                .map_err(|source| ServiceError::Transport {
                    context: "sendPoll",
                    source,
                })
        } else {
            Err(Self::status_error("sendPoll", status, response).await)
        }
    }

    async fn status_error(
        context: &'static str,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ServiceError {
        let message = response.text().await.unwrap_or_default();
        warn!("{} failed with status {}: {}", context, status, message);
        ServiceError::Status {
            context,
            status: status.as_u16(),
            message,
        }
    }
}
