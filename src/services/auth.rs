use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// Pass-through client for the authentication backend. Each call maps to one
/// request; failures are surfaced once to the caller, never retried.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.auth_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Login surfaces the server's message body on failure so the screen can
    /// show it verbatim.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthToken, ServiceError> {
        let url = format!("{}/auth/login", self.base_url);
        info!("Logging in {} via {}", credentials.email, url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                context: "login",
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            let token =
                response
                    .json::<AuthToken>()
                    .await
                    .map_err(|source| ServiceError::Transport {
                        context: "login",
                        source,
                    })?;
            info!("Login succeeded for {}", credentials.email);
            Ok(token)
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!("Login failed with status {}: {}", status, message);
            Err(ServiceError::Status {
                context: "login",
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Registration reports a generic error on failure; the backend's body is
    /// not passed through to the user.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthToken, ServiceError> {
        let url = format!("{}/auth/register", self.base_url);
        info!("Registering {} via {}", request.email, url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                context: "register",
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            let token =
                response
                    .json::<AuthToken>()
                    .await
                    .map_err(|source| ServiceError::Transport {
                        context: "register",
                        source,
                    })?;
            info!("Registration succeeded for {}", request.email);
            Ok(token)
        } else {
            warn!("Registration failed with status {}", status);
            Err(ServiceError::Status {
                context: "register",
                status: status.as_u16(),
                message: "No se pudo completar el registro".to_string(),
            })
        }
    }
}
