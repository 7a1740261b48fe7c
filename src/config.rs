use tracing::debug;

/// Backend endpoints for the service clients, read from the environment with
/// local-development defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub auth_base_url: String,
    pub messaging_base_url: String,
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let auth_base_url = std::env::var("AUTH_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4000".to_string());

        let messaging_base_url = std::env::var("MESSAGING_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4100".to_string());

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        debug!("Auth backend: {}", auth_base_url);
        debug!("Messaging backend: {}", messaging_base_url);

        Self {
            auth_base_url,
            messaging_base_url,
            request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        std::env::set_var("REQUEST_TIMEOUT_SECS", "not-a-number");
        let config = ServiceConfig::from_env();
        std::env::remove_var("REQUEST_TIMEOUT_SECS");

        assert_eq!(config.request_timeout_secs, 10);
    }
}
