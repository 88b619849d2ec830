use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::SupabaseConfig;

/// Upper bound on establishing a connection to Supabase, so a blackholing
/// network turns into a fault instead of an indefinite hang.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reachability probe for the backing datastore.
///
/// The three outcomes are deliberately distinct: `Ok(true)` means reachable,
/// `Ok(false)` means the datastore reported itself unreachable, and `Err`
/// means the probe itself faulted (network error, bad credentials, ...).
/// Handlers take this as an injected `Arc<dyn DatabaseProbe>` so tests can
/// substitute a deterministic double.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn check_health(&self) -> Result<bool>;
}

/// Thin client for the Supabase project backing this service. Only the
/// reachability probe lives here; all business data access goes through
/// Supabase directly from the frontend.
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        info!("Creating Supabase client for {}", config.url);

        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .context("failed to build HTTP client for Supabase")?;

        Ok(SupabaseClient {
            http,
            base_url: config.url.clone(),
            api_key: config.key.clone(),
        })
    }
}

#[async_trait]
impl DatabaseProbe for SupabaseClient {
    /// Hit the PostgREST root of the project. Any 2xx means the datastore is
    /// reachable with our credentials; any other status is reported as
    /// unreachable rather than a fault, since the service itself answered.
    async fn check_health(&self) -> Result<bool> {
        let url = format!("{}/rest/v1/", self.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Supabase reachability request failed")?;

        let status = response.status();
        debug!("Supabase reachability check returned {}", status);

        Ok(status.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let config = SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            key: "anon-key".to_string(),
        };

        assert!(SupabaseClient::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_fault() {
        // Local listener that closes every connection without answering, so
        // the probe sees a deterministic transport error with no network or
        // timeout dependence. It must surface as Err, not as Ok(false).
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                drop(stream);
            }
        });

        let config = SupabaseConfig {
            url: format!("http://{}", addr),
            key: "anon-key".to_string(),
        };

        let client = SupabaseClient::new(&config).unwrap();
        assert!(client.check_health().await.is_err());
    }
}
