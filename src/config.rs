use std::env;
use std::net::IpAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Origin that is always allowed alongside the configured frontend, so the
/// Vite dev server works without extra environment setup.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub frontend_origin: HeaderValue,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

impl Config {
    /// Read the full configuration from the environment. Called exactly once
    /// at startup; any missing or malformed required value is an error, so the
    /// process fails before it ever binds a listener.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("HOST must be a valid IP address")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let debug = env::var("DEBUG").map(|v| parse_bool(&v)).unwrap_or(false);

        let frontend_origin = parse_origin(
            &env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        )
        .context("FRONTEND_URL must be a valid origin URL")?;

        let supabase = SupabaseConfig::from_env()?;

        let config = Config {
            host,
            port,
            debug,
            frontend_origin,
            supabase,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        self.supabase.validate()?;

        Ok(())
    }
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url =
            env::var("SUPABASE_URL").context("SUPABASE_URL environment variable is required")?;

        let key =
            env::var("SUPABASE_KEY").context("SUPABASE_KEY environment variable is required")?;

        // The probe joins paths onto this URL, so drop a trailing slash here
        // rather than special-casing it at every call site.
        let url = url.trim_end_matches('/').to_string();

        Ok(SupabaseConfig { url, key })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("SUPABASE_URL must start with 'http://' or 'https://'");
        }

        if self.key.trim().is_empty() {
            anyhow::bail!("SUPABASE_KEY cannot be empty");
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Validate a browser origin and turn it into the `HeaderValue` the CORS
/// layer expects.
fn parse_origin(raw: &str) -> Result<HeaderValue> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        anyhow::bail!("origin '{}' must start with 'http://' or 'https://'", raw);
    }

    trimmed
        .parse::<HeaderValue>()
        .with_context(|| format!("origin '{}' is not a valid header value", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("1"));
        assert!(parse_bool("yes"));
        assert!(parse_bool("on"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("debug"));
    }

    #[test]
    fn test_parse_origin_accepts_http_urls() {
        let origin = parse_origin("https://app.example.com").unwrap();
        assert_eq!(origin, "https://app.example.com");

        // Trailing slash is normalized away
        let origin = parse_origin("http://localhost:3000/").unwrap();
        assert_eq!(origin, "http://localhost:3000");
    }

    #[test]
    fn test_parse_origin_rejects_bare_hosts() {
        assert!(parse_origin("localhost:3000").is_err());
        assert!(parse_origin("app.example.com").is_err());
        assert!(parse_origin("").is_err());
    }

    #[test]
    fn test_missing_required_env_is_fatal() {
        // Sole test that touches process env; `SupabaseConfig::from_env` does
        // not load .env, so the variables are fully under our control here.
        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_KEY");
        assert!(SupabaseConfig::from_env().is_err());

        // One of the two is not enough
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        assert!(SupabaseConfig::from_env().is_err());

        env::set_var("SUPABASE_KEY", "anon-key");
        assert!(SupabaseConfig::from_env().is_ok());

        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_KEY");
    }

    #[test]
    fn test_supabase_config_validation() {
        let valid = SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            key: "anon-key".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_scheme = SupabaseConfig {
            url: "project.supabase.co".to_string(),
            key: "anon-key".to_string(),
        };
        assert!(bad_scheme.validate().is_err());

        let empty_key = SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            key: "  ".to_string(),
        };
        assert!(empty_key.validate().is_err());
    }

    #[test]
    fn test_config_rejects_port_zero() {
        let config = Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            debug: false,
            frontend_origin: HeaderValue::from_static("http://localhost:3000"),
            supabase: SupabaseConfig {
                url: "https://project.supabase.co".to_string(),
                key: "anon-key".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }
}
