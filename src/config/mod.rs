use std::time::Duration;

use url::Url;

use crate::errors::{TrackerError, TrackerResult};

pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub currency: String,
    pub request_timeout: Option<Duration>,
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(products_api::DEFAULT_BASE_URL).expect("default base URL is valid"),
            currency: DEFAULT_CURRENCY.to_string(),
            request_timeout: None,
            animate: false,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TrackerResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> TrackerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PRICE_TRACKER_API_URL") {
            config = config.with_api_url(&url)?;
        }

        if let Some(currency) = lookup("PRICE_TRACKER_CURRENCY") {
            config.currency = currency;
        }

        if let Some(secs) = lookup("PRICE_TRACKER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                TrackerError::Config(format!("PRICE_TRACKER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            if secs == 0 {
                return Err(TrackerError::Config(
                    "PRICE_TRACKER_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(animate) = lookup("PRICE_TRACKER_ANIMATE") {
            config.animate = matches!(animate.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Replace the backend URL. A trailing `/` is added so endpoint paths join below it.
    pub fn with_api_url(mut self, url: &str) -> TrackerResult<Self> {
        let mut parsed = Url::parse(url.trim())
            .map_err(|e| TrackerError::Config(format!("invalid API URL '{}': {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TrackerError::Config(format!(
                "API URL must use http or https: {}",
                url
            )));
        }

        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        self.api_url = parsed;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:8000/products/");
        assert_eq!(config.currency, "₹");
        assert_eq!(config.request_timeout, None);
        assert!(!config.animate);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRICE_TRACKER_API_URL", "https://tracker.example/api/products"),
            ("PRICE_TRACKER_CURRENCY", "$"),
            ("PRICE_TRACKER_TIMEOUT_SECS", "15"),
            ("PRICE_TRACKER_ANIMATE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "https://tracker.example/api/products/");
        assert_eq!(config.currency, "$");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert!(config.animate);
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("PRICE_TRACKER_API_URL", "nope")]));
        assert!(matches!(result, Err(TrackerError::Config(_))));

        let result = Config::default().with_api_url("ftp://example.com/products/");
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_invalid_timeout() {
        let result =
            Config::from_lookup(lookup_from(&[("PRICE_TRACKER_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(TrackerError::Config(_))));

        let result = Config::from_lookup(lookup_from(&[("PRICE_TRACKER_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }
}
