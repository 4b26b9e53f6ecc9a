use serde::Deserialize;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the CineMaison backend (scheme, host and port)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL that relative poster paths are joined onto
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Number of films requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Fraction of one viewport before the end of content at which the next page is requested
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// Pause between the wheel settling and the recommendations fetch
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_spin_min_angle")]
    pub spin_min_angle: f64,

    #[serde(default = "default_spin_max_angle")]
    pub spin_max_angle: f64,

    #[serde(default = "default_spin_min_duration_ms")]
    pub spin_min_duration_ms: u64,

    #[serde(default = "default_spin_max_duration_ms")]
    pub spin_max_duration_ms: u64,

    /// HTTP client timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_page_size() -> u32 {
    6
}

fn default_scroll_threshold() -> f64 {
    0.5
}

fn default_settle_delay_ms() -> u64 {
    1500
}

fn default_spin_min_angle() -> f64 {
    3600.0
}

fn default_spin_max_angle() -> f64 {
    7200.0
}

fn default_spin_min_duration_ms() -> u64 {
    2000
}

fn default_spin_max_duration_ms() -> u64 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            image_base_url: default_image_base_url(),
            page_size: default_page_size(),
            scroll_threshold: default_scroll_threshold(),
            settle_delay_ms: default_settle_delay_ms(),
            spin_min_angle: default_spin_min_angle(),
            spin_max_angle: default_spin_max_angle(),
            spin_min_duration_ms: default_spin_min_duration_ms(),
            spin_max_duration_ms: default_spin_max_duration_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables are read unprefixed and uppercased, e.g. `API_BASE_URL`, `PAGE_SIZE`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the loader and wheel cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if !(self.scroll_threshold.is_finite() && self.scroll_threshold >= 0.0) {
            anyhow::bail!("scroll_threshold must be a non-negative number");
        }
        if !(self.spin_min_angle.is_finite()
            && self.spin_max_angle.is_finite()
            && self.spin_min_angle < self.spin_max_angle)
        {
            anyhow::bail!("spin angle range must be finite and non-empty");
        }
        if self.spin_min_duration_ms >= self.spin_max_duration_ms {
            anyhow::bail!("spin duration range must be non-empty");
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_pairs() {
        let vars = vec![
            ("API_BASE_URL".to_string(), "http://10.0.2.2:5000".to_string()),
            ("PAGE_SIZE".to_string(), "12".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.2.2:5000");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.settle_delay_ms, 1500);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_angle_range() {
        let config = Config {
            spin_min_angle: 7200.0,
            spin_max_angle: 3600.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
