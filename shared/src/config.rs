use serde::{Deserialize, Serialize};

/// Timing and layout constants for the site's client-side behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub autoplay_period_ms: u32,
    pub status_refresh_ms: u32,
    pub submit_delay_ms: u32,
    pub promo_delay_ms: u32,
    pub notification_ms: u32,
    pub notification_exit_ms: u32,
    pub section_offset_px: f64,
    pub header_offset_px: f64,
    pub sticky_header_px: f64,
    pub scroll_top_px: f64,
    pub reservation_horizon_months: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_period_ms: 5000,   // testimonial rotation
            status_refresh_ms: 60000,   // opening status, once a minute
            submit_delay_ms: 1500,
            promo_delay_ms: 2000,
            notification_ms: 3000,
            notification_exit_ms: 300,
            section_offset_px: 100.0,
            header_offset_px: 70.0,
            sticky_header_px: 100.0,
            scroll_top_px: 300.0,
            reservation_horizon_months: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroPeriod(&'static str),
}

impl SiteConfig {
    /// Reject configurations that would arm zero-length timers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("autoplay_period_ms", self.autoplay_period_ms),
            ("status_refresh_ms", self.status_refresh_ms),
            ("notification_ms", self.notification_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }
        Ok(())
    }

    /// How long a toast stays in the page, exit animation included
    pub fn notification_lifetime_ms(&self) -> u32 {
        self.notification_ms + self.notification_exit_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.autoplay_period_ms, 5000);
        assert_eq!(config.status_refresh_ms, 60000);
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.notification_lifetime_ms(), 3300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_autoplay_period_rejected() {
        let config = SiteConfig {
            autoplay_period_ms: 0,
            ..SiteConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod("autoplay_period_ms")));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"submit_delay_ms": 10}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.promo_delay_ms, 2000);
    }
}
