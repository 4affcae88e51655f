use anyhow::Result;
use geom::Duration;
use serde::{Deserialize, Serialize};

/// Timing and capacity knobs. Missing fields in a config file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How often the marker advances to the next waypoint
    pub tick_ms: usize,
    /// How long after pressing start the trip actually begins
    pub start_delay_ms: usize,
    pub alert_lifetime_secs: usize,
    pub driver_log_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 700,
            start_delay_ms: 400,
            alert_lifetime_secs: 8,
            driver_log_capacity: 6,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be positive");
        }
        if self.driver_log_capacity == 0 {
            bail!("driver_log_capacity must be positive");
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        millis(self.tick_ms)
    }

    pub fn start_delay(&self) -> Duration {
        millis(self.start_delay_ms)
    }

    pub fn alert_lifetime(&self) -> Duration {
        Duration::seconds(self.alert_lifetime_secs as f64)
    }
}

fn millis(ms: usize) -> Duration {
    Duration::seconds(ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_interval(), Duration::seconds(0.7));
        assert_eq!(settings.start_delay(), Duration::seconds(0.4));
        assert_eq!(settings.alert_lifetime(), Duration::seconds(8.0));
    }

    #[test]
    fn partial_config() {
        let settings: Settings = serde_json::from_str(r#"{"tick_ms": 250}"#).unwrap();
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.driver_log_capacity, 6);
    }

    #[test]
    fn invalid() {
        let mut settings = Settings::default();
        settings.tick_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.driver_log_capacity = 0;
        assert!(settings.validate().is_err());
    }
}
