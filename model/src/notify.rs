use std::collections::VecDeque;

use geom::{Duration, Time};

/// A transient message for citizens along the route
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub text: String,
    pub expires: Time,
}

impl Alert {
    pub fn describe(&self) -> String {
        format!("Alert: {}", self.text)
    }
}

/// Newest first. Every alert disappears some fixed time after it's pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct CitizenAlerts {
    lifetime: Duration,
    alerts: VecDeque<Alert>,
}

impl CitizenAlerts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            alerts: VecDeque::new(),
        }
    }

    pub fn push<I: Into<String>>(&mut self, text: I, now: Time) {
        self.alerts.push_front(Alert {
            text: text.into(),
            expires: now + self.lifetime,
        });
    }

    /// Returns true if anything was removed
    pub fn expire(&mut self, now: Time) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.expires > now);
        self.alerts.len() != before
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Newest first, only keeping the most recent few entries.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverLog {
    capacity: usize,
    entries: VecDeque<String>,
}

impl DriverLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn push<I: Into<String>>(&mut self, text: I) {
        let text = text.into();
        info!("Driver log: {text}");
        self.entries.push_front(text);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Time {
        Time::START_OF_DAY + Duration::seconds(s)
    }

    #[test]
    fn log_keeps_latest() {
        let mut log = DriverLog::new(6);
        for i in 1..=9 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.len(), 6);
        let entries: Vec<&String> = log.iter().collect();
        assert_eq!(entries[0], "entry 9");
        assert_eq!(entries[5], "entry 4");

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn alerts_expire() {
        let mut alerts = CitizenAlerts::new(Duration::seconds(8.0));
        alerts.push("first", secs(0.0));
        alerts.push("second", secs(5.0));
        assert_eq!(
            alerts.iter().map(|a| a.text.as_str()).collect::<Vec<_>>(),
            vec!["second", "first"]
        );

        assert!(!alerts.expire(secs(7.9)));
        assert_eq!(alerts.len(), 2);

        assert!(alerts.expire(secs(8.0)));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts.iter().next().unwrap().describe(), "Alert: second");

        alerts.expire(secs(13.0));
        assert!(alerts.is_empty());
    }

    #[test]
    fn expire_after_clear() {
        let mut alerts = CitizenAlerts::new(Duration::seconds(8.0));
        alerts.push("gone early", secs(0.0));
        alerts.clear();
        assert!(!alerts.expire(secs(9.0)));
        assert!(alerts.is_empty());
    }
}
