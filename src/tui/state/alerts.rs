use std::time::{Duration, Instant};

/// Bootstrap-style alert levels carried over to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertLevel {
    Info,
    Success,
}

/// A transient banner message, dropped once its display time is up.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
    pub posted: Instant,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Success)
    }

    fn new(message: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            message: message.into(),
            level,
            posted: Instant::now(),
        }
    }
}

/// Removes every alert whose display time has elapsed.
pub fn expire_alerts(alerts: &mut Vec<Alert>, timeout: Duration) {
    alerts.retain(|alert| alert.posted.elapsed() < timeout);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdated(message: &str, age: Duration) -> Alert {
        Alert {
            message: message.to_string(),
            level: AlertLevel::Info,
            posted: Instant::now() - age,
        }
    }

    #[test]
    fn test_fresh_alerts_survive() {
        let mut alerts = vec![Alert::info("Hostel Manager loaded")];
        expire_alerts(&mut alerts, Duration::from_secs(4));
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn test_expired_alerts_are_removed() {
        let mut alerts = vec![
            backdated("old", Duration::from_secs(5)),
            Alert::success("new"),
        ];
        expire_alerts(&mut alerts, Duration::from_secs(4));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "new");
    }

    #[test]
    fn test_alerts_do_not_expire_early() {
        let mut alerts = vec![backdated("almost", Duration::from_secs(3))];
        expire_alerts(&mut alerts, Duration::from_secs(4));
        assert_eq!(alerts.len(), 1);
    }
}
