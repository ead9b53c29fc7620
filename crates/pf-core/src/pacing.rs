//! Rate limiting for high-frequency browser events.

/// How a handler reacts to a burst of events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Run on every event.
    Immediate,
    /// Run once the events have been quiet for `quiet_ms`.
    Debounced { quiet_ms: u32 },
}

impl Pacing {
    pub fn debounced(quiet_ms: u32) -> Self {
        if quiet_ms == 0 {
            Pacing::Immediate
        } else {
            Pacing::Debounced { quiet_ms }
        }
    }
}

/// Leading-edge throttle: the first call in a window runs, the rest of the
/// window is ignored.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            blocked_until: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.blocked_until {
            if now_ms < until {
                return false;
            }
        }
        self.blocked_until = Some(now_ms + self.limit_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quiet_period_runs_immediately() {
        assert_eq!(Pacing::debounced(0), Pacing::Immediate);
        assert_eq!(Pacing::debounced(10), Pacing::Debounced { quiet_ms: 10 });
    }

    #[test]
    fn throttle_admits_once_per_window() {
        let mut throttle = Throttle::new(200);
        assert!(throttle.admit(1_000.0));
        assert!(!throttle.admit(1_050.0));
        assert!(!throttle.admit(1_199.9));
        assert!(throttle.admit(1_200.0));
        assert!(!throttle.admit(1_300.0));
    }
}
