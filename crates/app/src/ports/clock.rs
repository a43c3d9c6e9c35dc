//! Clock port: wall-clock time at the lamp's site.

use streetlamp_domain::time::{LocalTime, local_now};

/// Source of "now" for the night window and day-of-year.
pub trait Clock: Send + Sync {
    fn now(&self) -> LocalTime;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> LocalTime {
        local_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_host_local_time() {
        let before = local_now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
