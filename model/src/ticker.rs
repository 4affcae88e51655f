use geom::{Duration, Time};

/// A cancellable repeating task. There's no callback; the owner polls `next_due` with the current
/// time and does the work itself. Dropping the ticker cancels it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    generation: usize,
    interval: Duration,
    next: Time,
}

impl Ticker {
    /// The first firing happens one interval after `now`. Panics if the interval isn't positive.
    pub fn start(generation: usize, now: Time, interval: Duration) -> Self {
        assert!(
            interval > Duration::ZERO,
            "Ticker interval must be positive, not {}",
            interval
        );
        Self {
            generation,
            interval,
            next: now + interval,
        }
    }

    /// If a firing is due at or before `now`, consumes it and returns true. Call repeatedly to
    /// catch up after a long frame.
    pub fn next_due(&mut self, now: Time) -> bool {
        if self.next > now {
            return false;
        }
        self.next += self.interval;
        true
    }

    pub fn generation(&self) -> usize {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_schedule() {
        let interval = Duration::seconds(0.7);
        let start = Time::START_OF_DAY;
        let mut ticker = Ticker::start(1, start, interval);

        assert!(!ticker.next_due(start));
        assert!(!ticker.next_due(start + Duration::seconds(0.5)));
        assert!(ticker.next_due(start + interval));
        assert!(!ticker.next_due(start + interval));
        assert_eq!(ticker.next, start + interval + interval);
    }

    #[test]
    fn catches_up() {
        let interval = Duration::seconds(1.0);
        let mut ticker = Ticker::start(1, Time::START_OF_DAY, interval);
        let now = Time::START_OF_DAY + Duration::seconds(3.5);
        let mut fired = 0;
        while ticker.next_due(now) {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }
}
