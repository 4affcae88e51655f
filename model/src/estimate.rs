use std::fmt;

/// Simulated minutes per remaining waypoint
const MINUTES_PER_STEP: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Estimate {
    /// No trip yet, or after a reset
    Unknown,
    /// Always at least 1
    Minutes(usize),
    Arrived,
}

impl Estimate {
    pub fn from_steps_remaining(steps: usize) -> Self {
        let mins = (steps as f64 * MINUTES_PER_STEP).round() as usize;
        Estimate::Minutes(mins.max(1))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Estimate::Unknown => write!(f, "—"),
            Estimate::Minutes(mins) => write!(f, "{} min (sim)", mins),
            Estimate::Arrived => write!(f, "Arrived"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes() {
        assert_eq!(Estimate::from_steps_remaining(4), Estimate::Minutes(5));
        assert_eq!(Estimate::from_steps_remaining(5), Estimate::Minutes(6));
        assert_eq!(Estimate::from_steps_remaining(3), Estimate::Minutes(4));
        assert_eq!(Estimate::from_steps_remaining(2), Estimate::Minutes(2));
        assert_eq!(Estimate::from_steps_remaining(1), Estimate::Minutes(1));
        // Clamped
        assert_eq!(Estimate::from_steps_remaining(0), Estimate::Minutes(1));
    }

    #[test]
    fn labels() {
        assert_eq!(Estimate::Unknown.to_string(), "—");
        assert_eq!(Estimate::Minutes(5).to_string(), "5 min (sim)");
        assert_eq!(Estimate::Arrived.to_string(), "Arrived");
    }
}
