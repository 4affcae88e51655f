use anyhow::Result;
use serde::Deserialize;

/// Horizontal extent of the normalized coordinate space
pub const MAX_X: f64 = 100.0;
/// Vertical extent of the normalized coordinate space
pub const MAX_Y: f64 = 60.0;

/// A point in a normalized space, 0..=100 horizontally and 0..=60 vertically. Independent of the
/// size of whatever it's drawn on; see `Surface`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_X).contains(&self.x) || !(0.0..=MAX_Y).contains(&self.y) {
            bail!(
                "({}, {}) is outside of the {}x{} surface",
                self.x,
                self.y,
                MAX_X,
                MAX_Y
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Waypoint::new(0.0, 0.0).validate().is_ok());
        assert!(Waypoint::new(100.0, 60.0).validate().is_ok());
        assert!(Waypoint::new(100.1, 30.0).validate().is_err());
        assert!(Waypoint::new(50.0, 61.0).validate().is_err());
        assert!(Waypoint::new(f64::NAN, 30.0).validate().is_err());
    }
}
