use geom::Pt2D;

use crate::waypoint::{MAX_X, MAX_Y};
use crate::Waypoint;

/// A rectangular drawing surface of known pixel size. Waypoints are stretched to fill it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The marker's center goes here
    pub fn to_pixels(&self, pt: Waypoint) -> Pt2D {
        Pt2D::new((pt.x / MAX_X) * self.width, (pt.y / MAX_Y) * self.height)
    }

    /// Where the marker sits before any trip has started, or after a reset
    pub fn origin(&self) -> Pt2D {
        Pt2D::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixels() {
        let surface = Surface::new(1000.0, 600.0);
        assert_eq!(
            surface.to_pixels(Waypoint::new(5.0, 50.0)),
            Pt2D::new(50.0, 500.0)
        );
        assert_eq!(
            surface.to_pixels(Waypoint::new(100.0, 60.0)),
            Pt2D::new(1000.0, 600.0)
        );

        // Not square
        let surface = Surface::new(400.0, 300.0);
        assert_eq!(
            surface.to_pixels(Waypoint::new(90.0, 12.0)),
            Pt2D::new(360.0, 60.0)
        );
        assert_eq!(surface.origin(), Pt2D::new(0.0, 0.0));
    }
}
