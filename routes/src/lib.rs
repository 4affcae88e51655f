#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod ids;
mod surface;
mod waypoint;

use anyhow::Result;
use geom::{PolyLine, Pt2D};
use serde::Deserialize;

pub use ids::RouteID;
pub use surface::Surface;
pub use waypoint::Waypoint;

/// An ordered, fixed sequence of waypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id: RouteID,
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(id: RouteID, waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.is_empty() {
            bail!("{} has no waypoints", id.describe());
        }
        for (idx, pt) in waypoints.iter().enumerate() {
            if let Err(err) = pt.validate() {
                bail!("{} waypoint {}: {}", id.describe(), idx + 1, err);
            }
        }
        Ok(Self { id, waypoints })
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Never zero
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn get(&self, step: usize) -> Option<Waypoint> {
        self.waypoints.get(step).copied()
    }

    pub fn first(&self) -> Waypoint {
        self.waypoints[0]
    }

    pub fn pixels(&self, surface: &Surface) -> Vec<Pt2D> {
        self.waypoints
            .iter()
            .map(|pt| surface.to_pixels(*pt))
            .collect()
    }

    /// Fails for a route with a single waypoint, or one that doubles back onto the same point
    pub fn polyline(&self, surface: &Surface) -> Result<PolyLine> {
        PolyLine::new(self.pixels(surface))
    }
}

/// Exactly one main and one alternate route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSet {
    main: Route,
    alternate: Route,
}

impl RouteSet {
    /// The two routes the dispatch demo ships with.
    pub fn builtin() -> Self {
        let pts = |raw: &[(f64, f64)]| -> Vec<Waypoint> {
            raw.iter().map(|(x, y)| Waypoint::new(*x, *y)).collect()
        };
        Self {
            main: Route {
                id: RouteID::Main,
                waypoints: pts(&[(5.0, 50.0), (30.0, 40.0), (60.0, 30.0), (90.0, 10.0)]),
            },
            alternate: Route {
                id: RouteID::Alternate,
                waypoints: pts(&[
                    (5.0, 50.0),
                    (30.0, 50.0),
                    (45.0, 35.0),
                    (70.0, 20.0),
                    (90.0, 12.0),
                ]),
            },
        }
    }

    pub fn new(main: Vec<Waypoint>, alternate: Vec<Waypoint>) -> Result<Self> {
        Ok(Self {
            main: Route::new(RouteID::Main, main)?,
            alternate: Route::new(RouteID::Alternate, alternate)?,
        })
    }

    /// Parses `{"main": [{"x": .., "y": ..}, ..], "alternate": [..]}`
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawRouteSet = serde_json::from_slice(bytes)?;
        let set = Self::new(raw.main, raw.alternate)?;
        info!(
            "Loaded routes with {} main and {} alternate waypoints",
            set.main.len(),
            set.alternate.len()
        );
        Ok(set)
    }

    pub fn get(&self, id: RouteID) -> &Route {
        match id {
            RouteID::Main => &self.main,
            RouteID::Alternate => &self.alternate,
        }
    }

    pub fn all(&self) -> [&Route; 2] {
        [&self.main, &self.alternate]
    }
}

impl Default for RouteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Deserialize)]
struct RawRouteSet {
    main: Vec<Waypoint>,
    alternate: Vec<Waypoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_routes() {
        let routes = RouteSet::builtin();
        let main = routes.get(RouteID::Main);
        assert_eq!(main.len(), 4);
        assert_eq!(main.first(), Waypoint::new(5.0, 50.0));
        assert_eq!(main.get(3), Some(Waypoint::new(90.0, 10.0)));
        assert_eq!(main.get(4), None);

        let alt = routes.get(RouteID::Alternate);
        assert_eq!(alt.len(), 5);
        assert_eq!(alt.get(4), Some(Waypoint::new(90.0, 12.0)));
    }

    #[test]
    fn load_json() {
        let json = br#"{
            "main": [{"x": 0, "y": 0}, {"x": 100, "y": 60}],
            "alternate": [{"x": 10, "y": 10}]
        }"#;
        let routes = RouteSet::from_json_bytes(json).unwrap();
        assert_eq!(routes.get(RouteID::Main).len(), 2);
        assert_eq!(
            routes.get(RouteID::Alternate).waypoints(),
            &[Waypoint::new(10.0, 10.0)]
        );
    }

    #[test]
    fn json_matches_builtin() {
        let json = br#"{
            "main": [{"x": 5, "y": 50}, {"x": 30, "y": 40}, {"x": 60, "y": 30}, {"x": 90, "y": 10}],
            "alternate": [
                {"x": 5, "y": 50}, {"x": 30, "y": 50}, {"x": 45, "y": 35},
                {"x": 70, "y": 20}, {"x": 90, "y": 12}
            ]
        }"#;
        assert_eq!(RouteSet::from_json_bytes(json).unwrap(), RouteSet::builtin());
    }

    #[test]
    fn reject_bad_json() {
        // Empty route
        assert!(RouteSet::from_json_bytes(br#"{"main": [], "alternate": [{"x": 1, "y": 1}]}"#)
            .is_err());
        // Off the surface
        assert!(RouteSet::from_json_bytes(
            br#"{"main": [{"x": 101, "y": 1}], "alternate": [{"x": 1, "y": 1}]}"#
        )
        .is_err());
        assert!(RouteSet::from_json_bytes(
            br#"{"main": [{"x": 1, "y": 1}], "alternate": [{"x": 1, "y": -0.5}]}"#
        )
        .is_err());
        // Missing the alternate
        assert!(RouteSet::from_json_bytes(br#"{"main": [{"x": 1, "y": 1}]}"#).is_err());
        assert!(RouteSet::from_json_bytes(b"not json").is_err());
    }

    #[test]
    fn error_names_the_route() {
        let err = RouteSet::new(vec![Waypoint::new(1.0, 1.0)], Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Alternate Route has no waypoints");
    }
}
