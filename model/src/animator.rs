use anyhow::Result;
use geom::{Duration, Pt2D, Time};

use routes::{RouteID, RouteSet, Surface, Waypoint};

use crate::{Estimate, Ticker};

/// Where the vehicle marker is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    Origin,
    At(Waypoint),
}

impl Marker {
    pub fn to_pixels(self, surface: &Surface) -> Pt2D {
        match self {
            Marker::Origin => surface.origin(),
            Marker::At(pt) => surface.to_pixels(pt),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TripEvent {
    MarkerPlaced { step: usize, waypoint: Waypoint },
    EstimateChanged(Estimate),
    Arrived,
}

/// Walks a marker through the waypoints of one route, one step per tick.
///
/// The step index and the ticker live and die together: while a trip is running, both are
/// present and the step is a valid index into the active route. There's never more than one
/// ticker.
#[derive(Clone, Debug, PartialEq)]
pub struct TripAnimator {
    routes: RouteSet,
    interval: Duration,

    active_route: RouteID,
    step: Option<usize>,
    marker: Marker,
    estimate: Estimate,

    ticker: Option<Ticker>,
    // Incremented for every ticker ever scheduled, just to tell them apart in logs
    generations: usize,
}

impl TripAnimator {
    /// Before any trip, the marker waits at the start of the main route. The interval between
    /// ticks must be positive.
    pub fn new(routes: RouteSet, interval: Duration) -> Result<Self> {
        if interval <= Duration::ZERO {
            bail!("Tick interval must be positive, not {interval}");
        }
        Ok(Self::idle(routes, interval))
    }

    /// Cancels any trip and swaps in new routes, keeping the cadence.
    pub fn replace_routes(&mut self, routes: RouteSet) {
        *self = Self::idle(routes, self.interval);
    }

    fn idle(routes: RouteSet, interval: Duration) -> Self {
        let marker = Marker::At(routes.get(RouteID::Main).first());
        Self {
            routes,
            interval,

            active_route: RouteID::Main,
            step: None,
            marker,
            estimate: Estimate::Unknown,

            ticker: None,
            generations: 0,
        }
    }

    /// Does nothing if a trip is already running.
    pub fn start(&mut self, route_id: RouteID, now: Time) -> Vec<TripEvent> {
        if self.is_running() {
            return Vec::new();
        }

        self.active_route = route_id;
        self.step = Some(0);
        self.generations += 1;
        self.ticker = Some(Ticker::start(self.generations, now, self.interval));
        info!(
            "Starting trip on {} at {} (ticker {})",
            route_id, now, self.generations
        );

        let route = self.routes.get(route_id);
        let waypoint = route.first();
        let steps_remaining = route.len();
        self.place(0, waypoint, steps_remaining)
    }

    /// Advance one waypoint, or finish the trip. Normally only called from `advance`; does nothing
    /// when no trip is running.
    pub fn tick(&mut self) -> Vec<TripEvent> {
        let step = match self.step {
            Some(step) => step + 1,
            None => return Vec::new(),
        };

        let route = self.routes.get(self.active_route);
        let len = route.len();
        match route.get(step) {
            Some(waypoint) => {
                if let Some(ref ticker) = self.ticker {
                    debug!("Ticker {} moves to step {}", ticker.generation(), step);
                }
                self.step = Some(step);
                self.place(step, waypoint, len - step)
            }
            None => {
                self.ticker = None;
                self.step = None;
                self.estimate = Estimate::Arrived;
                info!("Trip on {} arrived", self.active_route);
                vec![TripEvent::EstimateChanged(Estimate::Arrived), TripEvent::Arrived]
            }
        }
    }

    /// Runs every tick due by `now`, in order.
    pub fn advance(&mut self, now: Time) -> Vec<TripEvent> {
        let mut events = Vec::new();
        while let Some(ticker) = self.ticker.as_mut() {
            if !ticker.next_due(now) {
                break;
            }
            events.extend(self.tick());
        }
        events
    }

    /// Cancels the running trip and starts over on another route, from its first waypoint. Does
    /// nothing if no trip is running.
    pub fn interrupt_and_switch(&mut self, new_route: RouteID, now: Time) -> Vec<TripEvent> {
        if !self.is_running() {
            return Vec::new();
        }
        info!(
            "Interrupting trip on {} at step {:?}, switching to {}",
            self.active_route, self.step, new_route
        );
        self.ticker = None;
        self.step = None;
        self.active_route = new_route;
        self.start(new_route, now)
    }

    pub fn reset(&mut self) {
        self.ticker = None;
        self.step = None;
        self.active_route = RouteID::Main;
        self.estimate = Estimate::Unknown;
        self.marker = Marker::Origin;
    }

    fn place(&mut self, step: usize, waypoint: Waypoint, steps_remaining: usize) -> Vec<TripEvent> {
        self.marker = Marker::At(waypoint);
        self.estimate = Estimate::from_steps_remaining(steps_remaining);
        vec![
            TripEvent::MarkerPlaced { step, waypoint },
            TripEvent::EstimateChanged(self.estimate),
        ]
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    pub fn active_route(&self) -> RouteID {
        self.active_route
    }

    /// None when no trip is running
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    /// 0 or 1
    pub fn active_timers(&self) -> usize {
        self.ticker.iter().count()
    }
}
