use anyhow::Result;
use geom::Time;

use routes::{RouteID, RouteSet};

use crate::{
    CitizenAlerts, DriverLog, Estimate, Hospitals, Marker, Settings, TripAnimator, TripEvent,
};

const BLOCKED_STREET: &str = "Main St.";

/// Everything behind the control panel: the animator, which route the next trip should take, and
/// the two message lists. Time only moves forward when the caller passes a new `now`.
pub struct Dispatcher {
    settings: Settings,
    animator: TripAnimator,
    current_route: RouteID,

    alerts: CitizenAlerts,
    driver_log: DriverLog,
    hospitals: Hospitals,

    // Citizens have been told an ambulance is coming. Cleared on reset.
    broadcasting: bool,
    // When a requested trip should actually start
    pending_dispatch: Option<Time>,
    trips_completed: usize,
}

impl Dispatcher {
    pub fn new(routes: RouteSet, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            animator: TripAnimator::new(routes, settings.tick_interval())?,
            current_route: RouteID::Main,

            alerts: CitizenAlerts::new(settings.alert_lifetime()),
            driver_log: DriverLog::new(settings.driver_log_capacity),
            hospitals: Hospitals::default(),

            broadcasting: false,
            pending_dispatch: None,
            trips_completed: 0,

            settings,
        })
    }

    /// Ignored while a trip is running or about to start.
    pub fn start_trip(&mut self, now: Time) {
        if self.animator.is_running() || self.pending_dispatch.is_some() {
            warn!("Ignoring start request; a trip is already underway");
            return;
        }
        self.driver_log.push("Ambulance started");
        self.alerts
            .push("Ambulance is on the way — please clear the route", now);
        self.broadcasting = true;
        self.pending_dispatch = Some(now + self.settings.start_delay());
    }

    pub fn reset(&mut self) {
        self.pending_dispatch = None;
        self.animator.reset();
        self.current_route = RouteID::Main;
        self.driver_log.clear();
        self.alerts.clear();
        self.broadcasting = false;
    }

    /// Only the first report switches routes; later ones are just logged.
    pub fn report_block(&mut self, now: Time) {
        self.alerts.push(
            format!("Road blocked reported by user at {BLOCKED_STREET}"),
            now,
        );
        self.driver_log
            .push(format!("Citizen reported: Road blocked at {BLOCKED_STREET}"));
        if self.current_route != RouteID::Main {
            return;
        }

        self.driver_log.push("Switching to alternate route (sim)");
        self.current_route = RouteID::Alternate;
        if self.animator.is_running() {
            let events = self.animator.interrupt_and_switch(RouteID::Alternate, now);
            self.handle_events(events);
        }
    }

    pub fn acknowledge(&mut self, now: Time) {
        self.alerts.push("User acknowledged / cleared the road.", now);
        self.driver_log.push(format!(
            "Citizen acknowledged — route remains: {}",
            self.current_route.short_name()
        ));
    }

    pub fn broadcast(&mut self, now: Time) {
        self.alerts
            .push("Ambulance approaching — please clear the road.", now);
        self.driver_log.push("Notification broadcast to citizens");
    }

    pub fn toggle_hospital(&mut self, name: &str, available: bool) -> Result<()> {
        let line = self.hospitals.set(name, available)?;
        self.driver_log.push(line);
        Ok(())
    }

    /// Starts a pending trip if it's due, moves the marker along, and drops stale alerts.
    pub fn advance(&mut self, now: Time) {
        if let Some(due) = self.pending_dispatch {
            if due <= now {
                self.pending_dispatch = None;
                // The trip might've been rerouted while waiting
                let events = self.animator.start(self.current_route, due);
                self.handle_events(events);
            }
        }

        let events = self.animator.advance(now);
        self.handle_events(events);
        self.alerts.expire(now);
    }

    /// Throws away the current trip and all messages.
    pub fn replace_routes(&mut self, routes: RouteSet) {
        self.reset();
        self.animator.replace_routes(routes);
    }

    fn handle_events(&mut self, events: Vec<TripEvent>) {
        for ev in events {
            if ev == TripEvent::Arrived {
                self.trips_completed += 1;
                self.driver_log.push("Trip completed");
            }
        }
    }

    pub fn animator(&self) -> &TripAnimator {
        &self.animator
    }

    pub fn routes(&self) -> &RouteSet {
        self.animator.routes()
    }

    pub fn current_route(&self) -> RouteID {
        self.current_route
    }

    pub fn route_label(&self) -> &'static str {
        self.current_route.describe()
    }

    pub fn estimate(&self) -> Estimate {
        self.animator.estimate()
    }

    pub fn marker(&self) -> Marker {
        self.animator.marker()
    }

    pub fn alerts(&self) -> &CitizenAlerts {
        &self.alerts
    }

    pub fn driver_log(&self) -> &DriverLog {
        &self.driver_log
    }

    pub fn hospitals(&self) -> &Hospitals {
        &self.hospitals
    }

    pub fn is_broadcasting(&self) -> bool {
        self.broadcasting
    }

    /// True while a trip is running or about to
    pub fn is_busy(&self) -> bool {
        self.animator.is_running() || self.pending_dispatch.is_some()
    }

    pub fn trips_completed(&self) -> usize {
        self.trips_completed
    }
}
