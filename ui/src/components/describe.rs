use widgetry::{Line, Text};

use model::{Estimate, Hospitals};
use routes::Route;

pub fn waypoint(route: &Route, idx: usize) -> Text {
    let pt = route.waypoints()[idx];
    let mut txt = Text::from(format!("{}, stop {}/{}", route.id, idx + 1, route.len()));
    txt.add_line(Line(format!("Position: ({}, {})", pt.x, pt.y)).secondary());
    if idx == 0 {
        txt.add_line(Line("Dispatch point"));
    } else if idx == route.len() - 1 {
        txt.add_line(Line("Destination"));
    }
    txt
}

pub fn estimate(estimate: Estimate) -> Text {
    let mut txt = Text::from(Line("ETA: "));
    txt.append(match estimate {
        Estimate::Arrived => Line(estimate.to_string()).fg(widgetry::Color::GREEN),
        _ => Line(estimate.to_string()),
    });
    txt
}

pub fn hospitals(hospitals: &Hospitals) -> Text {
    let total = hospitals.iter().count();
    Text::from(Line(format!(
        "{} of {} hospitals available",
        hospitals.count_available(),
        total
    )))
}
