use widgetry::{EventCtx, HorizontalAlignment, Line, Panel, Text, VerticalAlignment, Widget};

use model::Dispatcher;

/// Citizen alerts above the driver log, newest first in both.
pub fn messages(ctx: &mut EventCtx, dispatcher: &Dispatcher) -> Panel {
    let mut alerts = Text::new();
    for alert in dispatcher.alerts().iter() {
        alerts.add_line(Line(alert.describe()));
    }
    if dispatcher.alerts().is_empty() {
        alerts.add_line(Line("No alerts").secondary());
    }

    let mut log = Text::new();
    for entry in dispatcher.driver_log().iter() {
        log.add_line(Line(entry));
    }
    if dispatcher.driver_log().is_empty() {
        log.add_line(Line("Nothing yet").secondary());
    }

    Panel::new_builder(Widget::col(vec![
        Line("Citizen alerts").small_heading().into_widget(ctx),
        alerts.into_widget(ctx),
        Widget::horiz_separator(ctx, 1.0),
        Line("Driver log").small_heading().into_widget(ctx),
        log.into_widget(ctx),
    ]))
    .aligned(HorizontalAlignment::Right, VerticalAlignment::Top)
    .build(ctx)
}
