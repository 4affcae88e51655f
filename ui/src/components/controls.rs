use anyhow::Result;
use widgetry::tools::PopupMsg;
use widgetry::{
    EventCtx, HorizontalAlignment, Key, Line, Outcome, Panel, Text, TextExt, Toggle,
    VerticalAlignment, Widget,
};

use routes::RouteSet;

use super::{describe, FileLoader};
use crate::{App, Transition};

/// The control surface: trip buttons, status, and hospital toggles.
pub struct Controls;

impl Controls {
    pub fn panel(ctx: &mut EventCtx, app: &App) -> Panel {
        let dispatcher = &app.dispatcher;
        let busy = dispatcher.is_busy();

        // Stays highlighted once citizens have been told about the trip
        let notify = if dispatcher.is_broadcasting() {
            ctx.style().btn_solid.text("Notify citizens")
        } else {
            ctx.style().btn_outline.text("Notify citizens")
        };

        let mut col = vec![
            Line("LifeLine Connect").small_heading().into_widget(ctx),
            Widget::row(vec![
                ctx.style()
                    .btn_solid
                    .text("Start trip")
                    .hotkey(Key::S)
                    .disabled(busy)
                    .build_def(ctx),
                ctx.style()
                    .btn_outline
                    .text("Reset")
                    .hotkey(Key::R)
                    .build_def(ctx),
            ]),
            Widget::row(vec![
                ctx.style()
                    .btn_outline
                    .text("Report block")
                    .hotkey(Key::B)
                    .build_def(ctx),
                ctx.style()
                    .btn_outline
                    .text("Acknowledge")
                    .hotkey(Key::A)
                    .build_def(ctx),
                notify.hotkey(Key::N).build_def(ctx),
            ]),
            Widget::horiz_separator(ctx, 1.0),
            Text::from_multiline(vec![
                Line(format!("Route: {}", dispatcher.route_label())),
                Line(format!(
                    "Trips completed: {}",
                    abstutil::prettyprint_usize(dispatcher.trips_completed())
                ))
                .secondary(),
            ])
            .into_widget(ctx),
            describe::estimate(dispatcher.estimate()).into_widget(ctx),
            Widget::horiz_separator(ctx, 1.0),
            Line("Hospitals").small_heading().into_widget(ctx),
        ];
        for hospital in dispatcher.hospitals().iter() {
            col.push(Toggle::checkbox(ctx, &hospital.name, None, hospital.available));
        }
        col.push(describe::hospitals(dispatcher.hospitals()).into_widget(ctx));
        col.push(Widget::horiz_separator(ctx, 1.0));
        col.push(Widget::row(vec![
            "Routes:".text_widget(ctx).centered_vert(),
            ctx.style()
                .btn_outline
                .text("Load routes")
                .disabled(busy)
                .build_def(ctx),
            ctx.style()
                .btn_plain
                .text("Use built-in routes")
                .disabled(busy)
                .build_def(ctx),
        ]));

        Panel::new_builder(Widget::col(col))
            .aligned(HorizontalAlignment::Left, VerticalAlignment::Top)
            .build(ctx)
    }

    /// None means the panel event wasn't handled here
    pub fn event(ctx: &mut EventCtx, app: &mut App, panel: &mut Panel) -> Option<Transition> {
        let now = app.time;
        match panel.event(ctx) {
            Outcome::Clicked(x) => match x.as_ref() {
                "Start trip" => {
                    app.dispatcher.start_trip(now);
                }
                "Reset" => {
                    app.dispatcher.reset();
                }
                "Report block" => {
                    app.dispatcher.report_block(now);
                }
                "Acknowledge" => {
                    app.dispatcher.acknowledge(now);
                }
                "Notify citizens" => {
                    app.dispatcher.broadcast(now);
                }
                "Load routes" => {
                    return Some(load_routes(ctx));
                }
                "Use built-in routes" => {
                    app.dispatcher.replace_routes(RouteSet::builtin());
                    return Some(Transition::Recreate);
                }
                _ => unreachable!(),
            },
            Outcome::Changed(name) => {
                let available = panel.is_checked(&name);
                if let Err(err) = app.dispatcher.toggle_hospital(&name, available) {
                    error!("Toggling {name} failed: {err}");
                }
            }
            _ => {}
        }
        None
    }
}

fn load_routes(ctx: &mut EventCtx) -> Transition {
    Transition::Push(FileLoader::new_json_state(
        ctx,
        Box::new(|ctx, app, maybe_bytes: Result<Option<Vec<u8>>>| match maybe_bytes {
            Ok(Some(bytes)) => match RouteSet::from_json_bytes(&bytes) {
                Ok(routes) => {
                    app.dispatcher.replace_routes(routes);
                    Transition::Multi(vec![Transition::Pop, Transition::Recreate])
                }
                Err(err) => {
                    error!("Couldn't load routes: {err}");
                    Transition::Replace(PopupMsg::new_state(ctx, "Error", vec![err.to_string()]))
                }
            },
            // User didn't pick a file
            Ok(None) => Transition::Pop,
            Err(err) => {
                Transition::Replace(PopupMsg::new_state(ctx, "Error", vec![err.to_string()]))
            }
        }),
    ))
}
