use geom::{Circle, Distance, Polygon, Pt2D};
use widgetry::mapspace::{ObjectID, World};
use widgetry::tools::ColorScale;
use widgetry::{
    Cached, Color, Drawable, EventCtx, GeomBatch, GfxCtx, Line, Panel, State, Text, UpdateType,
};

use model::{Dispatcher, Estimate};
use routes::RouteID;

use crate::components::{describe, messages, Controls};
use crate::{App, Transition};

pub struct Viewer {
    controls: Panel,
    messages: Panel,
    world: World<Obj>,
    marker: Cached<Pt2D, Drawable>,
    // What the panels and world currently show
    shown: Snapshot,
}

impl Viewer {
    pub fn new_state(ctx: &mut EventCtx, app: &App) -> Box<dyn State<App>> {
        Box::new(Self {
            controls: Controls::panel(ctx, app),
            messages: messages(ctx, &app.dispatcher),
            world: make_world(ctx, app),
            marker: Cached::new(),
            shown: Snapshot::new(&app.dispatcher),
        })
    }

    fn sync(&mut self, ctx: &mut EventCtx, app: &App) {
        let latest = Snapshot::new(&app.dispatcher);
        if latest == self.shown {
            return;
        }
        if latest.messages != self.shown.messages {
            self.messages = messages(ctx, &app.dispatcher);
        }
        // The route label lives in the controls
        if latest.route != self.shown.route || latest.controls != self.shown.controls {
            self.controls = Controls::panel(ctx, app);
        }
        if latest.route != self.shown.route {
            self.world = make_world(ctx, app);
        }
        self.shown = latest;
    }
}

impl State<App> for Viewer {
    fn event(&mut self, ctx: &mut EventCtx, app: &mut App) -> Transition {
        ctx.canvas_movement();

        if let Some(real_dt) = ctx.input.nonblocking_is_update_event() {
            ctx.input.use_update_event();
            app.time += real_dt;
            app.dispatcher.advance(app.time);
        }
        // Alerts expire and pending trips start even when nothing is moving
        ctx.request_update(UpdateType::Game);

        if let Some(t) = Controls::event(ctx, app, &mut self.controls) {
            return t;
        }
        self.sync(ctx, app);

        self.world.event(ctx);

        let pos = app.dispatcher.marker().to_pixels(&app.surface);
        self.marker.update(Some(pos), |pt| {
            let mut batch = GeomBatch::new();
            batch.push(Color::WHITE, Circle::new(pt, Distance::meters(16.0)).to_polygon());
            batch.push(Color::RED, Circle::new(pt, Distance::meters(12.0)).to_polygon());
            ctx.upload(batch)
        });

        Transition::Keep
    }

    fn draw(&self, g: &mut GfxCtx, _: &App) {
        self.world.draw(g);
        if let Some(draw) = self.marker.value() {
            g.redraw(draw);
        }
        self.controls.draw(g);
        self.messages.draw(g);
    }

    fn recreate(&mut self, ctx: &mut EventCtx, app: &mut App) -> Box<dyn State<App>> {
        Self::new_state(ctx, app)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Obj {
    Waypoint(RouteID, usize),
}
impl ObjectID for Obj {}

fn make_world(ctx: &mut EventCtx, app: &App) -> World<Obj> {
    let mut world = World::unbounded();
    let surface = &app.surface;
    let selected = app.dispatcher.current_route();

    // Show the bounds of the surface
    let mut batch = GeomBatch::from(vec![(
        Color::grey(0.1),
        Polygon::rectangle(surface.width, surface.height),
    )]);
    // Draw the selected route on top
    let mut routes = app.dispatcher.routes().all();
    routes.sort_by_key(|r| r.id == selected);
    for route in routes {
        let color = if route.id == selected {
            Color::CYAN
        } else {
            Color::grey(0.4)
        };
        match route.polyline(surface) {
            Ok(pl) => batch.push(color, pl.make_polygons(Distance::meters(6.0))),
            Err(err) => warn!("Not drawing {}: {err}", route.id),
        }
    }
    batch.append(
        Text::from(Line(format!("Heading via {}", selected.describe())).fg(Color::WHITE))
            .render(ctx)
            .centered_on(Pt2D::new(surface.width / 2.0, 20.0)),
    );
    world.draw_master_batch(ctx, batch);

    let radius = Distance::meters(10.0);
    let scale = ColorScale::from_colorous(colorous::COOL);
    for route in app.dispatcher.routes().all() {
        let last = (route.len() - 1).max(1) as f64;
        for (idx, pt) in route.pixels(surface).into_iter().enumerate() {
            let color = if route.id == selected {
                scale.eval(idx as f64 / last)
            } else {
                Color::grey(0.6)
            };
            world
                .add(Obj::Waypoint(route.id, idx))
                .hitbox(Circle::new(pt, radius).to_polygon())
                .draw_color(color)
                .hover_alpha(0.5)
                .tooltip(describe::waypoint(route, idx))
                .build(ctx);
        }
    }

    world.initialize_hover(ctx);
    world
}

/// The parts of the dispatcher the panels and world depend on. Cheap enough to rebuild every
/// event and compare.
#[derive(PartialEq)]
struct Snapshot {
    route: RouteID,
    controls: (bool, bool, Estimate, usize, Vec<bool>),
    messages: (Vec<String>, Vec<String>),
}

impl Snapshot {
    fn new(dispatcher: &Dispatcher) -> Self {
        Self {
            route: dispatcher.current_route(),
            controls: (
                dispatcher.is_busy(),
                dispatcher.is_broadcasting(),
                dispatcher.estimate(),
                dispatcher.trips_completed(),
                dispatcher.hospitals().iter().map(|h| h.available).collect(),
            ),
            messages: (
                dispatcher.alerts().iter().map(|a| a.describe()).collect(),
                dispatcher.driver_log().iter().cloned().collect(),
            ),
        }
    }
}
