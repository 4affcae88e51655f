#[macro_use]
extern crate log;

mod components;
mod viewer;

use abstutil::Timer;
use anyhow::Result;
use geom::{Pt2D, Time};
use structopt::StructOpt;
use widgetry::{Color, EventCtx, GfxCtx, Settings, SharedAppState};

use model::Dispatcher;
use routes::{RouteSet, Surface};

#[derive(StructOpt)]
struct Args {
    /// A JSON file with replacement main and alternate routes
    #[structopt(long)]
    routes: Option<String>,
    /// A JSON file with timing settings. Missing fields use defaults.
    #[structopt(long)]
    config: Option<String>,
    /// How often the ambulance advances to the next waypoint, in milliseconds. Overrides the
    /// config file.
    #[structopt(long)]
    tick_ms: Option<usize>,
}

impl Args {
    // TODO These args only make sense on native, because they read files
    fn load(self) -> Result<Dispatcher> {
        let routes = match self.routes {
            Some(path) => RouteSet::from_json_bytes(&fs_err::read(path)?)?,
            None => RouteSet::builtin(),
        };
        let mut settings = match self.config {
            Some(path) => {
                abstio::maybe_read_json::<model::Settings>(path, &mut Timer::throwaway())?
            }
            None => model::Settings::default(),
        };
        if let Some(ms) = self.tick_ms {
            settings.tick_ms = ms;
        }
        Dispatcher::new(routes, settings)
    }
}

fn run(settings: Settings) {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let dispatcher = match args.load() {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            error!("Couldn't start: {err}");
            std::process::exit(1);
        }
    };

    widgetry::run(settings, move |ctx| {
        let app = App::new(ctx, dispatcher);
        let states = vec![crate::viewer::Viewer::new_state(ctx, &app)];
        (app, states)
    });
}

pub fn main() {
    let settings = Settings::new("LifeLine Connect");
    run(settings);
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_wasm() {
    run(Settings::new("LifeLine Connect").root_dom_element_id("loading".to_string()));
}

pub struct App {
    dispatcher: Dispatcher,
    // Only advances while the app is running; there's no connection to the wall clock
    time: Time,
    surface: Surface,
}

impl SharedAppState for App {
    fn draw_default(&self, g: &mut GfxCtx) {
        if cfg!(not(target_arch = "wasm32")) {
            g.clear(Color::BLACK);
        }
    }
}

pub type Transition = widgetry::Transition<App>;

impl App {
    pub fn new(ctx: &mut EventCtx, dispatcher: Dispatcher) -> Self {
        let surface = Surface::new(1000.0, 600.0);
        ctx.canvas.map_dims = (surface.width, surface.height);
        ctx.canvas
            .center_on_map_pt(Pt2D::new(surface.width / 2.0, surface.height / 2.0));

        Self {
            dispatcher,
            time: Time::START_OF_DAY,
            surface,
        }
    }
}
