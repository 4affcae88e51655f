#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod animator;
mod dispatch;
mod estimate;
mod hospitals;
mod notify;
mod settings;
mod ticker;

pub use self::animator::{Marker, TripAnimator, TripEvent};
pub use self::dispatch::Dispatcher;
pub use self::estimate::Estimate;
pub use self::hospitals::{Hospital, Hospitals};
pub use self::notify::{Alert, CitizenAlerts, DriverLog};
pub use self::settings::Settings;
pub use self::ticker::Ticker;
