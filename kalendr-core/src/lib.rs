pub mod config;
pub mod display;
pub mod error;
pub mod event;

pub use config::KalendrConfig;
pub use display::DisplayEvent;
pub use error::{KalendrError, KalendrResult};
pub use event::{DEFAULT_COLOR, Event, EventCreate};
