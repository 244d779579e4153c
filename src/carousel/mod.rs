//! Character carousel: browse a circular roster and commit one choice.

mod session;
mod state;
mod timer;

pub use session::CarouselSession;
pub use state::{CarouselConfig, CarouselPhase, CarouselState, Navigation, Side, SlideDirection};
pub use timer::SettleTask;
