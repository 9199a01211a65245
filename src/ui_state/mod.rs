mod mode;
mod playlist;
mod session;
mod ui_state;

pub use mode::Mode;
pub use playlist::TrackSelector;
pub use session::PlayerSession;
pub use ui_state::{ControlSteps, UiState};
