mod action;

pub use action::handle_key_event;
pub use action::next_event;

use ratatui::crossterm::event::KeyModifiers;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Player Controls
    TogglePause,
    SeekForward,
    SeekBack,
    ScrubForward,
    ScrubBack,

    // Volume
    VolumeUp,
    VolumeDown,
    ToggleMute,

    // Display
    Fullscreen,
    RevertFullscreen,

    // Tracks
    NextTrack,
    PrevTrack,
    SelectTrack(usize),

    SoftReset,
    QUIT,
}
