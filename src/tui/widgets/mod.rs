mod buffer_line;
mod notice;
mod progress;
mod screen;
mod tracklist;
mod volume;

pub use buffer_line::BufferLine;
pub use notice::NoticePopup;
pub use progress::Progress;
pub use screen::Screen;
pub use tracklist::TrackList;
pub use volume::VolumeGauge;

use ratatui::style::Color;

const DUR_WIDTH: u16 = 8;
const PAUSE_ICON: &str = "󰏤";
const PLAY_ICON: &str = "󰐊";
const MUTE_ICON: &str = "󰝟";

const GOLD: Color = Color::Rgb(220, 180, 90);
const GOLD_FADED: Color = Color::Rgb(140, 118, 70);
const TEXT_FADED: Color = Color::DarkGray;
const TEXT_SECONDARY: Color = Color::Gray;
