use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const PROGRESS_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub tracklist: Rect,
    pub screen: Rect,
    pub progress_bar: Rect,
    pub volume: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let [upper_block, progress_bar, volume, buffer_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(PROGRESS_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        // Widest title plus room for the index and borders
        let list_width = state
            .tracks()
            .iter()
            .map(|t| t.title().chars().count() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(12)
            .max(20)
            .min(area.width / 2);

        let [tracklist, _, screen] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(list_width),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(upper_block);

        AppLayout {
            tracklist,
            screen,
            progress_bar,
            volume,
            buffer_line,
        }
    }

    pub fn fullscreen(area: Rect) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(PROGRESS_HEIGHT),
                Constraint::Length(1),
            ])
            .areas::<3>(area)
    }
}
