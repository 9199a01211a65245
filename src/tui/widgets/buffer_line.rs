use super::{PAUSE_ICON, TEXT_FADED, TEXT_SECONDARY};
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const HINTS: &str = "[space] play  [←/→] seek  [m]ute  [f]ullscreen  [n/p] track  [q]uit ";
const FULLSCREEN_HINTS: &str = "[f/esc] exit fullscreen ";

pub struct BufferLine;

impl StatefulWidget for BufferLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let snapshot = state.snapshot();

        let separator = match snapshot.is_playing {
            true => Span::from(" ✧ ").fg(TEXT_FADED),
            false => Span::from(format!(" {PAUSE_ICON} ")).fg(TEXT_SECONDARY),
        };

        let position = format!(
            "{}/{}",
            state.active_index() + 1,
            state.tracks().len()
        );

        let playing_title = Line::from_iter([
            Span::from(state.now_playing().title().to_string()).fg(TEXT_SECONDARY),
            separator,
            Span::from(position).fg(TEXT_FADED),
        ])
        .centered();

        let hints = match state.is_fullscreen() {
            true => FULLSCREEN_HINTS,
            false => HINTS,
        };

        let [center, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(area);

        playing_title.render(center, buf);
        Line::from(hints).fg(TEXT_FADED).right_aligned().render(right, buf);
    }
}
