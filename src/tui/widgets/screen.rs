use super::{GOLD, GOLD_FADED, PAUSE_ICON, PLAY_ICON, TEXT_FADED};
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

/// Stand-in for the video surface: title, source and transport state.
pub struct Screen;
impl StatefulWidget for Screen {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let snapshot = state.snapshot();
        let track = state.now_playing();

        let block = match state.is_fullscreen() {
            true => Block::new(),
            false => Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(GOLD_FADED)),
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let icon = match snapshot.is_playing {
            true => PLAY_ICON,
            false => PAUSE_ICON,
        };

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(Text::from(vec![
            Line::from(Span::from(icon).fg(GOLD)),
            Line::from(track.title()).bold(),
            Line::from(track.source()).fg(TEXT_FADED).italic(),
        ]))
        .centered()
        .render(body, buf);
    }
}
