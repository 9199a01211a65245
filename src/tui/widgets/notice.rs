use super::{GOLD_FADED, TEXT_FADED};
use crate::ui_state::UiState;
use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

const WARN_ICON: &str = "";
const NOTICE_BG: Color = Color::Rgb(48, 18, 22);
const NOTICE_FG: Color = Color::Rgb(240, 120, 120);

/// Playback problems for the track on screen, kept until dismissed.
pub struct NoticePopup;
impl StatefulWidget for NoticePopup {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(notice) = state.get_notice() else {
            return;
        };
        let track = state.now_playing();

        let body = Text::from(vec![
            Line::from(Span::from(track.title()).fg(GOLD_FADED).italic()),
            Line::default(),
            Line::from(notice).fg(Color::White),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(NOTICE_FG))
            .title_top(Line::from(format!(" {WARN_ICON} Notice ")).fg(NOTICE_FG).bold())
            .title_bottom(Line::from(" esc ").fg(TEXT_FADED).right_aligned())
            .padding(Padding::new(3, 3, 1, 0));

        Paragraph::new(body)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .block(block)
            .bg(NOTICE_BG)
            .render(area, buf);
    }
}
