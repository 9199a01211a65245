use super::{GOLD, GOLD_FADED, PLAY_ICON, TEXT_SECONDARY};
use crate::ui_state::UiState;
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Padding, StatefulWidget},
};

pub struct TrackList;
impl StatefulWidget for TrackList {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let active = state.active_index();
        let tracks = state.tracks();

        let list_items = tracks.iter().enumerate().map(|(idx, track)| {
            let marker = match idx == active {
                true => format!("{PLAY_ICON} "),
                false => "  ".to_string(),
            };
            // Only the first nine tracks have a number key
            let hotkey = match idx < 9 {
                true => format!("{} ", idx + 1),
                false => "  ".to_string(),
            };

            ListItem::new(Line::from_iter([
                Span::from(marker).fg(GOLD),
                Span::from(hotkey).fg(GOLD_FADED),
                Span::from(track.title()).fg(TEXT_SECONDARY),
            ]))
        });

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(GOLD_FADED))
            .title_top(
                Line::from(format!(" ⟪ {} Tracks ⟫ ", tracks.len()))
                    .left_aligned()
                    .fg(GOLD),
            )
            .padding(Padding {
                left: 1,
                right: 1,
                top: 1,
                bottom: 1,
            });

        let list = List::new(list_items)
            .block(block)
            .highlight_style(Style::new().fg(Color::Black).bg(GOLD).italic())
            .scroll_padding(2);

        let mut list_state = ListState::default().with_selected(Some(active));
        list.render(area, buf, &mut list_state);
    }
}
