use super::{DUR_WIDTH, GOLD, TEXT_FADED};
use crate::{DurationStyle, readable_secs, ui_state::UiState};
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::Text,
    widgets::{Block, LineGauge, Padding, StatefulWidget, Widget},
};

/// Elapsed/total timer either side of a line gauge.
pub struct Progress;
impl StatefulWidget for Progress {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if area.height == 0 || area.width <= DUR_WIDTH * 2 + 4 {
            return;
        }
        let snapshot = state.snapshot();

        // A gauge at exactly 1.0 draws past its area
        let ratio = snapshot.progress().clamp(0.0, 0.999);

        let style = match snapshot.is_playing {
            true => DurationStyle::Compact,
            false => DurationStyle::CompactMillis,
        };
        let elapsed = readable_secs(snapshot.position, style);
        let duration = match snapshot.duration > 0.0 {
            true => readable_secs(snapshot.duration, DurationStyle::Compact),
            false => "--:--".to_string(),
        };

        let y_pos = area.y + area.height / 2;

        LineGauge::default()
            .block(Block::new().padding(Padding {
                left: DUR_WIDTH + 2,
                right: DUR_WIDTH + 2,
                top: area.height / 2,
                bottom: 0,
            }))
            .filled_style(Style::new().fg(GOLD))
            .unfilled_style(Style::new().fg(TEXT_FADED))
            .label("")
            .ratio(ratio)
            .render(area, buf);

        Text::from(elapsed)
            .fg(TEXT_FADED)
            .right_aligned()
            .render(Rect::new(area.x + 1, y_pos, DUR_WIDTH, 1), buf);

        Text::from(duration)
            .fg(TEXT_FADED)
            .left_aligned()
            .render(
                Rect::new(area.x + area.width - DUR_WIDTH - 1, y_pos, DUR_WIDTH, 1),
                buf,
            );
    }
}
