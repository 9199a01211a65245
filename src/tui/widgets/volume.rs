use super::{GOLD_FADED, MUTE_ICON, TEXT_FADED};
use crate::{player::VolumePolicy, ui_state::UiState};
use ratatui::{
    style::{Style, Stylize},
    widgets::{Block, LineGauge, Padding, StatefulWidget, Widget},
};

pub struct VolumeGauge;
impl StatefulWidget for VolumeGauge {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let snapshot = state.snapshot();

        let level = match snapshot.is_muted {
            true => format!("{MUTE_ICON} muted"),
            false => format!("vol {:>3}%", (snapshot.volume * 100.0).round() as u8),
        };
        let policy = match state.volume_policy() {
            VolumePolicy::Coupled => "linked",
            VolumePolicy::Independent => "free",
        };
        let label = format!("{level} ({policy}) ");

        LineGauge::default()
            .block(Block::new().padding(Padding::horizontal(2)))
            .filled_style(Style::new().fg(GOLD_FADED))
            .unfilled_style(Style::new().fg(TEXT_FADED))
            .label(label.fg(TEXT_FADED))
            .ratio(snapshot.effective_volume())
            .render(area, buf);
    }
}
