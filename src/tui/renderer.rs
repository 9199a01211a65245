use super::{
    AppLayout,
    widgets::{BufferLine, NoticePopup, Progress, Screen, TrackList, VolumeGauge},
};
use crate::ui_state::UiState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    if state.is_fullscreen() {
        let [screen, progress, bufferline] = AppLayout::fullscreen(f.area());

        Screen.render(screen, f.buffer_mut(), state);
        Progress.render(progress, f.buffer_mut(), state);
        BufferLine.render(bufferline, f.buffer_mut(), state);
    } else {
        let layout = AppLayout::new(f.area(), state);

        TrackList.render(layout.tracklist, f.buffer_mut(), state);
        Screen.render(layout.screen, f.buffer_mut(), state);
        Progress.render(layout.progress_bar, f.buffer_mut(), state);
        VolumeGauge.render(layout.volume, f.buffer_mut(), state);
        BufferLine.render(layout.buffer_line, f.buffer_mut(), state);
    }

    if state.get_notice().is_some() {
        let popup_rect = centered_rect(40, 30, f.area());

        Clear.render(popup_rect, f.buffer_mut());
        NoticePopup.render(popup_rect, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
