use crate::{
    REFRESH_RATE,
    app_core::Playdeck,
    key_handler::*,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.is_fullscreen() {
        true => handle_fullscreen(&key_event),
        false => handle_player(&key_event),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::SoftReset),

        (X, Char(' ')) => Some(Action::TogglePause),
        (X, Right) => Some(Action::SeekForward),
        (X, Left) => Some(Action::SeekBack),
        (X, Char('.')) => Some(Action::ScrubForward),
        (X, Char(',')) => Some(Action::ScrubBack),

        (X, Char('=')) | (X | S, Char('+')) => Some(Action::VolumeUp),
        (X, Char('-')) => Some(Action::VolumeDown),
        (X, Char('m')) => Some(Action::ToggleMute),
        _ => None,
    }
}

fn handle_fullscreen(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char('f')) => Some(Action::RevertFullscreen),
        _ => None,
    }
}

fn handle_player(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char('f')) => Some(Action::Fullscreen),

        (X, Char('n')) => Some(Action::NextTrack),
        (X, Char('p')) => Some(Action::PrevTrack),
        (X, Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| Action::SelectTrack(d as usize - 1)),

        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(REFRESH_RATE)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

impl Playdeck {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        let steps = self.ui.steps;
        let snapshot = self.ui.snapshot();

        match action {
            // Player
            Action::TogglePause     => self.controller().play_pause(),
            Action::SeekForward     => self.controller().seek_relative(steps.skip),
            Action::SeekBack        => self.controller().seek_relative(-steps.skip),
            Action::ScrubForward    => self.controller().seek_absolute(snapshot.position + steps.scrub),
            Action::ScrubBack       => self.controller().seek_absolute(snapshot.position - steps.scrub),

            // Volume
            Action::VolumeUp        => self.controller().set_volume(snapshot.volume + steps.volume),
            Action::VolumeDown      => self.controller().set_volume(snapshot.volume - steps.volume),
            Action::ToggleMute      => self.controller().toggle_mute(),

            // Display
            Action::Fullscreen      => self.controller().request_fullscreen(),
            Action::RevertFullscreen => self.controller().exit_fullscreen(),

            // Tracks
            Action::NextTrack       => self.ui.session.next(),
            Action::PrevTrack       => self.ui.session.previous(),
            Action::SelectTrack(i)  => self.ui.session.select_index(i),

            // Ops
            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }
}
