use crate::{
    Settings,
    config::BackendKind,
    key_handler,
    overwrite_line,
    player::{MediaBackend, PlayerController, VirtualMedia},
    tui,
    ui_state::{ControlSteps, Mode, PlayerSession, TrackSelector, UiState},
};
use anyhow::Result;
use log::info;
use ratatui::crossterm::event::{Event, KeyEventKind};

pub struct Playdeck {
    pub(crate) ui: UiState,
}

impl Playdeck {
    pub fn new(settings: &Settings) -> Result<Self> {
        let selector = TrackSelector::new(settings.tracks.clone())?;
        let backend = open_backend(settings.backend)?;

        let session = PlayerSession::new(
            backend,
            selector,
            settings.preferences(),
            settings.volume_policy,
        );

        Ok(Playdeck {
            ui: UiState::new(session, ControlSteps::from(settings)),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // MAIN ROUTINE
        loop {
            self.ui.sync();

            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                break;
            }
        }

        ratatui::restore();
        info!("shutting down on track {}", self.ui.now_playing().id());
        overwrite_line("Thank you for using playdeck!\n\n");

        Ok(())
    }

    pub(crate) fn controller(&mut self) -> &mut PlayerController {
        self.ui.session.controller_mut()
    }
}

pub fn open_backend(kind: BackendKind) -> Result<Box<dyn MediaBackend>> {
    match kind {
        BackendKind::Virtual => Ok(Box::new(VirtualMedia::new())),
        #[cfg(feature = "rodio")]
        BackendKind::Rodio => Ok(Box::new(crate::player::RodioMedia::new()?)),
        #[cfg(not(feature = "rodio"))]
        BackendKind::Rodio => Err(anyhow::anyhow!(
            "This build has no audio output; rebuild with `--features rodio` or set backend = \"virtual\""
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::TrackDescriptor,
        key_handler::Action,
        test_utils::{FakeHandle, fake_ui},
    };

    fn app() -> (Playdeck, FakeHandle) {
        let (ui, handle) = fake_ui();
        (Playdeck { ui }, handle)
    }

    #[test]
    fn empty_track_list_is_rejected() {
        assert!(Playdeck::new(&Settings::default()).is_err());
    }

    #[test]
    fn repeated_track_ids_are_rejected() {
        let settings = Settings {
            tracks: vec![
                TrackDescriptor::new(4, "One", "/media/one.mp4"),
                TrackDescriptor::new(4, "Two", "/media/two.mp4"),
            ],
            ..Settings::default()
        };
        assert!(Playdeck::new(&settings).is_err());
    }

    #[test]
    fn builds_from_settings_with_virtual_backend() {
        let settings = Settings {
            tracks: vec![TrackDescriptor::new(1, "Clip", "/nonexistent/clip.mp4")],
            ..Settings::default()
        };
        let mut app = Playdeck::new(&settings).unwrap();
        assert_eq!(app.ui.now_playing().title(), "Clip");

        app.ui.sync();
        assert!(app.ui.get_notice().is_some());
    }

    #[test]
    fn seek_and_scrub_use_configured_steps() {
        let (mut app, handle) = app();
        handle.metadata(120.0);
        app.ui.sync();

        app.handle_action(Action::SeekForward).unwrap();
        app.handle_action(Action::SeekForward).unwrap();
        assert_eq!(app.ui.snapshot().position, 20.0);

        app.handle_action(Action::ScrubBack).unwrap();
        assert_eq!(app.ui.snapshot().position, 19.0);
        assert_eq!(handle.position(), 19.0);

        app.handle_action(Action::SeekBack).unwrap();
        app.handle_action(Action::SeekBack).unwrap();
        assert_eq!(app.ui.snapshot().position, 0.0);
    }

    #[test]
    fn volume_keys_step_and_clamp() {
        let (mut app, handle) = app();

        app.handle_action(Action::VolumeUp).unwrap();
        assert_eq!(app.ui.snapshot().volume, 1.0);

        app.handle_action(Action::VolumeDown).unwrap();
        assert!((app.ui.snapshot().volume - 0.95).abs() < 1e-9);
        assert!((handle.volume() - 0.95).abs() < 1e-9);

        app.handle_action(Action::ToggleMute).unwrap();
        assert!(app.ui.snapshot().is_muted);
        assert_eq!(app.ui.snapshot().effective_volume(), 0.0);
    }

    #[test]
    fn track_keys_switch_and_reset() {
        let (mut app, handle) = app();
        handle.metadata(60.0);
        app.ui.sync();
        app.handle_action(Action::TogglePause).unwrap();
        app.handle_action(Action::SeekForward).unwrap();

        app.handle_action(Action::NextTrack).unwrap();
        assert_eq!(app.ui.active_index(), 1);
        assert_eq!(app.ui.snapshot().position, 0.0);
        assert!(!app.ui.snapshot().is_playing);

        app.handle_action(Action::SelectTrack(0)).unwrap();
        assert_eq!(handle.loaded().as_deref(), Some("/media/video01.mp4"));

        app.handle_action(Action::PrevTrack).unwrap();
        assert_eq!(app.ui.active_index(), 1);
    }

    #[test]
    fn quit_sets_mode() {
        let (mut app, _handle) = app();
        app.handle_action(Action::QUIT).unwrap();
        assert_eq!(app.ui.get_mode(), Mode::QUIT);
    }

    #[test]
    fn fullscreen_round_trip() {
        let (mut app, _handle) = app();
        app.handle_action(Action::Fullscreen).unwrap();
        assert!(app.ui.is_fullscreen());
        app.handle_action(Action::SoftReset).unwrap();
        assert!(!app.ui.is_fullscreen());
    }
}
