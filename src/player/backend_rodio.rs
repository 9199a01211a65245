use crate::player::{MediaBackend, MediaEvent, Notifier};
use anyhow::{Result, anyhow};
use log::{debug, warn};
use rodio::decoder::builder::SeekMode;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

/// Audio output through the default device.
///
/// Mute is realized as zero output volume; the stored volume is kept so
/// unmuting restores it.
pub struct RodioMedia {
    sink: Sink,
    _stream: OutputStream,
    notifier: Notifier,

    source: Option<PathBuf>,
    duration: f64,
    volume: f64,
    muted: bool,

    last_reported: f64,
    ended: bool,
}

impl RodioMedia {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.pause();

        Ok(Self {
            sink,
            _stream: stream,
            notifier: Notifier::new(),

            source: None,
            duration: 0.0,
            volume: 1.0,
            muted: false,

            last_reported: 0.0,
            ended: false,
        })
    }

    fn apply_output_volume(&self) {
        let volume = match self.muted {
            true => 0.0,
            false => self.volume as f32,
        };
        self.sink.set_volume(volume);
    }

    fn queue(&mut self, path: &Path) -> Result<Option<Duration>> {
        let source = decode(path)?;
        let total = source.total_duration();

        self.sink.clear();
        self.sink.append(source);
        self.sink.pause();
        self.ended = false;
        self.last_reported = 0.0;

        Ok(total)
    }
}

impl MediaBackend for RodioMedia {
    fn load(&mut self, source: &str) -> Result<()> {
        // The old source stops even when the new one fails to decode
        self.sink.clear();
        self.sink.pause();
        self.source = None;
        self.duration = 0.0;
        self.ended = false;
        self.last_reported = 0.0;

        let path = PathBuf::from(source);
        let total = self.queue(&path)?;
        self.source = Some(path);

        // Streams without a known length never announce one
        if let Some(total) = total {
            self.duration = total.as_secs_f64();
            self.notifier.emit(MediaEvent::MetadataReady(self.duration));
        }
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let path = self
            .source
            .clone()
            .ok_or_else(|| anyhow!("No source loaded"))?;

        if self.sink.empty() {
            debug!("source drained, queueing {} again", path.display());
            self.queue(&path)?;
        }

        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused() || self.sink.empty()
    }

    fn position(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn set_position(&mut self, secs: f64) {
        if self.source.is_none() || !secs.is_finite() {
            return;
        }

        let target = Duration::from_secs_f64(secs.max(0.0));
        match self.sink.try_seek(target) {
            Ok(()) => {
                let position = self.position();
                self.last_reported = position;
                self.notifier.emit(MediaEvent::TimeAdvanced(position));
            }
            Err(e) => warn!("seek to {secs:.2}s failed: {e}"),
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.apply_output_volume();
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_output_volume();
    }

    fn tick(&mut self) {
        if self.source.is_none() || self.ended {
            return;
        }

        // Checking `ended` ensures the end is reported once
        if self.sink.empty() {
            self.ended = true;
            self.notifier.emit(MediaEvent::TimeAdvanced(self.duration));
            self.notifier.emit(MediaEvent::Ended);
            return;
        }

        let position = self.position();
        if position != self.last_reported {
            self.last_reported = position;
            self.notifier.emit(MediaEvent::TimeAdvanced(position));
        }
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seek_mode(SeekMode::Fastest)
        .with_seekable(true);

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "m4a" | "m4b" | "m4v" | "mp4" | "mov" => "audio/mp4",
            "bit" | "mpga" => "mp3",
            "mka" | "mkv" | "webm" => "audio/matroska",
            "oga" | "ogv" | "ogx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}
