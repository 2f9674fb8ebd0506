//! Sound effects
//!
//! The catch sound comes from a WAV file when one is present, otherwise a
//! generated tone. Whatever goes wrong at startup, the game falls back to a
//! silent player and keeps running.

use std::f32::consts::TAU;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

use crate::settings::Settings;

/// Output sample rate for generated clips
pub const SAMPLE_RATE: u32 = 44_100;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Paddle caught a ball
    Catch,
    /// Session ended
    GameOver,
}

/// Anything that can play the game's sound effects
pub trait SoundPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Player used when no audio is available; every call is a no-op
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _effect: SoundEffect) {}
}

/// Audio startup failures. All of them are recovered by going silent.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode sound: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("sound file contains no samples")]
    Empty,
}

/// Interleaved f32 samples ready to hand to the mixer
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl Clip {
    /// Stereo sine tone
    pub fn tone(frequency: f32, duration: f32, amplitude: f32) -> Self {
        let frames = (SAMPLE_RATE as f32 * duration) as usize;
        let samples = (0..frames)
            .flat_map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                let s = (TAU * frequency * t).sin() * amplitude;
                [s, s]
            })
            .collect();

        Self {
            channels: 2,
            sample_rate: SAMPLE_RATE,
            samples,
        }
    }

    /// Mono tone gliding from `start` to `end` Hz with an exponential fade
    pub fn sweep(start: f32, end: f32, duration: f32, amplitude: f32) -> Self {
        let frames = (SAMPLE_RATE as f32 * duration) as usize;
        let mut phase = 0.0f32;
        let samples = (0..frames)
            .map(|i| {
                let progress = i as f32 / frames as f32;
                let freq = start + (end - start) * progress;
                phase = (phase + TAU * freq / SAMPLE_RATE as f32) % TAU;
                let envelope = (-progress * 4.0).exp();
                phase.sin() * envelope * amplitude
            })
            .collect();

        Self {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            samples,
        }
    }

    /// Decode a sound file fully into memory
    pub fn from_file(path: &Path) -> Result<Self, AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoder = Decoder::new(BufReader::new(file))?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.convert_samples().collect();
        if samples.is_empty() {
            return Err(AudioError::Empty);
        }

        Ok(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    /// Playback length in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / (self.channels.max(1) as u32 * self.sample_rate) as f32
    }
}

/// Catch clip from `path`, or a generated 440 Hz beep when the file is absent
pub fn load_catch_clip(path: &Path) -> Result<Clip, AudioError> {
    if !path.exists() {
        log::info!(
            "{} not found, using generated catch tone",
            path.display()
        );
        return Ok(Clip::tone(440.0, 0.5, 0.5));
    }
    let clip = Clip::from_file(path)?;
    log::info!(
        "Loaded catch sound {} ({:.2}s)",
        path.display(),
        clip.duration_secs()
    );
    Ok(clip)
}

/// Player backed by the default audio output device
pub struct RodioPlayer {
    // Must stay alive for the handle to keep working
    _stream: OutputStream,
    handle: OutputStreamHandle,
    catch: Clip,
    game_over: Clip,
    volume: f32,
}

impl RodioPlayer {
    pub fn new(settings: &Settings) -> Result<Self, AudioError> {
        let catch = load_catch_clip(Path::new(&settings.catch_sound_path))?;
        let (stream, handle) = OutputStream::try_default()?;

        Ok(Self {
            _stream: stream,
            handle,
            catch,
            game_over: Clip::sweep(440.0, 110.0, 0.6, 0.4),
            volume: settings.effective_volume(),
        })
    }

    fn clip(&self, effect: SoundEffect) -> &Clip {
        match effect {
            SoundEffect::Catch => &self.catch,
            SoundEffect::GameOver => &self.game_over,
        }
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, effect: SoundEffect) {
        let clip = self.clip(effect);
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(self.volume);
                sink.append(SamplesBuffer::new(
                    clip.channels,
                    clip.sample_rate,
                    clip.samples.clone(),
                ));
                sink.detach();
            }
            Err(e) => log::warn!("Failed to play {:?}: {}", effect, e),
        }
    }
}

/// Pick the player for this process. Never fails: any audio problem yields
/// a `SilentPlayer`.
pub fn load_player(settings: &Settings) -> Box<dyn SoundPlayer> {
    if settings.effective_volume() <= 0.0 {
        log::info!("Audio muted");
        return Box::new(SilentPlayer);
    }

    match RodioPlayer::new(settings) {
        Ok(player) => Box::new(player),
        Err(e) => {
            log::warn!("Audio disabled: {}", e);
            Box::new(SilentPlayer)
        }
    }
}
