//! Best-effort tone playback.
//!
//! Tones are synthesized on the fly from [`ToneSpec`] records; there are
//! no asset files. If no output device is available the player simply
//! reports unavailable and the game runs silently.

use crate::effects::{ToneSpec, Waveform};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use std::f32::consts::{PI, TAU};
use std::time::Duration;
use tracing::{debug, warn};

const SAMPLE_RATE: u32 = 44_100;

/// A finite tone rendered as mono f32 samples.
///
/// A short attack/release envelope avoids clicks at tone boundaries.
#[derive(Debug, Clone)]
pub struct ToneWave {
    spec: ToneSpec,
    phase: f32,
    phase_step: f32,
    frame: u32,
    total_frames: u32,
}

impl ToneWave {
    /// Creates a sample source for the given tone.
    pub fn new(spec: ToneSpec) -> Self {
        let total_frames =
            ((spec.duration.as_millis() as u64 * SAMPLE_RATE as u64) / 1000).max(1) as u32;
        Self {
            spec,
            phase: 0.0,
            phase_step: TAU * spec.frequency_hz / SAMPLE_RATE as f32,
            frame: 0,
            total_frames,
        }
    }

    fn waveform_sample(&self) -> f32 {
        match self.spec.waveform {
            Waveform::Sine => self.phase.sin(),
            Waveform::Square => {
                if self.phase < PI {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => (2.0 / PI) * (self.phase - PI).abs() - 1.0,
            Waveform::Sawtooth => 2.0 * (self.phase / TAU) - 1.0,
        }
    }

    fn envelope(&self) -> f32 {
        // ~5ms fade in and out.
        let fade_frames = (SAMPLE_RATE / 200).min(self.total_frames / 4).max(1);
        let frames_left = self.total_frames.saturating_sub(self.frame);

        if self.frame < fade_frames {
            self.frame as f32 / fade_frames as f32
        } else if frames_left <= fade_frames {
            frames_left as f32 / fade_frames as f32
        } else {
            1.0
        }
    }
}

impl Iterator for ToneWave {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.total_frames {
            return None;
        }

        let sample = self.waveform_sample() * self.spec.amplitude * self.envelope();

        self.phase += self.phase_step;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        self.frame += 1;

        Some(sample)
    }
}

impl Source for ToneWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.spec.duration)
    }
}

/// Handle to the audio output device.
pub struct SoundPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl SoundPlayer {
    /// Opens the default output device.
    ///
    /// Returns `None` if no device is available; callers treat that as
    /// "muted" rather than an error.
    pub fn new() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(err) => {
                warn!(error = %err, "No audio output device; running silently");
                None
            }
        }
    }

    /// Plays a tone, fire-and-forget.
    pub fn play(&self, spec: ToneSpec) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        debug!(frequency_hz = spec.frequency_hz, "Playing tone");
        sink.append(ToneWave::new(spec));
        sink.detach();
    }
}

impl std::fmt::Debug for SoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundPlayer").finish_non_exhaustive()
    }
}
