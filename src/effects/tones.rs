//! Tone parameter records for the synthesizer.
//!
//! A tone is data, not sound: the audio module renders these records
//! into samples. Keeping them as plain values lets cue sequences be
//! inspected and tested without an output device.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Stock waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Square wave.
    Square,
    /// Triangle wave.
    Triangle,
    /// Sawtooth wave.
    Sawtooth,
}

/// A single synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Waveform shape.
    pub waveform: Waveform,
    /// Frequency in Hz.
    pub frequency_hz: f32,
    /// Duration of the tone.
    pub duration: Duration,
    /// Peak amplitude, 0.0..=1.0.
    pub amplitude: f32,
}

impl ToneSpec {
    /// Creates a tone.
    pub const fn new(waveform: Waveform, frequency_hz: f32, duration: Duration) -> Self {
        Self {
            waveform,
            frequency_hz,
            duration,
            amplitude: 0.25,
        }
    }

    /// Placement click for X (brighter) or O (softer).
    pub fn placement(x_player: bool) -> Self {
        let freq = if x_player { 660.0 } else { 520.0 };
        Self::new(Waveform::Triangle, freq, Duration::from_millis(90))
    }

    /// Rejection buzz for an invalid move.
    pub fn rejection() -> Self {
        Self::new(Waveform::Square, 110.0, Duration::from_millis(160))
    }

    /// The three ascending fanfare notes played after a win.
    pub fn fanfare() -> [Self; 3] {
        [
            Self::new(Waveform::Sine, 523.25, Duration::from_millis(140)), // C5
            Self::new(Waveform::Sine, 659.25, Duration::from_millis(140)), // E5
            Self::new(Waveform::Sine, 783.99, Duration::from_millis(260)), // G5
        ]
    }

    /// The two-note draw motif.
    pub fn stalemate() -> [Self; 2] {
        [
            Self::new(Waveform::Sawtooth, 392.0, Duration::from_millis(180)), // G4
            Self::new(Waveform::Sawtooth, 329.63, Duration::from_millis(260)), // E4
        ]
    }
}
