//! Presentational effects: tone parameters and timed cue sequences.

mod cues;
mod tones;

pub use cues::{
    Cue, RIPPLE_DURATION, STRIKE_TONE_DELAY, TimedCue, placement, rejection, stalemate, victory,
};
pub use tones::{ToneSpec, Waveform};
