//! Timed cue sequences for visual and audio effects.
//!
//! The core returns an explicit ordered list of (delay, effect) pairs;
//! the shell schedules and fires them. Delays carry no correctness
//! obligation: game state is fully computed before any cue fires, so a
//! shell that drops or reorders cues only degrades polish.

use super::tones::ToneSpec;
use crate::game::{Player, Position};
use crate::geometry::LineDescriptor;
use std::time::Duration;

/// Delay between showing the strike line and playing its sound.
pub const STRIKE_TONE_DELAY: Duration = Duration::from_millis(500);

/// How long a cell ripple stays visible.
pub const RIPPLE_DURATION: Duration = Duration::from_millis(400);

/// A single presentational effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    /// Draw the strike line across the winning triple.
    Strike(LineDescriptor),
    /// Play a synthesized tone.
    Tone(ToneSpec),
    /// Flash a ripple highlight on a cell.
    Ripple(Position),
    /// Advance the accent hue by the given number of degrees.
    HueShift(f32),
}

/// A cue paired with its delay from sequence start.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedCue {
    /// Delay from the moment the sequence is scheduled.
    pub delay: Duration,
    /// The effect to fire.
    pub cue: Cue,
}

impl TimedCue {
    fn at(delay: Duration, cue: Cue) -> Self {
        Self { delay, cue }
    }

    fn immediate(cue: Cue) -> Self {
        Self::at(Duration::ZERO, cue)
    }
}

/// Cues for an accepted, non-terminal move.
pub fn placement(position: Position, player: Player) -> Vec<TimedCue> {
    vec![
        TimedCue::immediate(Cue::Ripple(position)),
        TimedCue::immediate(Cue::Tone(ToneSpec::placement(player == Player::X))),
    ]
}

/// Cues for a rejected move.
pub fn rejection() -> Vec<TimedCue> {
    vec![TimedCue::immediate(Cue::Tone(ToneSpec::rejection()))]
}

/// Cues for a win: strike line first, fanfare starting 500ms later,
/// then a hue shift once the fanfare lands.
pub fn victory(line: LineDescriptor) -> Vec<TimedCue> {
    let [first, second, third] = ToneSpec::fanfare();
    vec![
        TimedCue::immediate(Cue::Strike(line)),
        TimedCue::at(STRIKE_TONE_DELAY, Cue::Tone(first)),
        TimedCue::at(STRIKE_TONE_DELAY + Duration::from_millis(150), Cue::Tone(second)),
        TimedCue::at(STRIKE_TONE_DELAY + Duration::from_millis(300), Cue::Tone(third)),
        TimedCue::at(STRIKE_TONE_DELAY + Duration::from_millis(600), Cue::HueShift(60.0)),
    ]
}

/// Cues for a draw.
pub fn stalemate() -> Vec<TimedCue> {
    let [first, second] = ToneSpec::stalemate();
    vec![
        TimedCue::immediate(Cue::Tone(first)),
        TimedCue::at(Duration::from_millis(200), Cue::Tone(second)),
    ]
}
