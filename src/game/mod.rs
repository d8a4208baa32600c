//! Board state, move validation, and win/draw detection.

mod action;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod triple;
mod types;

pub use action::{Move, MoveError};
pub use engine::Game;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkBalanceInvariant,
};
pub use position::Position;
pub use triple::{Triple, TripleKind};
pub use types::{Board, GameResult, Player, Square};
