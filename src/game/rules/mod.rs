//! Win and draw detection rules.

mod draw;
mod win;

pub use draw::is_full;
pub use win::evaluate;
