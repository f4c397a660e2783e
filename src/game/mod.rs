//! Game session lifecycle
//!
//! Holds the secret target, the guess history and the solved flag.

mod session;

pub use session::{GameError, GameState, Session};
