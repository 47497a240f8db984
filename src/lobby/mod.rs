//! Lobby system: terminal screens for board setup and the launched match.

mod controller;
mod screen;
mod screens;

pub use controller::{ActiveScreen, LobbyController};
pub use screen::{Screen, ScreenTransition, TransitionOutbox};
pub use screens::{GameScreen, SetupScreen};
