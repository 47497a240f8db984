//! Screen trait and transition type for the lobby state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::{debug, warn};

use crate::{HandoffPayload, Navigator, ScreenId};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::LobbyController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Replace the current screen with `target`, passing `payload`.
    Navigate {
        /// Screen to open.
        target: ScreenId,
        /// Extras for the new screen.
        payload: HandoffPayload,
    },
    /// Open a fresh setup screen.
    NewSetup,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}

/// [`Navigator`] that records a launch as a pending [`ScreenTransition`].
#[derive(Debug, Default)]
pub struct TransitionOutbox {
    pending: Option<ScreenTransition>,
}

impl TransitionOutbox {
    /// Takes the recorded transition, or [`ScreenTransition::Stay`].
    pub fn take(&mut self) -> ScreenTransition {
        self.pending.take().unwrap_or(ScreenTransition::Stay)
    }
}

impl Navigator for TransitionOutbox {
    fn launch(&mut self, target: ScreenId, payload: HandoffPayload) {
        if self.pending.is_some() {
            warn!(%target, "Outbox already holds a transition, replacing it");
        }
        debug!(%target, entries = payload.len(), "Transition queued");
        self.pending = Some(ScreenTransition::Navigate { target, payload });
    }
}
