//! Connect-N setup library - board configuration and hand-off
//!
//! Collects a board width, height and run length `n` plus two player names,
//! checks the board against a pluggable legality oracle, and hands a
//! validated match to the game screen exactly once.
//!
//! # Architecture
//!
//! - **Board**: [`BoardConfig`] and the [`BoardOracle`] trait, with the
//!   standard [`ConnectNRules`]
//! - **Setup**: [`ConfigValidator`], [`InputWatcher`], [`LaunchCoordinator`]
//!   and the per-screen [`SetupSession`] state machine
//! - **Lobby**: terminal screens and the [`LobbyController`] event loop
//! - **Settings**: TOML-loaded rule bounds and prefilled fields
//!
//! # Example
//!
//! ```
//! use connectn_setup::{ConnectNRules, FieldId, SetupSession, TransitionOutbox};
//!
//! let mut session = SetupSession::new(ConnectNRules::default());
//! session.edit(FieldId::Width, "7");
//! session.edit(FieldId::Height, "6");
//! session.edit(FieldId::N, "4");
//! assert!(session.is_valid());
//!
//! let mut outbox = TransitionOutbox::default();
//! let setup = session.confirm(&mut outbox).expect("valid setup launches");
//! assert_eq!(*setup.board().n(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod lobby;
mod settings;
mod setup;

// Crate-level exports - Board
pub use board::{BoardConfig, BoardOracle, ConnectNRules};

// Crate-level exports - Errors
pub use error::{SettingsError, SetupError, SetupErrorKind};

// Crate-level exports - Setup flow
pub use setup::{
    Affordances, ConfigValidator, FieldId, HandoffPayload, InputWatcher, LaunchCoordinator,
    MatchSetup, Navigator, PayloadValue, ScreenId, SetupFields, SetupPhase, SetupSession,
    SetupView, parse_field,
};

// Crate-level exports - Lobby
pub use lobby::{
    ActiveScreen, GameScreen, LobbyController, Screen, ScreenTransition, SetupScreen,
    TransitionOutbox,
};

// Crate-level exports - Settings
pub use settings::{SetupDefaults, Settings};
