//! Board setup: validation, change watching and the hand-off to the game.

mod fields;
mod launch;
mod session;
mod validator;
mod watcher;

pub use fields::{FieldId, SetupFields};
pub use launch::{
    HandoffPayload, LaunchCoordinator, MatchSetup, Navigator, PayloadValue, ScreenId,
};
pub use session::{SetupPhase, SetupSession};
pub use validator::{ConfigValidator, parse_field};
pub use watcher::{Affordances, InputWatcher, SetupView};
