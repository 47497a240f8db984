//! Per-screen setup state machine.

use tracing::{debug, info, instrument, warn};

use crate::board::BoardOracle;
use crate::setup::fields::{FieldId, SetupFields};
use crate::setup::launch::{LaunchCoordinator, MatchSetup, Navigator};
use crate::setup::validator::ConfigValidator;
use crate::setup::watcher::{Affordances, InputWatcher};

/// Where a setup session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPhase {
    /// Fields are editable; `valid` is the last verdict.
    Editing {
        /// Whether the current numeric fields form a legal board.
        valid: bool,
    },
    /// The match was handed off. Terminal.
    Launched,
}

/// One instance of the setup screen's logic.
///
/// Owns the field contents, the watcher and the affordance state. Edits move
/// between `Editing { valid: false }` and `Editing { valid: true }`; only a
/// confirm from the valid state reaches [`SetupPhase::Launched`], after which
/// the session ignores all input.
#[derive(Debug)]
pub struct SetupSession<O> {
    fields: SetupFields,
    watcher: InputWatcher<O>,
    coordinator: LaunchCoordinator,
    affordances: Affordances,
    phase: SetupPhase,
}

impl<O: BoardOracle> SetupSession<O> {
    /// Creates a session with empty fields.
    pub fn new(oracle: O) -> Self {
        Self::with_fields(oracle, SetupFields::default())
    }

    /// Creates a session with prefilled fields and runs the initial check.
    #[instrument(skip(oracle, fields))]
    pub fn with_fields(oracle: O, fields: SetupFields) -> Self {
        let mut session = Self {
            fields,
            watcher: InputWatcher::new(ConfigValidator::new(oracle)),
            coordinator: LaunchCoordinator::default(),
            affordances: Affordances::default(),
            phase: SetupPhase::Editing { valid: false },
        };
        session.revalidate();
        debug!(phase = ?session.phase, "Setup session created");
        session
    }

    /// Current phase.
    pub fn phase(&self) -> SetupPhase {
        self.phase
    }

    /// True while editing with a legal board.
    pub fn is_valid(&self) -> bool {
        self.phase == SetupPhase::Editing { valid: true }
    }

    /// True once the match has been handed off.
    pub fn is_launched(&self) -> bool {
        self.phase == SetupPhase::Launched
    }

    /// All field contents.
    pub fn fields(&self) -> &SetupFields {
        &self.fields
    }

    /// Text of one field.
    pub fn field(&self, id: FieldId) -> &str {
        self.fields.get(id)
    }

    /// Start/error affordance state.
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// Validator shared by the watcher and the launch step.
    pub fn validator(&self) -> &ConfigValidator<O> {
        self.watcher.validator()
    }

    /// Replaces a field's text.
    #[instrument(skip(self, text))]
    pub fn edit(&mut self, id: FieldId, text: impl Into<String>) -> SetupPhase {
        if self.ignore_if_launched() {
            return self.phase;
        }
        self.fields.set(id, text);
        self.field_changed(id)
    }

    /// Types one character into a field.
    #[instrument(skip(self))]
    pub fn push_char(&mut self, id: FieldId, c: char) -> SetupPhase {
        if self.ignore_if_launched() {
            return self.phase;
        }
        self.fields.push_char(id, c);
        self.field_changed(id)
    }

    /// Deletes the last character of a field.
    #[instrument(skip(self))]
    pub fn pop_char(&mut self, id: FieldId) -> SetupPhase {
        if self.ignore_if_launched() {
            return self.phase;
        }
        if self.fields.pop_char(id).is_none() {
            return self.phase;
        }
        self.field_changed(id)
    }

    /// Hands the match off if, and only if, the session is in the valid
    /// editing state.
    ///
    /// Returns the launched setup, or `None` when the confirm was a no-op.
    #[instrument(skip(self, navigator))]
    pub fn confirm(&mut self, navigator: &mut dyn Navigator) -> Option<MatchSetup> {
        match self.phase {
            SetupPhase::Launched => {
                warn!("Confirm after launch ignored");
                None
            }
            SetupPhase::Editing { valid: false } => {
                warn!("Confirm while configuration invalid ignored");
                None
            }
            SetupPhase::Editing { valid: true } => {
                match self
                    .coordinator
                    .launch(self.watcher.validator(), &self.fields, navigator)
                {
                    Ok(setup) => {
                        self.phase = SetupPhase::Launched;
                        info!("Setup launched");
                        Some(setup)
                    }
                    Err(e) => {
                        warn!(error = %e, "Fields changed under confirm, launch aborted");
                        self.revalidate();
                        None
                    }
                }
            }
        }
    }

    fn field_changed(&mut self, id: FieldId) -> SetupPhase {
        if let Some(valid) = self
            .watcher
            .on_field_edited(id, &self.fields, &mut self.affordances)
        {
            self.phase = SetupPhase::Editing { valid };
        }
        self.phase
    }

    fn revalidate(&mut self) {
        let valid = self
            .watcher
            .on_fields_changed(&self.fields, &mut self.affordances);
        self.phase = SetupPhase::Editing { valid };
    }

    fn ignore_if_launched(&self) -> bool {
        if self.is_launched() {
            debug!("Edit after launch ignored");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConnectNRules, HandoffPayload, ScreenId};

    #[derive(Debug, Default)]
    struct CountingNavigator {
        launches: usize,
    }

    impl Navigator for CountingNavigator {
        fn launch(&mut self, _target: ScreenId, _payload: HandoffPayload) {
            self.launches += 1;
        }
    }

    fn filled() -> SetupSession<ConnectNRules> {
        SetupSession::with_fields(
            ConnectNRules::default(),
            SetupFields::new("7", "6", "4", "Alice", "Bob"),
        )
    }

    #[test]
    fn starts_invalid_when_empty() {
        let s = SetupSession::new(ConnectNRules::default());
        assert_eq!(s.phase(), SetupPhase::Editing { valid: false });
        assert!(!s.affordances().start_enabled());
    }

    #[test]
    fn prefilled_fields_are_checked_at_creation() {
        let s = filled();
        assert!(s.is_valid());
        assert!(*s.affordances().start_enabled());
    }

    #[test]
    fn typing_moves_between_states() {
        let mut s = SetupSession::new(ConnectNRules::default());
        s.push_char(FieldId::Width, '7');
        s.push_char(FieldId::Height, '6');
        assert_eq!(s.push_char(FieldId::N, '4'), SetupPhase::Editing { valid: true });
        assert_eq!(s.push_char(FieldId::N, '0'), SetupPhase::Editing { valid: false });
        assert_eq!(s.pop_char(FieldId::N), SetupPhase::Editing { valid: true });
    }

    #[test]
    fn backspace_on_empty_field_is_quiet() {
        let mut s = SetupSession::new(ConnectNRules::default());
        assert_eq!(s.pop_char(FieldId::Player2), SetupPhase::Editing { valid: false });
    }

    #[test]
    fn launched_session_ignores_everything() {
        let mut s = filled();
        let mut nav = CountingNavigator::default();
        assert!(s.confirm(&mut nav).is_some());
        assert_eq!(s.edit(FieldId::Width, "x"), SetupPhase::Launched);
        assert_eq!(s.push_char(FieldId::N, '1'), SetupPhase::Launched);
        assert_eq!(s.field(FieldId::Width), "7");
        assert!(s.confirm(&mut nav).is_none());
        assert_eq!(nav.launches, 1);
    }
}
