//! Hand-off of a validated setup to the next stage.

use std::collections::BTreeMap;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, instrument};

use crate::board::{BoardConfig, BoardOracle};
use crate::setup::fields::{FieldId, SetupFields};
use crate::setup::validator::ConfigValidator;
use crate::{SetupError, SetupErrorKind};

/// Screens a payload can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ScreenId {
    /// The board setup screen.
    Setup,
    /// The gameplay screen.
    Game,
}

/// A single payload value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    /// An integer entry.
    Int(i32),
    /// A string entry.
    Text(String),
}

/// Key/value extras carried with a screen transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandoffPayload {
    entries: BTreeMap<String, PayloadValue>,
}

impl HandoffPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an integer under `key`.
    pub fn put_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_string(), PayloadValue::Int(value));
    }

    /// Stores a string under `key`.
    pub fn put_text(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_string(), PayloadValue::Text(value.into()));
    }

    /// Raw value under `key`.
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.entries.get(key)
    }

    /// Reads an integer entry.
    ///
    /// # Errors
    ///
    /// `MissingKey` if absent, `WrongType` if the entry is a string.
    pub fn get_int(&self, key: &'static str) -> Result<i32, SetupError> {
        match self.entries.get(key) {
            Some(PayloadValue::Int(v)) => Ok(*v),
            Some(PayloadValue::Text(_)) => Err(SetupError::new(SetupErrorKind::WrongType(key))),
            None => Err(SetupError::new(SetupErrorKind::MissingKey(key))),
        }
    }

    /// Reads a string entry.
    ///
    /// # Errors
    ///
    /// `MissingKey` if absent, `WrongType` if the entry is an integer.
    pub fn get_text(&self, key: &'static str) -> Result<&str, SetupError> {
        match self.entries.get(key) {
            Some(PayloadValue::Text(v)) => Ok(v),
            Some(PayloadValue::Int(_)) => Err(SetupError::new(SetupErrorKind::WrongType(key))),
            None => Err(SetupError::new(SetupErrorKind::MissingKey(key))),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serializes the payload as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validated board plus both player names, as handed to the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchSetup {
    /// The accepted board.
    board: BoardConfig,
    /// First player's name, verbatim.
    player1_name: String,
    /// Second player's name, verbatim.
    player2_name: String,
}

impl MatchSetup {
    /// Creates a match setup. Names are kept exactly as given.
    pub fn new(
        board: BoardConfig,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self {
            board,
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
        }
    }

    /// Writes the five hand-off entries.
    #[instrument(skip(self))]
    pub fn to_payload(&self) -> HandoffPayload {
        let mut payload = HandoffPayload::new();
        payload.put_int(FieldId::Width.payload_key(), *self.board.width());
        payload.put_int(FieldId::Height.payload_key(), *self.board.height());
        payload.put_int(FieldId::N.payload_key(), *self.board.n());
        payload.put_text(FieldId::Player1.payload_key(), self.player1_name.clone());
        payload.put_text(FieldId::Player2.payload_key(), self.player2_name.clone());
        payload
    }

    /// Reads a match setup back from a payload, re-checking legality.
    ///
    /// # Errors
    ///
    /// `MissingKey`/`WrongType` for malformed payloads, `Illegal` if the
    /// oracle refuses the board.
    #[instrument(skip(payload, oracle))]
    pub fn from_payload(
        payload: &HandoffPayload,
        oracle: &impl BoardOracle,
    ) -> Result<Self, SetupError> {
        let width = payload.get_int(FieldId::Width.payload_key())?;
        let height = payload.get_int(FieldId::Height.payload_key())?;
        let n = payload.get_int(FieldId::N.payload_key())?;
        let player1 = payload.get_text(FieldId::Player1.payload_key())?;
        let player2 = payload.get_text(FieldId::Player2.payload_key())?;
        let board = oracle
            .try_build(width, height, n)
            .ok_or_else(|| SetupError::new(SetupErrorKind::Illegal { width, height, n }))?;
        debug!(?board, "Match setup decoded from payload");
        Ok(Self::new(board, player1, player2))
    }
}

/// Moves the UI to another screen, carrying a payload.
pub trait Navigator {
    /// Transfers control to `target`. The caller does not resume.
    fn launch(&mut self, target: ScreenId, payload: HandoffPayload);
}

/// Packages the current fields and sends them to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCoordinator {
    target: ScreenId,
}

impl Default for LaunchCoordinator {
    fn default() -> Self {
        Self {
            target: ScreenId::Game,
        }
    }
}

impl LaunchCoordinator {
    /// Screen that receives the hand-off.
    pub fn target(&self) -> ScreenId {
        self.target
    }

    /// Re-reads all five fields, builds a [`MatchSetup`] and hands it off.
    ///
    /// The navigator is only called once the whole record has been built.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if the numeric fields no longer describe
    /// a legal board; nothing is sent in that case.
    #[instrument(skip(self, validator, fields, navigator))]
    pub fn launch<O: BoardOracle>(
        &self,
        validator: &ConfigValidator<O>,
        fields: &SetupFields,
        navigator: &mut dyn Navigator,
    ) -> Result<MatchSetup, SetupError> {
        let board = validator.check_fields(fields)?;
        let setup = MatchSetup::new(
            board,
            fields.get(FieldId::Player1),
            fields.get(FieldId::Player2),
        );
        info!(
            width = *board.width(),
            height = *board.height(),
            n = *board.n(),
            target = %self.target,
            "Launching match"
        );
        navigator.launch(self.target, setup.to_payload());
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectNRules;

    #[derive(Debug, Default)]
    struct Captured(Vec<(ScreenId, HandoffPayload)>);

    impl Navigator for Captured {
        fn launch(&mut self, target: ScreenId, payload: HandoffPayload) {
            self.0.push((target, payload));
        }
    }

    fn board(w: i32, h: i32, n: i32) -> BoardConfig {
        ConnectNRules::default()
            .try_build(w, h, n)
            .expect("test board is legal")
    }

    #[test]
    fn payload_has_exactly_five_typed_entries() {
        let payload = MatchSetup::new(board(7, 6, 4), "Alice", "Bob").to_payload();
        assert_eq!(payload.len(), 5);
        assert_eq!(
            payload.keys().collect::<Vec<_>>(),
            vec!["height", "n", "player1", "player2", "width"]
        );
        assert_eq!(payload.get_int("width").unwrap(), 7);
        assert_eq!(payload.get_int("height").unwrap(), 6);
        assert_eq!(payload.get_int("n").unwrap(), 4);
        assert_eq!(payload.get_text("player1").unwrap(), "Alice");
        assert_eq!(payload.get_text("player2").unwrap(), "Bob");
    }

    #[test]
    fn payload_type_mismatch_is_reported() {
        let payload = MatchSetup::new(board(7, 6, 4), "", "").to_payload();
        let err = payload.get_text("width").unwrap_err();
        assert_eq!(err.kind, SetupErrorKind::WrongType("width"));
        let err = HandoffPayload::new().get_int("n").unwrap_err();
        assert_eq!(err.kind, SetupErrorKind::MissingKey("n"));
    }

    #[test]
    fn payload_json_is_flat_object() {
        let payload = MatchSetup::new(board(7, 6, 4), "Alice", "").to_payload();
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(value["width"], 7);
        assert_eq!(value["player1"], "Alice");
        assert_eq!(value["player2"], "");
    }

    #[test]
    fn from_payload_rechecks_legality() {
        let mut payload = HandoffPayload::new();
        payload.put_int("width", 7);
        payload.put_int("height", 6);
        payload.put_int("n", 9);
        payload.put_text("player1", "a");
        payload.put_text("player2", "b");
        let err = MatchSetup::from_payload(&payload, &ConnectNRules::default()).unwrap_err();
        assert!(err.is_illegal());
    }

    #[test]
    fn coordinator_sends_nothing_when_fields_are_bad() {
        let validator = ConfigValidator::new(ConnectNRules::default());
        let fields = SetupFields::new("7", "6", "", "a", "b");
        let mut nav = Captured::default();
        let result = LaunchCoordinator::default().launch(&validator, &fields, &mut nav);
        assert!(result.is_err());
        assert!(nav.0.is_empty());
    }

    #[test]
    fn coordinator_targets_game_screen() {
        let validator = ConfigValidator::new(ConnectNRules::default());
        let fields = SetupFields::new("8", "8", "5", " x ", "");
        let mut nav = Captured::default();
        let setup = LaunchCoordinator::default()
            .launch(&validator, &fields, &mut nav)
            .unwrap();
        assert_eq!(setup.player1_name(), " x ");
        assert_eq!(nav.0.len(), 1);
        assert_eq!(nav.0[0].0, ScreenId::Game);
        assert_eq!(nav.0[0].1, setup.to_payload());
    }
}
