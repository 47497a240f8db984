//! Error types for board setup and settings loading.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::FieldId;

/// What went wrong while turning setup input into a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupErrorKind {
    /// A numeric field did not hold a base-10 integer.
    #[display("{} is not a whole number: {:?}", field, text)]
    Parse {
        /// The field that failed to parse.
        field: FieldId,
        /// The raw text that was rejected.
        text: String,
    },
    /// The board oracle refused the triple.
    #[display("no legal board is {}x{} with n = {}", width, height, n)]
    Illegal {
        /// Requested board width.
        width: i32,
        /// Requested board height.
        height: i32,
        /// Requested run length.
        n: i32,
    },
    /// A hand-off payload lacked one of its keys.
    #[display("payload is missing key {:?}", _0)]
    MissingKey(&'static str),
    /// A hand-off payload held a value of the wrong type.
    #[display("payload key {:?} has the wrong type", _0)]
    WrongType(&'static str),
}

/// Setup error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Setup error: {} at {}:{}", kind, file, line)]
pub struct SetupError {
    /// What failed.
    pub kind: SetupErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SetupErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the error came from unparseable text.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, SetupErrorKind::Parse { .. })
    }

    /// Returns true if the oracle rejected well-formed numbers.
    pub fn is_illegal(&self) -> bool {
        matches!(self.kind, SetupErrorKind::Illegal { .. })
    }
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for SettingsError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse settings: {}", err))
    }
}
