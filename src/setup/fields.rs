//! The five text inputs on the setup screen.

use strum::{Display, EnumIter, IntoEnumIterator};

/// Identifies one setup input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FieldId {
    /// Board width.
    #[strum(to_string = "Width")]
    Width,
    /// Board height.
    #[strum(to_string = "Height")]
    Height,
    /// Run length needed to win.
    #[strum(to_string = "Connect N")]
    N,
    /// First player's name.
    #[strum(to_string = "Player 1")]
    Player1,
    /// Second player's name.
    #[strum(to_string = "Player 2")]
    Player2,
}

impl FieldId {
    /// Returns true for the three fields that gate validity.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Width | Self::Height | Self::N)
    }

    /// Key under which this field travels in the hand-off payload.
    pub fn payload_key(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::N => "n",
            Self::Player1 => "player1",
            Self::Player2 => "player2",
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The field before this one, wrapping around.
    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Current raw contents of every setup input.
///
/// Nothing here is validated; numeric fields may hold any text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupFields {
    width: String,
    height: String,
    n: String,
    player1: String,
    player2: String,
}

impl SetupFields {
    /// Builds a field set from five strings, in screen order.
    pub fn new(
        width: impl Into<String>,
        height: impl Into<String>,
        n: impl Into<String>,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            n: n.into(),
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Current text of a field.
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::Width => &self.width,
            FieldId::Height => &self.height,
            FieldId::N => &self.n,
            FieldId::Player1 => &self.player1,
            FieldId::Player2 => &self.player2,
        }
    }

    /// Replaces the text of a field.
    pub fn set(&mut self, id: FieldId, text: impl Into<String>) {
        *self.slot_mut(id) = text.into();
    }

    /// Appends one character to a field.
    pub fn push_char(&mut self, id: FieldId, c: char) {
        self.slot_mut(id).push(c);
    }

    /// Removes the last character of a field, if any.
    pub fn pop_char(&mut self, id: FieldId) -> Option<char> {
        self.slot_mut(id).pop()
    }

    fn slot_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::Width => &mut self.width,
            FieldId::Height => &mut self.height,
            FieldId::N => &mut self.n,
            FieldId::Player1 => &mut self.player1,
            FieldId::Player2 => &mut self.player2,
        }
    }
}
