//! Game screen: receives the hand-off and shows the configured match.
//!
//! Gameplay itself lives elsewhere; this screen decodes the payload the
//! setup screen sent and displays it.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::{BoardOracle, HandoffPayload, MatchSetup, SetupError};

/// Screen shown after a match is launched.
#[derive(Debug, Getters)]
pub struct GameScreen {
    /// The match received from the setup screen.
    setup: MatchSetup,
}

impl GameScreen {
    /// Builds the screen from a hand-off payload.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the payload is missing an entry, has a
    /// mistyped entry, or describes an illegal board.
    #[instrument(skip(payload, oracle))]
    pub fn from_payload(
        payload: &HandoffPayload,
        oracle: &impl BoardOracle,
    ) -> Result<Self, SetupError> {
        let setup = MatchSetup::from_payload(payload, oracle)?;
        debug!(?setup, "Initializing GameScreen");
        Ok(Self { setup })
    }

    fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
        if name.is_empty() { fallback } else { name }
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let board = self.setup.board();
        let text = format!(
            "{} vs {}\n\nConnect {} on a {}×{} board\n\nn: New setup | q: Quit",
            Self::display_name(self.setup.player1_name(), "Player 1"),
            Self::display_name(self.setup.player2_name(), "Player 2"),
            board.n(),
            board.width(),
            board.height(),
        );
        let paragraph = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Match"));
        frame.render_widget(paragraph, frame.area());
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => ScreenTransition::NewSetup,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
