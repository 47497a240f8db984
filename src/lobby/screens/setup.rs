//! Setup screen: enter board size, run length and player names.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition, TransitionOutbox};
use crate::{ConnectNRules, FieldId, SetupFields, SetupSession};

/// State for the setup screen.
///
/// Wraps one [`SetupSession`]; the session is discarded with the screen once
/// the match launches.
#[derive(Debug, Getters)]
pub struct SetupScreen {
    /// Field contents and validity state.
    session: SetupSession<ConnectNRules>,
    /// Field receiving keystrokes.
    focus: FieldId,
}

impl SetupScreen {
    /// Creates a setup screen with the given rules and prefilled fields.
    #[instrument(skip(fields))]
    pub fn new(rules: ConnectNRules, fields: SetupFields) -> Self {
        let session = SetupSession::with_fields(rules, fields);
        info!(valid = session.is_valid(), "Initializing SetupScreen");
        Self {
            session,
            focus: FieldId::Width,
        }
    }

    /// Tries to launch the match from the current fields.
    #[instrument(skip(self))]
    fn confirm(&mut self) -> ScreenTransition {
        let mut outbox = TransitionOutbox::default();
        match self.session.confirm(&mut outbox) {
            Some(setup) => {
                info!(
                    player1 = %setup.player1_name(),
                    player2 = %setup.player2_name(),
                    "Match confirmed"
                );
                outbox.take()
            }
            None => {
                debug!("Start pressed while disabled");
                ScreenTransition::Stay
            }
        }
    }

    fn field_style(&self, id: FieldId) -> Style {
        if id == self.focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let mut constraints = vec![Constraint::Length(3), Constraint::Length(3)];
        constraints.extend(FieldId::iter().map(|_| Constraint::Length(3)));
        constraints.extend([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ]);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new("Connect-N Game Setup")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let rules = Paragraph::new(self.session.validator().oracle().describe())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Rules"));
        frame.render_widget(rules, chunks[1]);

        for (i, id) in FieldId::iter().enumerate() {
            let marker = if id == self.focus { "> " } else { "  " };
            let input = Paragraph::new(format!("{}{}", marker, self.session.field(id)))
                .style(self.field_style(id))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.field_style(id))
                        .title(id.to_string()),
                );
            frame.render_widget(input, chunks[2 + i]);
        }

        let base = 2 + FieldId::iter().count();
        let affordances = self.session.affordances();

        let (status_text, status_style) = if *affordances.error_visible() {
            (
                "Invalid board configuration",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            ("", Style::default())
        };
        let status = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[base]);

        let start_style = if *affordances.start_enabled() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let start = Paragraph::new("[ Start Game ]")
            .style(start_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(start, chunks[base + 1]);

        let help = Paragraph::new("Tab/↑↓: Field | Type to edit | Enter: Start | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[base + 2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ScreenTransition::Quit;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.session.pop_char(self.focus);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.session.push_char(self.focus, c);
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.confirm(),
            KeyCode::Esc => {
                info!("Leaving setup screen");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
