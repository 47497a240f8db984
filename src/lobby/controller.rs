//! Lobby controller: the state machine driving the setup and game screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, error, info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{GameScreen, SetupScreen};
use crate::{ScreenId, Settings};

/// Active screen in the lobby state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Board setup.
    Setup(SetupScreen),
    /// Launched match.
    Game(GameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Setup(s) => s,
            Self::Game(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Setup(s) => s,
            Self::Game(s) => s,
        }
    }

    /// Identifier of the screen.
    pub fn id(&self) -> ScreenId {
        match self {
            Self::Setup(_) => ScreenId::Setup,
            Self::Game(_) => ScreenId::Game,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop, or feed keys
/// through [`LobbyController::handle_key`] directly.
#[derive(Debug, Getters)]
pub struct LobbyController {
    /// Rules and prefilled fields for new setup screens.
    settings: Settings,
    /// Screen currently shown.
    screen: ActiveScreen,
}

impl LobbyController {
    /// Creates a controller showing a fresh setup screen.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        info!("Creating LobbyController");
        let screen = ActiveScreen::Setup(Self::fresh_setup(&settings));
        Self { settings, screen }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame);
    }

    /// Feeds one key to the active screen.
    ///
    /// Returns `false` once the user has quit.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return true;
        }
        let transition = self.screen.as_screen_mut().handle_key(key);
        self.apply_transition(transition)
    }

    /// Runs the lobby event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && !self.handle_key(key)
            {
                info!("Lobby quitting");
                return Ok(());
            }
        }
    }

    /// Applies a screen transition; returns `false` on quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => true,
            ScreenTransition::Navigate {
                target: ScreenId::Game,
                payload,
            } => {
                debug!(entries = payload.len(), "Navigating to Game");
                match GameScreen::from_payload(&payload, self.settings.rules()) {
                    Ok(game) => self.screen = ActiveScreen::Game(game),
                    Err(e) => {
                        error!(error = %e, "Hand-off rejected, returning to setup");
                        self.screen = ActiveScreen::Setup(Self::fresh_setup(&self.settings));
                    }
                }
                true
            }
            ScreenTransition::Navigate {
                target: ScreenId::Setup,
                ..
            }
            | ScreenTransition::NewSetup => {
                info!("Navigating to Setup");
                self.screen = ActiveScreen::Setup(Self::fresh_setup(&self.settings));
                true
            }
            ScreenTransition::Quit => false,
        }
    }

    fn fresh_setup(settings: &Settings) -> SetupScreen {
        SetupScreen::new(*settings.rules(), settings.defaults().to_fields())
    }
}
