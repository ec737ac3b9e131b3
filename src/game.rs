//! Game engine: owns the simulation state and advances it once per frame
//!
//! Hosts hold an [`InputChannel`] handle for writing key state and read the
//! state (or a [`FrameView`]) back after each [`Game::advance`].

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::input::InputChannel;
use crate::sim::{FrameView, GameEvent, GameState, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: Arc<InputChannel>,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let state = GameState::new(config)?;
        log::info!(
            "Game initialized: {}x{} board, {} bricks",
            state.config.board_width,
            state.config.board_height,
            state.total_bricks()
        );
        Ok(Self {
            state,
            input: Arc::new(InputChannel::new()),
        })
    }

    /// Handle for the host's input writer
    pub fn input(&self) -> Arc<InputChannel> {
        Arc::clone(&self.input)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> FrameView {
        FrameView::from(&self.state)
    }

    /// Run one tick with the current input and return what happened
    pub fn advance(&mut self) -> &[GameEvent] {
        let input = self.input.take_tick_input();
        tick(&mut self.state, &input);

        if self.state.events.contains(&GameEvent::Reset) {
            self.input.clear_held();
        }
        &self.state.events
    }
}
