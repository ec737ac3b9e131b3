//! WebAssembly bridge
//!
//! Thin wrapper so a page script can drive the game: forward `keydown`/`keyup`
//! key names, call `advance()` from `requestAnimationFrame`, and draw the
//! returned frame JSON on a canvas.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::game::Game;
use crate::input::{InputChannel, Key};

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    input: Arc<InputChannel>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game from an optional JSON config (defaults when absent)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        console_error_panic_hook::set_once();
        // Already initialized if the page builds more than one game
        let _ = console_log::init_with_level(log::Level::Info);

        let config = match config_json {
            Some(json) => Config::from_json(&json),
            None => Ok(Config::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Game::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let input = game.input();
        Ok(WebGame { game, input })
    }

    /// Returns true if the key is one the game uses (so the page can preventDefault)
    pub fn key_down(&self, key: &str) -> bool {
        match Key::from_name(key) {
            Some(key) => {
                self.input.press(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&self, key: &str) -> bool {
        match Key::from_name(key) {
            Some(key) => {
                self.input.release(key);
                true
            }
            None => false,
        }
    }

    pub fn start_or_reset(&self) {
        self.input.request_start_or_reset();
    }

    /// Advance one tick and return the frame to draw as JSON
    pub fn advance(&mut self) -> Result<String, JsValue> {
        for event in self.game.advance() {
            log::debug!("{:?}", event);
        }
        self.frame_json()
    }

    /// Current frame as JSON without advancing
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.view()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Events from the last tick as JSON (e.g. `["PaddleHit"]`)
    pub fn events_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.state().events)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
