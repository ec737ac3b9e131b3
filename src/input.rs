//! Input channel between the host's key handling and the engine
//!
//! The host writes key state as events arrive; the engine reads it once at
//! the start of every tick. Flags are atomics so the writer may live on a
//! different thread than the game loop.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::TickInput;

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Start an idle game, or reset a running/finished one
    Action,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Space" | "Spacebar" | "Enter" => Some(Key::Action),
            _ => None,
        }
    }
}

/// Latest input state, shared between writer and engine
#[derive(Debug, Default)]
pub struct InputChannel {
    left: AtomicBool,
    right: AtomicBool,
    start_or_reset: AtomicBool,
}

impl InputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: Key) {
        match key {
            Key::Left => self.left.store(true, Ordering::Relaxed),
            Key::Right => self.right.store(true, Ordering::Relaxed),
            Key::Action => self.request_start_or_reset(),
        }
    }

    pub fn release(&self, key: Key) {
        match key {
            Key::Left => self.left.store(false, Ordering::Relaxed),
            Key::Right => self.right.store(false, Ordering::Relaxed),
            // Requests are edge-triggered on press
            Key::Action => {}
        }
    }

    /// Set both direction flags at once (autopilot, gamepads)
    pub fn set_held(&self, left: bool, right: bool) {
        self.left.store(left, Ordering::Relaxed);
        self.right.store(right, Ordering::Relaxed);
    }

    pub fn request_start_or_reset(&self) {
        self.start_or_reset.store(true, Ordering::Relaxed);
    }

    /// Drop held directions (on reset)
    pub fn clear_held(&self) {
        self.set_held(false, false);
    }

    /// Snapshot for one tick; a pending start/reset request is consumed
    pub fn take_tick_input(&self) -> TickInput {
        TickInput {
            left_held: self.left.load(Ordering::Relaxed),
            right_held: self.right.load(Ordering::Relaxed),
            start_or_reset: self.start_or_reset.swap(false, Ordering::Relaxed),
        }
    }
}
