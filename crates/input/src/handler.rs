//! Held-key tracker for terminal environments.
//!
//! The frame loop asks "which actions are held right now?" once per frame.
//! Terminals that report key releases answer that exactly. Terminals that do
//! not only send presses and auto-repeats, so a key counts as held until
//! `key_release_timeout_ms` passes without another press for it.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::action_for_key;
use crate::types::Action;

// Long enough to bridge the gap between the first press and the terminal's
// auto-repeat kicking in.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 300;

#[derive(Debug, Clone)]
pub struct KeyState {
    last_seen: [Option<Instant>; Action::ALL.len()],
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            last_seen: [None; Action::ALL.len()],
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust release events instead of the timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Feed a key event. Returns the action it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Action> {
        let action = action_for_key(code)?;
        self.last_seen[action.index()] = Some(Instant::now());
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Action> {
        let action = action_for_key(code)?;
        self.last_seen[action.index()] = None;
        Some(action)
    }

    /// Actions held at this moment, in [`Action::ALL`] order.
    pub fn held(&mut self) -> ArrayVec<Action, 6> {
        self.held_at(Instant::now())
    }

    fn held_at(&mut self, now: Instant) -> ArrayVec<Action, 6> {
        let timeout = Duration::from_millis(u64::from(self.key_release_timeout_ms));
        let mut actions = ArrayVec::new();

        for action in Action::ALL {
            let slot = &mut self.last_seen[action.index()];
            let Some(seen) = *slot else {
                continue;
            };
            if !self.release_events && now.saturating_duration_since(seen) > timeout {
                // Auto-release when terminal does not emit release events.
                *slot = None;
                continue;
            }
            actions.push(action);
        }

        actions
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; Action::ALL.len()];
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
