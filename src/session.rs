//! A controller wired to its collaborators.
//!
//! `Session` restores state on open, saves after every transition, and
//! forwards events to an [`EffectSink`]. The controller itself knows
//! nothing about storage or effects.

use crate::game::{Clock, GameConfig, GameController, GameEvent, GameState, PendingMove, Theme, Transition};
use crate::persistence::{Persistence, SnapshotStore, STORAGE_KEY};
use crate::policy::Difficulty;

/// Consumer of game events (sound, confetti, unlock toasts).
pub trait EffectSink {
    /// Called once per event, with the state that produced it.
    fn emit(&mut self, event: GameEvent, state: &GameState);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl EffectSink for NoEffects {
    fn emit(&mut self, _event: GameEvent, _state: &GameState) {}
}

impl EffectSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent, _state: &GameState) {
        self.push(event);
    }
}

/// Controller plus persistence plus effects.
pub struct Session<S: SnapshotStore, F: EffectSink = NoEffects> {
    controller: GameController,
    persistence: Persistence<S>,
    effects: F,
    key: String,
}

impl<S: SnapshotStore, F: EffectSink> Session<S, F> {
    /// Open a session under the default storage key.
    pub fn open(config: GameConfig, persistence: Persistence<S>, effects: F) -> Self {
        Self::open_with_key(config, persistence, effects, STORAGE_KEY)
    }

    /// Open a session, restoring whatever is stored under `key`.
    pub fn open_with_key(
        config: GameConfig,
        persistence: Persistence<S>,
        effects: F,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let state = persistence.load(&key, GameState::default());

        Self {
            controller: GameController::with_state(config, state),
            persistence,
            effects,
            key,
        }
    }

    /// Replace the controller's clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.controller = self.controller.with_clock(clock);
        self
    }

    #[must_use]
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    #[must_use]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    #[must_use]
    pub fn effects(&self) -> &F {
        &self.effects
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    // === Requests ===

    pub fn player_move(&mut self, index: usize) -> Option<GameState> {
        let transition = self.controller.player_move(index)?;
        Some(self.publish(transition))
    }

    pub fn schedule_computer_move(&mut self) -> Option<PendingMove> {
        self.controller.schedule_computer_move()
    }

    pub fn resolve_computer_move(&mut self, ticket: &PendingMove) -> Option<GameState> {
        let transition = self.controller.resolve_computer_move(ticket)?;
        Some(self.publish(transition))
    }

    /// Schedule and resolve the computer's move without waiting.
    pub fn computer_turn(&mut self) -> Option<GameState> {
        let ticket = self.schedule_computer_move()?;
        self.resolve_computer_move(&ticket)
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.controller.cancel_pending()
    }

    pub fn new_game(&mut self) -> GameState {
        let transition = self.controller.new_game();
        self.publish(transition)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Option<GameState> {
        let transition = self.controller.set_difficulty(difficulty)?;
        Some(self.publish(transition))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Option<GameState> {
        let transition = self.controller.set_theme(theme)?;
        Some(self.publish(transition))
    }

    pub fn toggle_sound(&mut self) -> GameState {
        let transition = self.controller.toggle_sound();
        self.publish(transition)
    }

    fn publish(&mut self, transition: Transition) -> GameState {
        self.persistence.save(&self.key, &transition.state);
        for event in &transition.events {
            self.effects.emit(*event, &transition.state);
        }
        transition.state
    }
}
