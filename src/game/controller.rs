//! Turn state machine.
//!
//! `GameController` is the single writer of [`GameState`]. Each accepted
//! request produces a complete new state, bumps the version, and returns a
//! [`Transition`] carrying the snapshot and any effect events.
//!
//! ## Computer moves
//!
//! The computer's move is a two-step handshake so the host can show a
//! thinking delay without the controller owning a timer:
//!
//! 1. [`schedule_computer_move`](GameController::schedule_computer_move)
//!    returns a [`PendingMove`] bound to the current version and board, and
//!    raises `ai_thinking`.
//! 2. After `delay`, the host calls
//!    [`resolve_computer_move`](GameController::resolve_computer_move).
//!
//! Any mutation in between (new game, preference change, explicit cancel)
//! bumps the version, so the stale ticket is discarded instead of landing
//! on a board it was not computed for.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::core::{evaluate, Board, GameRng, Outcome, Player, CELL_COUNT};
use crate::error::{Error, Result};
use crate::policy::{select_with, Difficulty};

use super::clock::{Clock, SystemClock};
use super::config::GameConfig;
use super::state::{GameState, Phase, Theme};

/// Named cue for the audio/theming layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    Tap,
    /// The human won.
    Win,
    /// The game ended without a human win (draw or computer win).
    Draw,
    /// A theme became available.
    Unlock(Theme),
}

/// Events emitted by one transition.
pub type Events = SmallVec<[GameEvent; 4]>;

/// Result of an accepted request.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// State after the request.
    pub state: GameState,
    pub events: Events,
}

/// A scheduled computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    /// Controller version the move was scheduled against.
    pub version: u64,
    /// Board the move will be computed for.
    pub board: Board,
    /// Simulated thinking time to wait before resolving.
    pub delay: Duration,
}

/// Owns the canonical [`GameState`] and sequences turns.
pub struct GameController {
    state: GameState,
    config: GameConfig,
    /// Move selection stream.
    rng: GameRng,
    /// Thinking-delay stream.
    delay_rng: GameRng,
    clock: Box<dyn Clock>,
    version: u64,
    pending: Option<PendingMove>,
    /// Start of the first computer turn of the current game.
    game_started: Option<Instant>,
}

impl GameController {
    /// Create a controller with the initial state.
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(config, GameState::default())
    }

    /// Create a controller resuming from a restored state.
    ///
    /// A restored state never has a move in flight.
    pub fn with_state(config: GameConfig, mut state: GameState) -> Self {
        state.ai_thinking = false;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let delay_rng = rng.for_context("deliberation");

        Self {
            state,
            config,
            rng,
            delay_rng,
            clock: Box::new(SystemClock),
            version: 0,
            pending: None,
            game_started: None,
        }
    }

    /// Replace the clock used for the fastest-win record.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Incremented on every accepted mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The outstanding computer move, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Moves ===

    /// Human move at `index`.
    ///
    /// Occupied cells, finished games, and moves out of turn are ignored and
    /// return `None`.
    pub fn player_move(&mut self, index: usize) -> Option<Transition> {
        match self.apply_move(index, Player::HUMAN) {
            Ok(transition) => Some(transition),
            Err(err) => {
                debug!(index, %err, "ignoring player move");
                None
            }
        }
    }

    /// Schedule the computer's move.
    ///
    /// Returns `None` when it is not the computer's turn or a move is
    /// already scheduled for the current state.
    pub fn schedule_computer_move(&mut self) -> Option<PendingMove> {
        if self.phase() != Phase::AwaitingComputerMove {
            return None;
        }
        if self.pending.is_some_and(|pending| pending.version == self.version) {
            return None;
        }

        let pending = PendingMove {
            version: self.version,
            board: self.state.board,
            delay: self.think_time(),
        };
        self.pending = Some(pending);
        self.state.ai_thinking = true;

        debug!(version = pending.version, delay_ms = pending.delay.as_millis() as u64, "scheduled computer move");
        Some(pending)
    }

    /// Apply a scheduled computer move.
    ///
    /// The ticket must be the outstanding one and still match the current
    /// version and board; otherwise it is discarded and `None` returned.
    pub fn resolve_computer_move(&mut self, ticket: &PendingMove) -> Option<Transition> {
        let current = self.pending.as_ref() == Some(ticket)
            && ticket.version == self.version
            && ticket.board == self.state.board;
        if !current {
            debug!(ticket_version = ticket.version, version = self.version, "discarding stale computer move");
            return None;
        }

        let tier = *self.config.policy.tier(self.state.difficulty);
        let selection = match select_with(&self.state.board, &tier, &mut self.rng) {
            Ok(selection) => selection,
            Err(err) => {
                warn!(%err, "computer move requested on a finished board");
                self.cancel_pending();
                return None;
            }
        };
        debug!(index = selection.index, reason = ?selection.reason, "computer selected move");

        match self.apply_move(selection.index, Player::COMPUTER) {
            Ok(transition) => Some(transition),
            Err(err) => {
                warn!(%err, "computer selected an illegal move");
                self.cancel_pending();
                None
            }
        }
    }

    /// Drop the outstanding computer move. Returns whether one was pending.
    pub fn cancel_pending(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.state.ai_thinking = false;
        self.version += 1;
        debug!(version = self.version, "cancelled computer move");
        true
    }

    // === Requests ===

    /// Start a new game, keeping streaks, records, unlocks, and preferences.
    pub fn new_game(&mut self) -> Transition {
        self.game_started = None;
        let next = self.state.with_new_board();
        self.commit(next, Events::new())
    }

    /// Change difficulty. Refused while a game is active.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Option<Transition> {
        if self.state.is_active() {
            debug!(%difficulty, "difficulty change refused mid-game");
            return None;
        }
        let next = GameState {
            difficulty,
            ..self.state.clone()
        };
        Some(self.commit(next, Events::new()))
    }

    /// Switch theme. Refused for locked themes.
    pub fn set_theme(&mut self, theme: Theme) -> Option<Transition> {
        if !self.state.is_unlocked(theme) {
            debug!(%theme, "theme is locked");
            return None;
        }
        let next = GameState {
            theme,
            ..self.state.clone()
        };
        Some(self.commit(next, Events::new()))
    }

    pub fn toggle_sound(&mut self) -> Transition {
        let next = GameState {
            sound_enabled: !self.state.sound_enabled,
            ..self.state.clone()
        };
        self.commit(next, Events::new())
    }

    // === Internals ===

    fn apply_move(&mut self, index: usize, player: Player) -> Result<Transition> {
        let illegal = |reason: &'static str| -> Result<Transition> {
            Err(Error::IllegalMove { index, reason })
        };

        if index >= CELL_COUNT {
            return illegal("cell index out of range");
        }
        if self.state.outcome.is_terminal() {
            return illegal("game is over");
        }
        if self.state.to_move != player {
            return illegal("not this side's turn");
        }
        if !self.state.board.is_empty_at(index) {
            return illegal("cell is occupied");
        }

        let mut next = self.state.clone();
        let mut events = Events::new();

        next.board.place(index, player);
        next.move_count += 1;
        next.outcome = evaluate(&next.board);
        events.push(GameEvent::Tap);

        match next.outcome {
            Outcome::InProgress => {
                next.to_move = player.opponent();
                if next.move_count == 1 && next.to_move == Player::COMPUTER {
                    self.game_started = Some(self.clock.now());
                }
            }
            Outcome::Won {
                player: Player::X, ..
            } => {
                next.win_streak += 1;
                next.best_streak = next.best_streak.max(next.win_streak);
                if let Some(started) = self.game_started.take() {
                    let elapsed = self.clock.now().saturating_duration_since(started);
                    if next.fastest_win.map_or(true, |fastest| elapsed < fastest) {
                        next.fastest_win = Some(elapsed);
                    }
                }
                events.push(GameEvent::Win);
            }
            Outcome::Won {
                player: Player::O, ..
            }
            | Outcome::Draw => {
                next.win_streak = 0;
                self.game_started = None;
                events.push(GameEvent::Draw);
            }
        }

        for (threshold, theme) in Theme::UNLOCKS {
            if next.win_streak >= threshold && !next.is_unlocked(theme) {
                next.unlocked_themes.insert(theme);
                events.push(GameEvent::Unlock(theme));
                debug!(%theme, streak = next.win_streak, "unlocked theme");
            }
        }

        if next.outcome.is_terminal() {
            info!(outcome = ?next.outcome, moves = next.move_count, streak = next.win_streak, "game over");
        }

        Ok(self.commit(next, events))
    }

    fn commit(&mut self, mut next: GameState, events: Events) -> Transition {
        self.pending = None;
        next.ai_thinking = false;
        self.version += 1;
        self.state = next;

        Transition {
            state: self.state.clone(),
            events,
        }
    }

    fn think_time(&mut self) -> Duration {
        let min = self.config.think_min;
        let max = self.config.think_max;
        if max <= min {
            return min;
        }

        let span = u64::try_from((max - min).as_millis()).unwrap_or(u64::MAX);
        min + Duration::from_millis(self.delay_rng.gen_range_u64(0..span.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> GameController {
        GameController::new(GameConfig::default().with_seed(42))
    }

    #[test]
    fn test_player_move() {
        let mut game = controller();
        let transition = game.player_move(4).unwrap();

        assert_eq!(transition.events.as_slice(), &[GameEvent::Tap]);
        assert_eq!(transition.state.move_count, 1);
        assert_eq!(transition.state.to_move, Player::O);
        assert_eq!(game.phase(), Phase::AwaitingComputerMove);
        assert_eq!(game.version(), 1);
    }

    #[test]
    fn test_illegal_moves_are_ignored() {
        let mut game = controller();
        game.player_move(0).unwrap();
        let before = game.snapshot();

        // Not the human's turn.
        assert!(game.player_move(1).is_none());
        // Out of range.
        assert!(game.player_move(9).is_none());

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.version(), 1);
    }

    #[test]
    fn test_schedule_only_on_computer_turn() {
        let mut game = controller();
        assert!(game.schedule_computer_move().is_none());

        game.player_move(0).unwrap();
        let ticket = game.schedule_computer_move().unwrap();
        assert!(game.state().ai_thinking);
        assert!(ticket.delay >= Duration::from_millis(400));
        assert!(ticket.delay < Duration::from_millis(1000));

        // Already scheduled.
        assert!(game.schedule_computer_move().is_none());
    }

    #[test]
    fn test_resolve_applies_move() {
        let mut game = controller();
        game.player_move(0).unwrap();
        let ticket = game.schedule_computer_move().unwrap();

        let transition = game.resolve_computer_move(&ticket).unwrap();
        assert_eq!(transition.state.move_count, 2);
        assert_eq!(transition.state.board.count(Player::O), 1);
        assert!(!transition.state.ai_thinking);
        assert!(game.pending().is_none());
        assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
    }

    #[test]
    fn test_new_game_discards_pending_move() {
        let mut game = controller();
        game.player_move(0).unwrap();
        let ticket = game.schedule_computer_move().unwrap();

        game.new_game();

        assert!(!game.state().ai_thinking);
        assert!(game.resolve_computer_move(&ticket).is_none());
        assert_eq!(game.state().board, Board::new());
    }

    #[test]
    fn test_cancel_pending() {
        let mut game = controller();
        assert!(!game.cancel_pending());

        game.player_move(0).unwrap();
        let ticket = game.schedule_computer_move().unwrap();

        assert!(game.cancel_pending());
        assert!(!game.state().ai_thinking);
        assert!(game.resolve_computer_move(&ticket).is_none());

        // Can be rescheduled afterwards.
        let ticket = game.schedule_computer_move().unwrap();
        assert!(game.resolve_computer_move(&ticket).is_some());
    }

    #[test]
    fn test_restored_state_is_not_thinking() {
        let mut state = GameState::new();
        state.ai_thinking = true;
        let game = GameController::with_state(GameConfig::default().with_seed(1), state);
        assert!(!game.state().ai_thinking);
    }

    #[test]
    fn test_zero_think_time() {
        let config = GameConfig::default()
            .with_seed(3)
            .with_think_time(Duration::ZERO, Duration::ZERO);
        let mut game = GameController::new(config);
        game.player_move(4).unwrap();
        assert_eq!(game.schedule_computer_move().unwrap().delay, Duration::ZERO);
    }

    #[test]
    fn test_difficulty_locked_mid_game() {
        let mut game = controller();
        assert!(game.set_difficulty(Difficulty::Hard).is_some());

        game.player_move(0).unwrap();
        assert!(game.set_difficulty(Difficulty::Easy).is_none());
        assert_eq!(game.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_theme_must_be_unlocked() {
        let mut game = controller();
        assert!(game.set_theme(Theme::Retro).is_none());
        assert_eq!(game.set_theme(Theme::Neon).unwrap().state.theme, Theme::Neon);
    }

    #[test]
    fn test_toggle_sound() {
        let mut game = controller();
        assert!(!game.toggle_sound().state.sound_enabled);
        assert!(game.toggle_sound().state.sound_enabled);
    }
}
