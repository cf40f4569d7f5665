//! Game state and the turn state machine.
//!
//! ```
//! use tictactoe_engine::game::{GameConfig, GameController, Phase};
//!
//! let mut game = GameController::new(GameConfig::default().with_seed(7));
//! game.player_move(4).expect("center is free");
//! assert_eq!(game.phase(), Phase::AwaitingComputerMove);
//!
//! let ticket = game.schedule_computer_move().expect("computer's turn");
//! // ... host waits `ticket.delay` ...
//! game.resolve_computer_move(&ticket).expect("ticket is current");
//! assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
//! ```

pub mod clock;
pub mod config;
pub mod controller;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use controller::{Events, GameController, GameEvent, PendingMove, Transition};
pub use state::{GameState, Phase, Theme};
