//! Difficulty-tiered move selection for the computer.
//!
//! | Tier    | Depth | Random move | Extras                     |
//! |---------|-------|-------------|----------------------------|
//! | Easy    | 2     | 20%         | random first two plies     |
//! | Medium  | 6     | 10%         | random first two plies     |
//! | Hard    | 9     | 0%          | random first two plies     |
//! | Optimus | 9     | 0%          | opening book before search |

pub mod config;
pub mod select;

pub use config::{Difficulty, PolicyConfig, TierSettings};
pub use select::{select_move, select_with, Selection, SelectionReason};
