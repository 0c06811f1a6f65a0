//! The arbiter: turn/trick state machine and the game loop.
//!
//! - `state`: `GameState`, the bookkeeping only the arbiter touches
//! - `engine`: `Arbiter`, which drives requests and classifies responses
//! - `event`: `GameEvent` stream and the final `GameRecord`
//! - `table`: seats agents on tasks, runs the arbiter, joins every task

pub mod state;
pub mod engine;
pub mod event;
pub mod table;

pub use state::GameState;
pub use engine::Arbiter;
pub use event::{GameEvent, GameOutcome, GameRecord};
pub use table::play;
