//! Pure game rules for a three-dimensional falling-block well.
//!
//! Everything in this crate is synchronous and deterministic:
//! - no I/O, no clock reads; time arrives as caller-supplied deltas
//! - a seeded [`SimpleRng`] drives every shape and color draw
//! - failed moves and rotations roll back in place, so state never
//!   half-applies
//!
//! The shell feeds [`GameEngine::update`] once per frame and routes
//! mapped input through [`GameEngine::apply_action`]; renderers read the
//! accessors and never mutate.
//!
//! ```
//! use cubewell_core::{GameConfig, GameEngine};
//! use cubewell_core::types::GameAction;
//!
//! let mut engine = GameEngine::new(GameConfig::default(), 42);
//! engine.start();
//! engine.apply_action(GameAction::MoveLeft);
//! engine.update(0.8);
//! assert!(engine.is_running());
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;

pub use cubewell_types as types;

pub use config::{ConfigError, GameConfig};
pub use engine::GameEngine;
pub use grid::Grid;
pub use piece::{shape_cells, Block, Tetromino};
pub use rng::SimpleRng;
pub use rotation::Rotation3;
pub use scoring::{fall_interval, layer_score, level_for_lines};
