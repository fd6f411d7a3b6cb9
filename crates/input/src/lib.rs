//! Terminal input: key bindings plus DAS/ARR hold handling.
//!
//! Two layers with one seam: [`handle_key_event`] maps one-shot keys
//! (rotations, drops, session control) straight to actions, while
//! [`InputHandler`] owns the movement keys and turns held keys into
//! repeating actions with DAS/ARR timing, surviving terminals that never
//! send key-release events.

pub mod handler;
pub mod map;

pub use cubewell_types as types;

pub use handler::{InputHandler, LateralDirection};
pub use map::{handle_key_event, should_quit};
