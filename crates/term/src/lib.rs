//! Terminal presentation: framebuffer, diff renderer and the well views.
//!
//! The split follows the data flow: pure painters ([`GameView`], the
//! screens) fill a [`FrameBuffer`], and [`TerminalRenderer`] is the only
//! thing that touches the terminal, diffing frames and batching output
//! into one write.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use cubewell_core as core;
pub use cubewell_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
