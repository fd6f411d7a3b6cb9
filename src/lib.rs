//! Cubewell (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this
//! package re-exports them under one name and adds the settings file
//! handling used by the binary.

pub mod settings;

pub use cubewell_core as core;
pub use cubewell_input as input;
pub use cubewell_term as term;
pub use cubewell_types as types;
