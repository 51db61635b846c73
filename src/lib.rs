//! Collatz-octave recursion explorer.
//!
//! Pipeline: `collatz` → `octave` → `engine::pipeline` → {`overlay`,
//! `visibility`} → {`render`, `export`}. Everything up to `export` is pure
//! computation; `render` holds the renderer-agnostic pieces shared by the
//! egui viewer and the offline PNG snapshot.

pub mod error;
pub mod config;

// Core computation
pub mod collatz;
pub mod octave;
pub mod engine;
pub mod overlay;
pub mod visibility;
pub mod export;

// Presentation helpers (no egui types)
pub mod render;

pub use error::{OctaveError, Result};
