//! Lightweight editor module for in-place markdown editing.
//!
//! Provides a rope-backed text buffer with a selection that formatting
//! actions can toggle markup on.

mod buffer;

pub use buffer::{EditorBuffer, TextSurface};
