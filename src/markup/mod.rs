//! Inline markup toggling.
//!
//! A toggle wraps the selected text in a [`MarkupToken`], or strips the
//! token off again when the selection is already wrapped in it. The engine
//! is a pure function over explicit values: callers hand in the text and
//! selection and get a new text and selection back.

mod selection;
mod token;
mod toggle;

pub use selection::Selection;
pub use token::{MarkupToken, Style};
pub use toggle::{EditKind, MarkupText, Toggled, detect, toggle};

/// Errors raised by the toggle engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("invalid selection {selection} for a buffer of {len} characters")]
    InvalidSelection { selection: Selection, len: usize },

    #[error("markup token needs non-empty open and close markers")]
    EmptyToken,
}
