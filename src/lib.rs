// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. markup::MarkupToken)
    clippy::module_name_repetitions
)]

//! # Marktoggle
//!
//! Toggle inline markdown markup around a text selection.
//!
//! Selecting `hello` in `hello world` and toggling strong gives
//! `**hello** world` with `hello` still selected. Toggling again removes
//! the markers. With a bare caret, the markers are inserted with the caret
//! between them, ready to type into.
//!
//! ## Modules
//!
//! - [`markup`]: The pure toggle engine and its value types
//! - [`editor`]: Rope-backed editor buffer that toggles in place
//! - [`accessory`]: Formatting bar with strong/emphasis/code buttons
//! - [`config`]: Saved command-line defaults

pub mod accessory;
pub mod config;
pub mod editor;
pub mod markup;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::accessory::FormattingBar;
    pub use crate::editor::{EditorBuffer, TextSurface};
    pub use crate::markup::{EditKind, MarkupToken, Selection, Style, ToggleError, Toggled, toggle};
}
