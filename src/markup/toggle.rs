use std::iter;

use ropey::Rope;
use serde::Serialize;

use super::{MarkupToken, Selection, ToggleError};

/// Read access to a text buffer by character offset.
///
/// Implemented for `str` and [`Rope`] so both the pure engine and the
/// rope-backed editor run the same detection logic.
pub trait MarkupText {
    /// Number of characters in the buffer.
    fn len_chars(&self) -> usize;

    /// Whether `pattern` occurs starting at character offset `at`.
    ///
    /// Returns `false` when the pattern would run past either end.
    fn matches_at(&self, at: usize, pattern: &str) -> bool;
}

impl MarkupText for str {
    fn len_chars(&self) -> usize {
        self.chars().count()
    }

    fn matches_at(&self, at: usize, pattern: &str) -> bool {
        char_to_byte(self, at).is_some_and(|byte| self[byte..].starts_with(pattern))
    }
}

impl MarkupText for Rope {
    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }

    fn matches_at(&self, at: usize, pattern: &str) -> bool {
        let Some(end) = at.checked_add(pattern.chars().count()) else {
            return false;
        };
        end <= Rope::len_chars(self) && self.slice(at..end) == pattern
    }
}

/// Which path a toggle took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Markers were added around the selection.
    Insert,
    /// Markers bracketing the selection were removed.
    Remove,
}

/// Result of a [`toggle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggled {
    pub text: String,
    pub selection: Selection,
    pub kind: EditKind,
}

/// Decide whether toggling `token` around `selection` inserts or removes.
///
/// The selection is bracketed when the `open` marker ends exactly at
/// `selection.start` and the `close` marker begins exactly at
/// `selection.end`. No whitespace is skipped.
pub fn detect<T: MarkupText + ?Sized>(
    text: &T,
    selection: Selection,
    token: &MarkupToken,
) -> Result<EditKind, ToggleError> {
    selection.validate(text.len_chars())?;
    let open_chars = token.open_chars();
    let bracketed = selection.start >= open_chars
        && text.matches_at(selection.start - open_chars, token.open())
        && text.matches_at(selection.end, token.close());
    Ok(if bracketed {
        EditKind::Remove
    } else {
        EditKind::Insert
    })
}

/// Toggle `token` around `selection` in `text`.
///
/// Inserting keeps the original text selected (or leaves a caret between
/// the markers). Removing shifts the selection left by the open marker.
pub fn toggle(
    text: &str,
    selection: Selection,
    token: &MarkupToken,
) -> Result<Toggled, ToggleError> {
    let kind = detect(text, selection, token)?;
    let invalid = || ToggleError::InvalidSelection {
        selection,
        len: text.len_chars(),
    };
    let start = char_to_byte(text, selection.start).ok_or_else(invalid)?;
    let end = char_to_byte(text, selection.end).ok_or_else(invalid)?;

    let (open, close) = (token.open(), token.close());
    let (new_text, new_selection) = match kind {
        EditKind::Insert => {
            let mut out = String::with_capacity(text.len() + open.len() + close.len());
            out.push_str(&text[..start]);
            out.push_str(open);
            out.push_str(&text[start..end]);
            out.push_str(close);
            out.push_str(&text[end..]);
            (out, selection.shifted_right(token.open_chars()))
        }
        EditKind::Remove => {
            // detect() matched both markers, so these byte offsets sit on char boundaries
            let mut out = String::with_capacity(text.len() - open.len() - close.len());
            out.push_str(&text[..start - open.len()]);
            out.push_str(&text[start..end]);
            out.push_str(&text[end + close.len()..]);
            (out, selection.shifted_left(token.open_chars()))
        }
    };

    tracing::debug!(
        kind = ?kind,
        %selection,
        new_selection = %new_selection,
        %token,
        "toggled markup"
    );

    Ok(Toggled {
        text: new_text,
        selection: new_selection,
        kind,
    })
}

/// Byte offset of the character at `idx`, or of the end when `idx == len`.
fn char_to_byte(text: &str, idx: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()))
        .nth(idx)
}
