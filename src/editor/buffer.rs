use ropey::Rope;

use crate::markup::{EditKind, MarkupText, MarkupToken, Selection, ToggleError, detect};

/// A live text surface that formatting actions can toggle markup on.
///
/// The surface is handed to each action call and never stored by it.
pub trait TextSurface {
    /// The current selection, in character offsets.
    fn selection(&self) -> Selection;

    /// Toggle `token` around the current selection in place.
    fn toggle_markup(&mut self, token: &MarkupToken) -> Result<EditKind, ToggleError>;
}

/// A text buffer backed by a rope data structure.
///
/// Holds the text, the current selection and a dirty flag. Markup toggles
/// edit the rope in place and move the selection to match.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with a caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::caret(0),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The text covered by the current selection.
    pub fn selected_text(&self) -> String {
        self.rope
            .slice(self.selection.start..self.selection.end)
            .to_string()
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Replace the selection.
    ///
    /// Out-of-range or inverted selections are rejected and the current
    /// selection is kept.
    pub fn select(&mut self, selection: impl Into<Selection>) -> Result<(), ToggleError> {
        let selection = selection.into();
        match selection.validate(self.rope.len_chars()) {
            Ok(selection) => {
                self.selection = selection;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%selection, len = self.rope.len_chars(), "rejected selection");
                Err(err)
            }
        }
    }

    /// Put a caret at the end of the buffer.
    pub fn select_end(&mut self) {
        self.selection = Selection::caret(self.rope.len_chars());
    }

    /// Replace the selected text with `s` and leave a caret after it.
    pub fn insert_str(&mut self, s: &str) {
        let Selection { start, end } = self.selection;
        if s.is_empty() && start == end {
            return;
        }
        self.rope.remove(start..end);
        self.rope.insert(start, s);
        self.selection = Selection::caret(start + s.chars().count());
        self.dirty = true;
    }
}

impl TextSurface for EditorBuffer {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn toggle_markup(&mut self, token: &MarkupToken) -> Result<EditKind, ToggleError> {
        let kind = detect(&self.rope, self.selection, token)?;
        let Selection { start, end } = self.selection;
        let open_chars = token.open_chars();

        // Edit the end first so `start` stays valid.
        match kind {
            EditKind::Insert => {
                self.rope.insert(end, token.close());
                self.rope.insert(start, token.open());
                self.selection = Selection::new(start + open_chars, end + open_chars);
            }
            EditKind::Remove => {
                self.rope.remove(end..end + token.close_chars());
                self.rope.remove(start - open_chars..start);
                self.selection = Selection::new(start - open_chars, end - open_chars);
            }
        }
        self.dirty = true;

        tracing::debug!(kind = ?kind, selection = %self.selection, %token, "toggled markup in buffer");
        Ok(kind)
    }
}

impl MarkupText for EditorBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn matches_at(&self, at: usize, pattern: &str) -> bool {
        self.rope.matches_at(at, pattern)
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}
