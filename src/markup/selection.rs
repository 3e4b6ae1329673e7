use std::fmt;
use std::ops::Range;

use serde::Serialize;

use super::ToggleError;

/// Half-open range `[start, end)` of character offsets into a text buffer.
///
/// Offsets count Unicode scalar values, not bytes. A selection with
/// `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection. Bounds are taken as given; see [`Selection::validate`].
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a caret (empty selection) at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub const fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters. Zero for carets and inverted ranges.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the selection against a buffer of `len_chars` characters.
    pub const fn validate(self, len_chars: usize) -> Result<Self, ToggleError> {
        if self.start > self.end || self.end > len_chars {
            return Err(ToggleError::InvalidSelection {
                selection: self,
                len: len_chars,
            });
        }
        Ok(self)
    }

    pub(crate) const fn shifted_right(self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    pub(crate) const fn shifted_left(self, by: usize) -> Self {
        Self::new(self.start - by, self.end - by)
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_empty() {
        let sel = Selection::caret(3);
        assert!(sel.is_caret());
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_len_of_span() {
        assert_eq!(Selection::new(2, 7).len(), 5);
    }

    #[test]
    fn test_inverted_selection_has_zero_len() {
        assert_eq!(Selection::new(5, 3).len(), 0);
    }

    #[test]
    fn test_validate_accepts_full_buffer() {
        assert_eq!(Selection::new(0, 5).validate(5), Ok(Selection::new(0, 5)));
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let err = Selection::new(5, 3).validate(10).unwrap_err();
        assert_eq!(
            err,
            ToggleError::InvalidSelection {
                selection: Selection::new(5, 3),
                len: 10,
            }
        );
    }

    #[test]
    fn test_validate_rejects_past_end() {
        assert!(Selection::new(2, 6).validate(5).is_err());
        assert!(Selection::caret(6).validate(5).is_err());
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Selection::from(1..4), Selection::new(1, 4));
    }

    #[test]
    fn test_display_half_open() {
        assert_eq!(Selection::new(2, 7).to_string(), "[2, 7)");
    }
}
