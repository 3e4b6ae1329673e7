use std::borrow::Cow;
use std::fmt;

use super::ToggleError;

/// An immutable `(open, close)` marker pair bracketing inline markup.
///
/// Both markers are non-empty. Symmetric markers use the same string on
/// both sides (`**bold**`), but asymmetric pairs such as `<kbd>`/`</kbd>`
/// are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkupToken {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl MarkupToken {
    /// `**strong**`
    pub const STRONG: Self = Self::fixed("**");
    /// `_emphasis_`
    pub const EMPHASIS: Self = Self::fixed("_");
    /// `` `code` ``
    pub const CODE: Self = Self::fixed("`");

    const fn fixed(marker: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(marker),
            close: Cow::Borrowed(marker),
        }
    }

    /// Create a token from explicit open and close markers.
    pub fn new(
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ToggleError> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(ToggleError::EmptyToken);
        }
        Ok(Self { open, close })
    }

    /// Create a token that uses `marker` on both sides.
    pub fn symmetric(marker: impl Into<Cow<'static, str>>) -> Result<Self, ToggleError> {
        let marker = marker.into();
        Self::new(marker.clone(), marker)
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Length of the open marker in characters.
    pub fn open_chars(&self) -> usize {
        self.open.chars().count()
    }

    /// Length of the close marker in characters.
    pub fn close_chars(&self) -> usize {
        self.close.chars().count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

impl fmt::Display for MarkupToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}…{}", self.open, self.close)
    }
}

/// The built-in formatting styles.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Strong,
    Emphasis,
    Code,
}

impl Style {
    pub const ALL: [Self; 3] = [Self::Strong, Self::Emphasis, Self::Code];

    pub const fn token(self) -> MarkupToken {
        match self {
            Self::Strong => MarkupToken::STRONG,
            Self::Emphasis => MarkupToken::EMPHASIS,
            Self::Code => MarkupToken::CODE,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Emphasis => "emphasis",
            Self::Code => "code",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.label() == label)
    }
}
