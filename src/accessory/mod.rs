//! Formatting bar with markup toggle buttons.
//!
//! The bar sits above the keyboard in an editor and offers one button per
//! markup style. Each press toggles that style's token on whichever
//! [`TextSurface`] the caller passes in.

use crate::editor::TextSurface;
use crate::markup::{EditKind, MarkupToken, Style, ToggleError};

/// Errors raised when pressing a formatting button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessoryError {
    #[error("no formatting button labelled {0:?}")]
    UnknownButton(String),

    #[error(transparent)]
    Toggle(#[from] ToggleError),
}

/// A labelled button that toggles one markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: MarkupToken,
}

impl Button {
    pub fn new(label: impl Into<String>, token: MarkupToken) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }
}

impl From<Style> for Button {
    fn from(style: Style) -> Self {
        Self::new(style.label(), style.token())
    }
}

/// An ordered row of formatting buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingBar {
    buttons: Vec<Button>,
}

impl Default for FormattingBar {
    /// Strong, emphasis and code, in that order.
    fn default() -> Self {
        Self {
            buttons: Style::ALL.into_iter().map(Button::from).collect(),
        }
    }
}

impl FormattingBar {
    /// A bar with no buttons.
    pub const fn empty() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    /// Add a button, replacing any existing button with the same label.
    #[must_use]
    pub fn with_button(mut self, button: Button) -> Self {
        if let Some(existing) = self.buttons.iter_mut().find(|b| b.label == button.label) {
            *existing = button;
        } else {
            self.buttons.push(button);
        }
        self
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|b| b.label.as_str())
    }

    /// Press the button labelled `label` against `surface`.
    pub fn press(
        &self,
        label: &str,
        surface: &mut impl TextSurface,
    ) -> Result<EditKind, AccessoryError> {
        let button = self
            .buttons
            .iter()
            .find(|b| b.label == label)
            .ok_or_else(|| AccessoryError::UnknownButton(label.to_string()))?;
        tracing::debug!(label, selection = %surface.selection(), "formatting button pressed");
        Ok(surface.toggle_markup(&button.token)?)
    }

    pub fn toggle_strong(&self, surface: &mut impl TextSurface) -> Result<EditKind, ToggleError> {
        surface.toggle_markup(&MarkupToken::STRONG)
    }

    pub fn toggle_emphasis(
        &self,
        surface: &mut impl TextSurface,
    ) -> Result<EditKind, ToggleError> {
        surface.toggle_markup(&MarkupToken::EMPHASIS)
    }

    pub fn toggle_code(&self, surface: &mut impl TextSurface) -> Result<EditKind, ToggleError> {
        surface.toggle_markup(&MarkupToken::CODE)
    }
}
