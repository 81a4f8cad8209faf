/// What a line is, so presenters can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section or scene title.
    Heading,
    /// Plain narration.
    Text,
    /// Opaque art, printed verbatim.
    Art,
    /// A contextual hint from the location.
    Hint,
    /// A "did you mean" suggestion.
    Advice,
    /// The command failed.
    Error,
}

/// One line of narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Styling class.
    pub kind: LineKind,
    /// The text. Art may span several physical lines.
    pub text: String,
}

impl Line {
    /// Create a line.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn heading(text: impl Into<String>) -> Self {
        Self::new(LineKind::Heading, text)
    }

    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::new(LineKind::Text, text)
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub(crate) fn advice(text: impl Into<String>) -> Self {
        Self::new(LineKind::Advice, text)
    }
}
