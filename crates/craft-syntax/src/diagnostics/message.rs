use rowan::{TextRange, TextSize};

/// Diagnostic kinds ordered by priority (lowest discriminant first).
///
/// Lexical errors come first: a broken token usually explains the structural
/// errors reported at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexical
    UnterminatedString,
    UnterminatedComment,
    InvalidCharacter,

    // A block was opened and never closed
    UnclosedBlock,

    // Something required is absent
    ExpectedName,
    ExpectedSection,
    ExpectedComponent,
    ExpectedTrigger,
    ExpectedPhrase,
    ExpectedNewline,
    ExpectedToken,

    // Something present doesn't belong
    UnexpectedToken,
}

impl DiagnosticKind {
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedString | Self::UnterminatedComment | Self::InvalidCharacter
        )
    }

    /// Base message for this diagnostic kind.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedComment => "unterminated block comment",
            Self::InvalidCharacter => "invalid character",
            Self::UnclosedBlock => "unclosed block",
            Self::ExpectedName => "expected a name",
            Self::ExpectedSection => "expected `presentation:` or `gateway:`",
            Self::ExpectedComponent => "expected a component",
            Self::ExpectedTrigger => "expected a trigger",
            Self::ExpectedPhrase => "expected a phrase",
            Self::ExpectedNewline => "expected end of line",
            Self::ExpectedToken => "expected token",
            Self::UnexpectedToken => "unexpected token",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub message: String,
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    /// One-based line and column of the diagnostic start.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        line_col(source, self.range.start())
    }
}

/// One-based line and column (in chars) of a byte offset.
pub fn line_col(source: &str, offset: TextSize) -> (usize, usize) {
    let offset = usize::from(offset).min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
