use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When several diagnostics are reported for one query, the one with the
/// lowest discriminant is the one shown as the headline.
///
/// Priority rationale:
/// - Unclosed delimiters explain everything that follows them
/// - Expected token errors are root causes the user should fix first
/// - Unexpected input is a specific mistake at a location
/// - Literal errors are local and never cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Cascade into everything after the opening delimiter
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,

    // User omitted something required - root cause errors
    EmptyQuery,
    ExpectedClause,
    ExpectedExpression,
    ExpectedNodePattern,
    ExpectedName,
    ExpectedKeyword,

    // User wrote something that doesn't belong
    UnknownClause,
    UnrecognizedInput,
    UnexpectedToken,
    TrailingInput,
    UpdateAfterReturn,

    // Malformed literals
    InvalidEscape,
    InvalidRange,
}

impl DiagnosticKind {
    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedClause => Some("a query starts with a clause such as `MATCH`, `CREATE` or `RETURN`"),
            Self::UnknownClause => Some("supported clauses: MATCH, OPTIONAL MATCH, CREATE, MERGE, DELETE, SET, REMOVE, RETURN, WITH, UNWIND, CALL, FOREACH, UNION"),
            Self::ExpectedNodePattern => Some("e.g., `(n)`, `(:Label)` or `(n:Label {key: value})`"),
            Self::InvalidEscape => Some("`\\u` escapes take exactly four hex digits"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",

            Self::EmptyQuery => "query is empty",
            Self::ExpectedClause => "expected a clause",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedNodePattern => "expected a node pattern",
            Self::ExpectedName => "expected a name",
            Self::ExpectedKeyword => "expected keyword",

            Self::UnknownClause => "unknown clause",
            Self::UnrecognizedInput => "unrecognized input",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingInput => "unexpected input after the end of the query",
            Self::UpdateAfterReturn => "`RETURN` must be the last clause of a query",

            Self::InvalidEscape => "invalid escape sequence in string literal",
            Self::InvalidRange => "invalid variable length range",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownClause => "`{}` is not a supported clause".to_string(),
            Self::ExpectedKeyword => "expected `{}`".to_string(),
            Self::ExpectedName => "expected {}".to_string(),

            Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedBrace => {
                format!("{}; {{}}", self.fallback_message())
            }

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
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
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
