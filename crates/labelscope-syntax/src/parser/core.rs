//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use crate::Error;
use crate::ast::Statement;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lexer::{Token, token_text};
use crate::syntax_kind::{Keyword, SyntaxKind, TokenSet};

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
/// Nesting allowed by default. Chained operators and postfix suffixes count
/// as nesting, which keeps the finished tree shallow enough for recursive
/// traversal on a 2 MiB thread stack.
pub const DEFAULT_RECURSION_FUEL: u32 = 128;

/// Recursive-descent parser over the non-trivia tokens of one query.
///
/// Grammar productions return `Option`: `None` means a diagnostic was emitted
/// and parsing stops. Fuel exhaustion is recorded as a fatal error that takes
/// precedence over diagnostics when the parse finishes.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

/// Parser position saved before a speculative parse.
#[derive(Debug, Clone, Copy)]
pub(super) struct Snapshot {
    pos: usize,
    diagnostics_len: usize,
    depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let tokens = tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect();
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            exec_fuel_remaining: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
            fatal_error: None,
        }
    }

    /// Caps the number of tokens consumed, backtracking included. `None` disables the cap.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    /// Caps expression and pattern nesting depth. `None` disables the cap.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Statement, Error> {
        let statement = self.parse_statement();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        match statement {
            Some(statement) if self.diagnostics.is_empty() => Ok(statement),
            _ => Err(Error::Syntax(self.diagnostics)),
        }
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Current token kind. Reads as end of input once a fatal error is recorded,
    /// which unwinds every production.
    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        if self.has_fatal_error() {
            return SyntaxKind::Error;
        }
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn nth_text(&self, lookahead: usize) -> &'src str {
        self.tokens
            .get(self.pos + lookahead)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.nth_text(0)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: TextSize) -> TextRange {
        let end = self.last_token_end().unwrap_or(start).max(start);
        TextRange::new(start, end)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.current() == SyntaxKind::Error
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn nth_at(&self, lookahead: usize, kind: SyntaxKind) -> bool {
        self.nth(lookahead) == kind
    }

    pub(super) fn at_kw(&self, kw: Keyword) -> bool {
        self.nth_at_kw(0, kw)
    }

    pub(super) fn nth_at_kw(&self, lookahead: usize, kw: Keyword) -> bool {
        self.nth(lookahead) == SyntaxKind::Id && kw.matches(self.nth_text(lookahead))
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Consumes the current token. Past the last token this yields an empty
    /// `Error` token and does not advance.
    pub(super) fn bump(&mut self) -> Token {
        self.consume_exec_fuel();
        match self.tokens.get(self.pos) {
            Some(&token) => {
                self.pos += 1;
                token
            }
            None => Token::new(SyntaxKind::Error, TextRange::empty(self.eof_offset())),
        }
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_kw(&mut self, kw: Keyword) -> bool {
        if self.at_kw(kw) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.at(kind) {
            return Some(self.bump());
        }
        self.unexpected(format!("expected {}", kind.describe()))
    }

    pub(super) fn expect_kw(&mut self, kw: Keyword) -> Option<()> {
        if self.eat_kw(kw) {
            return Some(());
        }
        self.error_msg(DiagnosticKind::ExpectedKeyword, kw.as_str())
    }

    /// Closes a delimiter opened at `open`. A mismatch points back at the opener.
    pub(super) fn expect_closing(&mut self, kind: SyntaxKind, open: TextRange) -> Option<Token> {
        if self.at(kind) {
            return Some(self.bump());
        }
        let diagnostic = match kind {
            SyntaxKind::ParenClose => DiagnosticKind::UnclosedParen,
            SyntaxKind::BracketClose => DiagnosticKind::UnclosedBracket,
            _ => DiagnosticKind::UnclosedBrace,
        };
        let current = self.current_span();
        let found = if self.eof() {
            "reached end of input".to_string()
        } else {
            format!("found `{}`", self.current_text())
        };
        self.diagnostics
            .report(diagnostic, TextRange::new(open.start(), current.end()))
            .message(found)
            .related_to("opened here", open)
            .emit();
        None
    }

    /// Reports at the current token and returns `None` so callers can `?` out.
    pub(super) fn error<T>(&mut self, kind: DiagnosticKind) -> Option<T> {
        let range = self.current_span();
        if self.at(SyntaxKind::Garbage) {
            let text = self.current_text();
            self.diagnostics
                .report(DiagnosticKind::UnrecognizedInput, range)
                .message(format!("`{}`", text))
                .emit();
            return None;
        }
        self.diagnostics.report(kind, range).emit();
        None
    }

    pub(super) fn error_msg<T>(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Option<T> {
        let range = self.current_span();
        self.diagnostics.report(kind, range).message(message).emit();
        None
    }

    /// `UnexpectedToken` describing what was found alongside what was wanted.
    pub(super) fn unexpected<T>(&mut self, expected: impl Into<String>) -> Option<T> {
        if self.at(SyntaxKind::Garbage) {
            return self.error(DiagnosticKind::UnrecognizedInput);
        }
        let found = if self.eof() {
            "end of input".to_string()
        } else {
            format!("`{}`", self.current_text())
        };
        let range = self.current_span();
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, range)
            .message(format!("{}, found {}", expected.into(), found))
            .emit();
        None
    }

    pub(super) fn enter_recursion(&mut self) -> Option<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return None;
        }
        self.depth += 1;
        Some(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn last_token_end(&self) -> Option<TextSize> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end())
    }

    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            diagnostics_len: self.diagnostics.len(),
            depth: self.depth,
        }
    }

    /// Runs `f` speculatively: on `None` the position and any diagnostics it
    /// emitted are rolled back. Fuel spent is not refunded.
    pub(super) fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_none() && !self.has_fatal_error() {
            self.restore(snapshot);
        }
        result
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.pos;
        self.depth = snapshot.depth;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }
}
