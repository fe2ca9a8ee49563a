//! Grammar productions, split by category.
//!
//! Each file adds methods to [`Parser`]: clauses here and in `clauses.rs`,
//! node and relationship patterns in `patterns.rs`, the precedence ladder and
//! atoms in `expressions.rs`.

mod clauses;
mod expressions;
mod patterns;

use crate::ast::{Clause, QualifiedName, Statement};
use crate::diagnostics::DiagnosticKind;
use crate::lexer::unquote_identifier;
use crate::parser::Parser;
use crate::syntax_kind::token_sets::NAME;
use crate::syntax_kind::{CLAUSE_KEYWORDS, Keyword, SyntaxKind};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        let start = self.current_span().start();
        let mut clauses = Vec::new();
        let mut after_return = false;

        while !self.eof() && !self.at(SyntaxKind::Semicolon) {
            if after_return && !self.at_kw(Keyword::Union) && self.clause_keyword().is_some() {
                return self.error(DiagnosticKind::UpdateAfterReturn);
            }
            let clause = self.parse_clause()?;
            after_return = matches!(clause, Clause::Return(_));
            clauses.push(clause);
        }

        if clauses.is_empty() {
            return self.error(DiagnosticKind::EmptyQuery);
        }

        self.eat(SyntaxKind::Semicolon);
        if !self.eof() {
            return self.error(DiagnosticKind::TrailingInput);
        }

        Some(Statement {
            clauses,
            span: self.span_from(start),
        })
    }

    /// The clause keyword at the current position, if any.
    pub(super) fn clause_keyword(&self) -> Option<Keyword> {
        CLAUSE_KEYWORDS.iter().copied().find(|kw| self.at_kw(*kw))
    }

    pub(super) fn parse_clause(&mut self) -> Option<Clause> {
        let Some(keyword) = self.clause_keyword() else {
            if self.at(SyntaxKind::Id) {
                let text = self.current_text();
                return self.error_msg(DiagnosticKind::UnknownClause, text);
            }
            return self.error(DiagnosticKind::ExpectedClause);
        };

        match keyword {
            Keyword::Match | Keyword::Optional => self.parse_match().map(Clause::Match),
            Keyword::Create => self.parse_create().map(Clause::Create),
            Keyword::Merge => self.parse_merge().map(Clause::Merge),
            Keyword::Detach | Keyword::Delete => self.parse_delete().map(Clause::Delete),
            Keyword::Set => self.parse_set().map(Clause::Set),
            Keyword::Remove => self.parse_remove().map(Clause::Remove),
            Keyword::Return => self.parse_return().map(Clause::Return),
            Keyword::With => self.parse_with().map(Clause::With),
            Keyword::Unwind => self.parse_unwind().map(Clause::Unwind),
            Keyword::Call => self.parse_call().map(Clause::Call),
            Keyword::Foreach => self.parse_foreach().map(Clause::Foreach),
            Keyword::Union => self.parse_union().map(Clause::Union),
            _ => self.error(DiagnosticKind::ExpectedClause),
        }
    }

    pub(super) fn at_name(&self) -> bool {
        self.at_one_of(NAME)
    }

    pub(super) fn nth_at_name(&self, lookahead: usize) -> bool {
        NAME.contains(self.nth(lookahead))
    }

    /// Identifier or back-tick quoted identifier, returned unquoted.
    /// `what` names the expected thing in the diagnostic.
    pub(super) fn parse_name(&mut self, what: &str) -> Option<String> {
        match self.current() {
            SyntaxKind::Id => {
                let text = self.current_text().to_string();
                self.bump();
                Some(text)
            }
            SyntaxKind::QuotedId => {
                let text = unquote_identifier(self.current_text());
                self.bump();
                Some(text)
            }
            _ if self.eof() => self.error_msg(DiagnosticKind::ExpectedName, what),
            _ => self.unexpected(format!("expected {}", what)),
        }
    }

    /// `name (. name)*`; the last segment is the name, the rest the namespace.
    pub(super) fn parse_qualified_name(&mut self, what: &str) -> Option<QualifiedName> {
        let mut segments = vec![self.parse_name(what)?];
        while self.at(SyntaxKind::Dot) && self.nth_at_name(1) {
            self.bump();
            segments.push(self.parse_name(what)?);
        }
        let name = segments.pop().unwrap_or_default();
        Some(QualifiedName {
            namespace: segments,
            name,
        })
    }

    /// `:A:B` (one or more labels). Caller ensures the current token is `:`.
    pub(super) fn parse_label_list(&mut self) -> Option<Vec<String>> {
        let mut labels = Vec::new();
        while self.eat(SyntaxKind::Colon) {
            labels.push(self.parse_name("label name")?);
        }
        Some(labels)
    }

    /// Comma separated list of at least one item.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<Vec<T>> {
        let mut items = vec![item(self)?];
        while self.eat(SyntaxKind::Comma) {
            items.push(item(self)?);
        }
        Some(items)
    }
}
