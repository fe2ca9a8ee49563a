//! Recursive-descent parser for Cypher statements.
//!
//! # Architecture
//!
//! Tokens come from [`lex`] with trivia dropped up front; productions walk the
//! remaining tokens with fixed lookahead and build the owned [`ast`] directly.
//! Keywords are matched contextually against identifier text, so words like
//! `count` or `type` stay usable as names.
//!
//! # Errors
//!
//! Parsing stops at the first syntax error: productions return `None` after
//! emitting a diagnostic and callers propagate it with `?`. Ambiguous spots
//! (pattern predicates vs. parenthesized expressions, pattern comprehensions
//! vs. lists) are parsed speculatively and rolled back on failure.
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) is reported as its own error
//! rather than as a diagnostic.
//!
//! [`ast`]: crate::ast

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use self::core::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, Parser};

use crate::Result;
use crate::ast::Statement;
use crate::lexer::lex;

/// Main entry point, using the default fuel limits.
pub fn parse(source: &str) -> Result<Statement> {
    Parser::new(source, lex(source)).parse()
}
