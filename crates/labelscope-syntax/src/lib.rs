//! Cypher front end for labelscope: lexer, parser and an owned syntax tree.
//!
//! # Example
//!
//! ```
//! use labelscope_syntax::parse;
//!
//! let statement = parse("MATCH (n:Person) RETURN n").expect("valid query");
//! assert_eq!(statement.clauses.len(), 2);
//! println!("{}", statement.printer().dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod dump;
pub mod fold;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

#[cfg(test)]
mod fold_tests;

pub use ast::Statement;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter};
pub use parser::{Parser, parse};

/// Errors that can occur during query parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("query parsing failed with {} errors", .0.len())]
    Syntax(Diagnostics),
}

impl Error {
    /// Diagnostics carried by a syntax error.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Syntax(diagnostics) => Some(diagnostics),
            Error::ExecFuelExhausted | Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
