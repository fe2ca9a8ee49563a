//! Canonical query text for a [`Statement`].
//!
//! Output is a single line: upper-case clause keywords joined by one space,
//! `, ` between items, double-quoted strings, `$name` parameters and
//! parentheses only where operator precedence needs them. Names that are not
//! plain identifiers are back-tick quoted.

mod clauses;
mod expressions;
mod patterns;

#[cfg(test)]
mod tests;

use std::fmt::{self, Write};

use labelscope_syntax::Statement;

pub struct StatementRenderer<'a> {
    statement: &'a Statement,
}

impl<'a> StatementRenderer<'a> {
    pub fn new(statement: &'a Statement) -> Self {
        Self { statement }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        for (i, clause) in self.statement.clauses.iter().enumerate() {
            if i > 0 {
                w.write_char(' ')?;
            }
            clauses::write_clause(w, clause)?;
        }
        Ok(())
    }
}

pub fn render(statement: &Statement) -> String {
    StatementRenderer::new(statement).render()
}

/// Writes `items` separated by `, `.
fn write_list<T>(
    w: &mut dyn Write,
    items: &[T],
    mut item: impl FnMut(&mut dyn Write, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        item(w, it)?;
    }
    Ok(())
}

/// Variable, label, type or key; back-tick quoted unless a plain identifier.
fn write_name(w: &mut dyn Write, name: &str) -> fmt::Result {
    if is_plain_identifier(name) {
        return w.write_str(name);
    }
    write!(w, "`{}`", name.replace('`', "``"))
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn write_labels(w: &mut dyn Write, labels: &[String]) -> fmt::Result {
    for label in labels {
        w.write_char(':')?;
        write_name(w, label)?;
    }
    Ok(())
}
