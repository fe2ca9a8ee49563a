use std::fmt::{self, Write};

use labelscope_syntax::ast::{Expr, Precedence, UnaryOp};

use super::clauses::write_qualified_name;
use super::patterns::write_path;
use super::{write_labels, write_list, write_name};

pub(super) fn write_expr(w: &mut dyn Write, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Variable(name) => write_name(w, name),
        Expr::Parameter(name) => {
            w.write_char('$')?;
            if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
                return w.write_str(name);
            }
            write_name(w, name)
        }
        Expr::Integer(text) | Expr::Float(text) => w.write_str(text),
        Expr::String(value) => write_string(w, value),
        Expr::Bool(true) => w.write_str("true"),
        Expr::Bool(false) => w.write_str("false"),
        Expr::Null => w.write_str("NULL"),
        Expr::List(items) => {
            w.write_char('[')?;
            write_list(w, items, |w, e| write_expr(w, e))?;
            w.write_char(']')
        }
        Expr::Map(entries) => {
            w.write_char('{')?;
            write_list(w, entries, |w, entry| {
                write_name(w, &entry.key)?;
                w.write_str(": ")?;
                write_expr(w, &entry.value)
            })?;
            w.write_char('}')
        }
        Expr::Property { base, key } => {
            write_postfix_base(w, base)?;
            w.write_char('.')?;
            write_name(w, key)
        }
        Expr::Index { base, index } => {
            write_postfix_base(w, base)?;
            w.write_char('[')?;
            write_expr(w, index)?;
            w.write_char(']')
        }
        Expr::Slice { base, from, to } => {
            write_postfix_base(w, base)?;
            w.write_char('[')?;
            if let Some(from) = from {
                write_expr(w, from)?;
            }
            w.write_str("..")?;
            if let Some(to) = to {
                write_expr(w, to)?;
            }
            w.write_char(']')
        }
        Expr::HasLabels { base, labels } => {
            write_postfix_base(w, base)?;
            write_labels(w, labels)
        }
        Expr::FunctionCall(call) => {
            write_qualified_name(w, &call.name)?;
            w.write_char('(')?;
            if call.distinct {
                w.write_str("DISTINCT ")?;
            }
            write_list(w, &call.args, |w, e| write_expr(w, e))?;
            w.write_char(')')
        }
        Expr::CountStar => w.write_str("count(*)"),
        Expr::Binary { op, lhs, rhs } => {
            let prec = op.precedence();
            // Comparisons chain, so a comparison operand always keeps its parentheses.
            let lhs_parens = if prec == Precedence::Comparison {
                lhs.precedence() <= prec
            } else {
                lhs.precedence() < prec
            };
            write_operand(w, lhs, lhs_parens)?;
            write!(w, " {} ", op.as_str())?;
            write_operand(w, rhs, rhs.precedence() <= prec)
        }
        Expr::Unary { op, operand } => match op {
            UnaryOp::Not => {
                w.write_str("not ")?;
                write_operand(w, operand, operand.precedence() < Precedence::Not)
            }
            UnaryOp::Minus | UnaryOp::Plus => {
                w.write_char(if *op == UnaryOp::Minus { '-' } else { '+' })?;
                write_operand(w, operand, operand.precedence() < Precedence::Sign)
            }
        },
        Expr::IsNull { operand, negated } => {
            write_operand(w, operand, operand.precedence() < Precedence::Predicate)?;
            w.write_str(if *negated { " IS NOT NULL" } else { " IS NULL" })
        }
        Expr::Case(case) => {
            w.write_str("CASE")?;
            if let Some(subject) = &case.subject {
                w.write_char(' ')?;
                write_expr(w, subject)?;
            }
            for alt in &case.alternatives {
                w.write_str(" WHEN ")?;
                write_expr(w, &alt.when)?;
                w.write_str(" THEN ")?;
                write_expr(w, &alt.then)?;
            }
            if let Some(default) = &case.default {
                w.write_str(" ELSE ")?;
                write_expr(w, default)?;
            }
            w.write_str(" END")
        }
        Expr::ListComprehension(lc) => {
            w.write_char('[')?;
            write_name(w, &lc.variable)?;
            w.write_str(" IN ")?;
            write_expr(w, &lc.list)?;
            write_filter(w, lc.predicate.as_deref())?;
            if let Some(projection) = &lc.projection {
                w.write_str(" | ")?;
                write_expr(w, projection)?;
            }
            w.write_char(']')
        }
        Expr::PatternComprehension(pc) => {
            w.write_char('[')?;
            if let Some(variable) = &pc.variable {
                write_name(w, variable)?;
                w.write_str(" = ")?;
            }
            write_path(w, &pc.path)?;
            write_filter(w, pc.predicate.as_deref())?;
            w.write_str(" | ")?;
            write_expr(w, &pc.projection)?;
            w.write_char(']')
        }
        Expr::Quantified(q) => {
            write!(w, "{}(", q.quantifier.as_str())?;
            write_name(w, &q.variable)?;
            w.write_str(" IN ")?;
            write_expr(w, &q.list)?;
            write_filter(w, q.predicate.as_deref())?;
            w.write_char(')')
        }
        Expr::Pattern(path) => write_path(w, path),
    }
}

fn write_operand(w: &mut dyn Write, expr: &Expr, parens: bool) -> fmt::Result {
    if !parens {
        return write_expr(w, expr);
    }
    w.write_char('(')?;
    write_expr(w, expr)?;
    w.write_char(')')
}

fn write_postfix_base(w: &mut dyn Write, base: &Expr) -> fmt::Result {
    write_operand(w, base, base.precedence() < Precedence::Postfix)
}

fn write_filter(w: &mut dyn Write, predicate: Option<&Expr>) -> fmt::Result {
    let Some(predicate) = predicate else {
        return Ok(());
    };
    w.write_str(" WHERE ")?;
    write_expr(w, predicate)
}

/// Double-quoted, with control characters escaped.
fn write_string(w: &mut dyn Write, value: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            '\u{8}' => w.write_str("\\b")?,
            '\u{c}' => w.write_str("\\f")?,
            '\0' => w.write_str("\\0")?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('"')
}
