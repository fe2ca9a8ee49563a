use std::fmt::{self, Write};

use labelscope_syntax::ast::{
    Call, Clause, Expr, MergeTrigger, Projection, QualifiedName, RemoveItem, SetItem,
    SortDirection,
};

use super::expressions::write_expr;
use super::patterns::{write_pattern_part, write_pattern_parts};
use super::{write_labels, write_list, write_name};

pub(super) fn write_clause(w: &mut dyn Write, clause: &Clause) -> fmt::Result {
    match clause {
        Clause::Match(m) => {
            if m.optional {
                w.write_str("OPTIONAL ")?;
            }
            w.write_str("MATCH ")?;
            write_pattern_parts(w, &m.pattern.parts)?;
            write_where(w, m.predicate.as_ref())
        }
        Clause::Create(c) => {
            w.write_str("CREATE ")?;
            write_pattern_parts(w, &c.pattern.parts)
        }
        Clause::Merge(m) => {
            w.write_str("MERGE ")?;
            write_pattern_part(w, &m.part)?;
            for action in &m.actions {
                match action.on {
                    MergeTrigger::OnCreate => w.write_str(" ON CREATE SET ")?,
                    MergeTrigger::OnMatch => w.write_str(" ON MATCH SET ")?,
                }
                write_list(w, &action.items, write_set_item)?;
            }
            Ok(())
        }
        Clause::Delete(d) => {
            if d.detach {
                w.write_str("DETACH ")?;
            }
            w.write_str("DELETE ")?;
            write_list(w, &d.exprs, |w, e| write_expr(w, e))
        }
        Clause::Set(s) => {
            w.write_str("SET ")?;
            write_list(w, &s.items, write_set_item)
        }
        Clause::Remove(r) => {
            w.write_str("REMOVE ")?;
            write_list(w, &r.items, |w, item| match item {
                RemoveItem::Labels { variable, labels } => {
                    write_name(w, variable)?;
                    write_labels(w, labels)
                }
                RemoveItem::Property(expr) => write_expr(w, expr),
            })
        }
        Clause::Return(r) => {
            w.write_str("RETURN ")?;
            write_projection(w, &r.projection)
        }
        Clause::With(with) => {
            w.write_str("WITH ")?;
            write_projection(w, &with.projection)?;
            write_where(w, with.predicate.as_ref())
        }
        Clause::Unwind(u) => {
            w.write_str("UNWIND ")?;
            write_expr(w, &u.expr)?;
            w.write_str(" AS ")?;
            write_name(w, &u.variable)
        }
        Clause::Call(call) => write_call(w, call),
        Clause::Foreach(f) => {
            w.write_str("FOREACH (")?;
            write_name(w, &f.variable)?;
            w.write_str(" IN ")?;
            write_expr(w, &f.list)?;
            w.write_str(" |")?;
            for clause in &f.clauses {
                w.write_char(' ')?;
                write_clause(w, clause)?;
            }
            w.write_char(')')
        }
        Clause::Union(u) => w.write_str(if u.all { "UNION ALL" } else { "UNION" }),
    }
}

fn write_where(w: &mut dyn Write, predicate: Option<&Expr>) -> fmt::Result {
    let Some(predicate) = predicate else {
        return Ok(());
    };
    w.write_str(" WHERE ")?;
    write_expr(w, predicate)
}

/// Items, then `ORDER BY`, `SKIP` and `LIMIT`; the caller adds `WHERE`.
fn write_projection(w: &mut dyn Write, projection: &Projection) -> fmt::Result {
    if projection.distinct {
        w.write_str("DISTINCT ")?;
    }
    if projection.star {
        w.write_char('*')?;
        if !projection.items.is_empty() {
            w.write_str(", ")?;
        }
    }
    write_list(w, &projection.items, |w, item| {
        write_expr(w, &item.expr)?;
        if let Some(alias) = &item.alias {
            w.write_str(" AS ")?;
            write_name(w, alias)?;
        }
        Ok(())
    })?;

    if !projection.order_by.is_empty() {
        w.write_str(" ORDER BY ")?;
        write_list(w, &projection.order_by, |w, sort| {
            write_expr(w, &sort.expr)?;
            match sort.direction {
                SortDirection::Ascending => w.write_str(" ASCENDING"),
                SortDirection::Descending => w.write_str(" DESCENDING"),
            }
        })?;
    }
    if let Some(skip) = &projection.skip {
        w.write_str(" SKIP ")?;
        write_expr(w, skip)?;
    }
    if let Some(limit) = &projection.limit {
        w.write_str(" LIMIT ")?;
        write_expr(w, limit)?;
    }
    Ok(())
}

fn write_set_item(w: &mut dyn Write, item: &SetItem) -> fmt::Result {
    match item {
        SetItem::SetProperty { target, value } => {
            write_expr(w, target)?;
            w.write_str(" = ")?;
            write_expr(w, value)
        }
        SetItem::SetLabels { variable, labels } => {
            write_name(w, variable)?;
            write_labels(w, labels)
        }
        SetItem::MergeProperties { variable, value } => {
            write_name(w, variable)?;
            w.write_str(" += ")?;
            write_expr(w, value)
        }
        SetItem::OverwriteProperties { variable, value } => {
            write_name(w, variable)?;
            w.write_str(" = ")?;
            write_expr(w, value)
        }
    }
}

/// `CALL ns.name(args)`; the parentheses are written even when the query
/// omitted them.
fn write_call(w: &mut dyn Write, call: &Call) -> fmt::Result {
    w.write_str("CALL ")?;
    write_qualified_name(w, &call.procedure)?;
    w.write_char('(')?;
    if let Some(args) = &call.arguments {
        write_list(w, args, |w, e| write_expr(w, e))?;
    }
    w.write_char(')')?;

    let Some(yields) = &call.yields else {
        return Ok(());
    };
    w.write_str(" YIELD ")?;
    write_list(w, &yields.items, |w, item| {
        write_name(w, &item.field)?;
        if let Some(alias) = &item.alias {
            w.write_str(" AS ")?;
            write_name(w, alias)?;
        }
        Ok(())
    })?;
    write_where(w, yields.predicate.as_ref())
}

pub(super) fn write_qualified_name(w: &mut dyn Write, name: &QualifiedName) -> fmt::Result {
    for segment in &name.namespace {
        write_name(w, segment)?;
        w.write_char('.')?;
    }
    write_name(w, &name.name)
}
