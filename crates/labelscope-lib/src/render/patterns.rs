use std::fmt::{self, Write};

use labelscope_syntax::ast::{
    Direction, NodePattern, PathPattern, PatternPart, RelationshipPattern, ShortestPath,
    VariableLength,
};

use super::expressions::write_expr;
use super::{write_labels, write_list, write_name};

pub(super) fn write_pattern_parts(w: &mut dyn Write, parts: &[PatternPart]) -> fmt::Result {
    write_list(w, parts, |w, part| write_pattern_part(w, part))
}

pub(super) fn write_pattern_part(w: &mut dyn Write, part: &PatternPart) -> fmt::Result {
    if let Some(variable) = &part.variable {
        write_name(w, variable)?;
        w.write_str(" = ")?;
    }
    match part.shortest {
        Some(ShortestPath::Single) => {
            w.write_str("shortestPath(")?;
            write_path(w, &part.path)?;
            w.write_char(')')
        }
        Some(ShortestPath::All) => {
            w.write_str("allShortestPaths(")?;
            write_path(w, &part.path)?;
            w.write_char(')')
        }
        None => write_path(w, &part.path),
    }
}

pub(super) fn write_path(w: &mut dyn Write, path: &PathPattern) -> fmt::Result {
    write_node(w, &path.start)?;
    for step in &path.steps {
        write_relationship(w, &step.relationship)?;
        write_node(w, &step.node)?;
    }
    Ok(())
}

/// `(var COPY OF base:A:B {props})`
fn write_node(w: &mut dyn Write, node: &NodePattern) -> fmt::Result {
    w.write_char('(')?;
    let mut empty = true;
    if let Some(variable) = &node.variable {
        write_name(w, variable)?;
        empty = false;
    }
    if let Some(base) = &node.base_node {
        if !empty {
            w.write_char(' ')?;
        }
        w.write_str("COPY OF ")?;
        write_name(w, base)?;
        empty = false;
    }
    write_labels(w, &node.labels)?;
    empty &= node.labels.is_empty();
    if let Some(properties) = &node.properties {
        if !empty {
            w.write_char(' ')?;
        }
        write_expr(w, properties)?;
    }
    w.write_char(')')
}

fn write_relationship(w: &mut dyn Write, rel: &RelationshipPattern) -> fmt::Result {
    let (left, right) = match rel.direction {
        Direction::Left => ("<-", "-"),
        Direction::Right => ("-", "->"),
        Direction::Both => ("<-", "->"),
        Direction::Undirected => ("-", "-"),
    };
    w.write_str(left)?;
    if rel.has_detail() {
        write_relationship_detail(w, rel)?;
    }
    w.write_str(right)
}

/// `[var:T1|T2*min..max {props}]`
fn write_relationship_detail(w: &mut dyn Write, rel: &RelationshipPattern) -> fmt::Result {
    w.write_char('[')?;
    if let Some(variable) = &rel.variable {
        write_name(w, variable)?;
    }
    for (i, ty) in rel.types.iter().enumerate() {
        w.write_char(if i == 0 { ':' } else { '|' })?;
        write_name(w, ty)?;
    }
    match rel.length {
        Some(VariableLength::Unbounded) => w.write_char('*')?,
        Some(VariableLength::Exact(n)) => write!(w, "*{}", n)?,
        Some(VariableLength::Range { min, max }) => {
            w.write_char('*')?;
            if let Some(min) = min {
                write!(w, "{}", min)?;
            }
            w.write_str("..")?;
            if let Some(max) = max {
                write!(w, "{}", max)?;
            }
        }
        None => {}
    }
    if let Some(properties) = &rel.properties {
        let empty = rel.variable.is_none() && rel.types.is_empty() && rel.length.is_none();
        if !empty {
            w.write_char(' ')?;
        }
        write_expr(w, properties)?;
    }
    w.write_char(']')
}
