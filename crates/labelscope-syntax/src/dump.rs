//! Indented debug rendering of a [`Statement`] tree.
//!
//! One line per node, children indented by two spaces. Names are printed
//! unquoted; string literals use Rust debug quoting.

use std::fmt::Write;

use rowan::TextRange;

use crate::ast::{
    Call, Case, Clause, Direction, Expr, MergeTrigger, NodePattern, PathPattern, PatternPart,
    Projection, QualifiedName, RelationshipPattern, RemoveItem, SetItem, ShortestPath,
    SortDirection, Statement, UnaryOp, VariableLength,
};

pub struct AstPrinter<'a> {
    statement: &'a Statement,
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(statement: &'a Statement) -> Self {
        Self {
            statement,
            spans: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "Statement{}", self.span(self.statement.span))?;
        for clause in &self.statement.clauses {
            self.format_clause(clause, 1, w)?;
        }
        Ok(())
    }

    fn span(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }

    fn format_clause(&self, clause: &Clause, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match clause {
            Clause::Match(m) => {
                let name = if m.optional { "OptionalMatch" } else { "Match" };
                writeln!(w, "{}{}", prefix, name)?;
                for part in &m.pattern.parts {
                    self.format_part(part, indent + 1, w)?;
                }
                self.format_where(m.predicate.as_ref(), indent + 1, w)
            }
            Clause::Create(c) => {
                writeln!(w, "{}Create", prefix)?;
                for part in &c.pattern.parts {
                    self.format_part(part, indent + 1, w)?;
                }
                Ok(())
            }
            Clause::Merge(m) => {
                writeln!(w, "{}Merge", prefix)?;
                self.format_part(&m.part, indent + 1, w)?;
                for action in &m.actions {
                    let name = match action.on {
                        MergeTrigger::OnCreate => "OnCreate",
                        MergeTrigger::OnMatch => "OnMatch",
                    };
                    writeln!(w, "{}  {}", prefix, name)?;
                    for item in &action.items {
                        self.format_set_item(item, indent + 2, w)?;
                    }
                }
                Ok(())
            }
            Clause::Delete(d) => {
                let name = if d.detach { "DetachDelete" } else { "Delete" };
                writeln!(w, "{}{}", prefix, name)?;
                for expr in &d.exprs {
                    self.format_expr(expr, indent + 1, w)?;
                }
                Ok(())
            }
            Clause::Set(s) => {
                writeln!(w, "{}Set", prefix)?;
                for item in &s.items {
                    self.format_set_item(item, indent + 1, w)?;
                }
                Ok(())
            }
            Clause::Remove(r) => {
                writeln!(w, "{}Remove", prefix)?;
                for item in &r.items {
                    match item {
                        RemoveItem::Labels { variable, labels } => {
                            writeln!(w, "{}  Labels {}{}", prefix, variable, labels_suffix(labels))?;
                        }
                        RemoveItem::Property(expr) => {
                            writeln!(w, "{}  Property", prefix)?;
                            self.format_expr(expr, indent + 2, w)?;
                        }
                    }
                }
                Ok(())
            }
            Clause::Return(r) => {
                writeln!(w, "{}Return{}", prefix, projection_flags(&r.projection))?;
                self.format_projection(&r.projection, indent + 1, w)
            }
            Clause::With(with) => {
                writeln!(w, "{}With{}", prefix, projection_flags(&with.projection))?;
                self.format_projection(&with.projection, indent + 1, w)?;
                self.format_where(with.predicate.as_ref(), indent + 1, w)
            }
            Clause::Unwind(u) => {
                writeln!(w, "{}Unwind {}", prefix, u.variable)?;
                self.format_expr(&u.expr, indent + 1, w)
            }
            Clause::Call(call) => self.format_call(call, indent, w),
            Clause::Foreach(f) => {
                writeln!(w, "{}Foreach {}", prefix, f.variable)?;
                self.format_expr(&f.list, indent + 1, w)?;
                for clause in &f.clauses {
                    self.format_clause(clause, indent + 1, w)?;
                }
                Ok(())
            }
            Clause::Union(u) => {
                let name = if u.all { "UnionAll" } else { "Union" };
                writeln!(w, "{}{}", prefix, name)
            }
        }
    }

    fn format_call(&self, call: &Call, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}Call {}", prefix, qualified(&call.procedure))?;
        if let Some(args) = &call.arguments {
            writeln!(w, "{}  Args", prefix)?;
            for arg in args {
                self.format_expr(arg, indent + 2, w)?;
            }
        }
        if let Some(yields) = &call.yields {
            writeln!(w, "{}  Yield", prefix)?;
            for item in &yields.items {
                match &item.alias {
                    Some(alias) => writeln!(w, "{}    Field {} AS {}", prefix, item.field, alias)?,
                    None => writeln!(w, "{}    Field {}", prefix, item.field)?,
                }
            }
            self.format_where(yields.predicate.as_ref(), indent + 2, w)?;
        }
        Ok(())
    }

    fn format_projection(
        &self,
        projection: &Projection,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        for item in &projection.items {
            match &item.alias {
                Some(alias) => writeln!(w, "{}Item AS {}", prefix, alias)?,
                None => writeln!(w, "{}Item", prefix)?,
            }
            self.format_expr(&item.expr, indent + 1, w)?;
        }
        for sort in &projection.order_by {
            let direction = match sort.direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            writeln!(w, "{}OrderBy {}", prefix, direction)?;
            self.format_expr(&sort.expr, indent + 1, w)?;
        }
        if let Some(skip) = &projection.skip {
            writeln!(w, "{}Skip", prefix)?;
            self.format_expr(skip, indent + 1, w)?;
        }
        if let Some(limit) = &projection.limit {
            writeln!(w, "{}Limit", prefix)?;
            self.format_expr(limit, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_where(
        &self,
        predicate: Option<&Expr>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let Some(predicate) = predicate else {
            return Ok(());
        };
        writeln!(w, "{}Where", "  ".repeat(indent))?;
        self.format_expr(predicate, indent + 1, w)
    }

    fn format_set_item(&self, item: &SetItem, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match item {
            SetItem::SetProperty { target, value } => {
                writeln!(w, "{}SetProperty", prefix)?;
                self.format_expr(target, indent + 1, w)?;
                self.format_expr(value, indent + 1, w)
            }
            SetItem::SetLabels { variable, labels } => {
                writeln!(w, "{}SetLabels {}{}", prefix, variable, labels_suffix(labels))
            }
            SetItem::MergeProperties { variable, value } => {
                writeln!(w, "{}MergeProperties {}", prefix, variable)?;
                self.format_expr(value, indent + 1, w)
            }
            SetItem::OverwriteProperties { variable, value } => {
                writeln!(w, "{}OverwriteProperties {}", prefix, variable)?;
                self.format_expr(value, indent + 1, w)
            }
        }
    }

    fn format_part(&self, part: &PatternPart, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}Part", prefix)?;
        if let Some(variable) = &part.variable {
            write!(w, " {}", variable)?;
        }
        match part.shortest {
            Some(ShortestPath::Single) => write!(w, " shortestPath")?,
            Some(ShortestPath::All) => write!(w, " allShortestPaths")?,
            None => {}
        }
        writeln!(w)?;
        self.format_path(&part.path, indent + 1, w)
    }

    fn format_path(&self, path: &PathPattern, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(&path.start, indent, w)?;
        for step in &path.steps {
            self.format_relationship(&step.relationship, indent, w)?;
            self.format_node(&step.node, indent, w)?;
        }
        Ok(())
    }

    fn format_node(&self, node: &NodePattern, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}Node{}", prefix, self.span(node.span))?;
        if let Some(variable) = &node.variable {
            write!(w, " {}", variable)?;
        }
        if let Some(base) = &node.base_node {
            write!(w, " copy of {}", base)?;
        }
        writeln!(w, "{}", labels_suffix(&node.labels))?;
        if let Some(properties) = &node.properties {
            self.format_expr(properties, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_relationship(
        &self,
        rel: &RelationshipPattern,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let arrow = match rel.direction {
            Direction::Left => "<-",
            Direction::Right => "->",
            Direction::Both => "<->",
            Direction::Undirected => "-",
        };
        write!(w, "{}Rel{} {}", prefix, self.span(rel.span), arrow)?;
        if let Some(variable) = &rel.variable {
            write!(w, " {}", variable)?;
        }
        if !rel.types.is_empty() {
            write!(w, " :{}", rel.types.join("|"))?;
        }
        match rel.length {
            Some(VariableLength::Unbounded) => write!(w, " *")?,
            Some(VariableLength::Exact(n)) => write!(w, " *{}", n)?,
            Some(VariableLength::Range { min, max }) => write!(
                w,
                " *{}..{}",
                min.map(|n| n.to_string()).unwrap_or_default(),
                max.map(|n| n.to_string()).unwrap_or_default()
            )?,
            None => {}
        }
        writeln!(w)?;
        if let Some(properties) = &rel.properties {
            self.format_expr(properties, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match expr {
            Expr::Variable(name) => writeln!(w, "{}Variable {}", prefix, name),
            Expr::Parameter(name) => writeln!(w, "{}Parameter {}", prefix, name),
            Expr::Integer(text) => writeln!(w, "{}Integer {}", prefix, text),
            Expr::Float(text) => writeln!(w, "{}Float {}", prefix, text),
            Expr::String(value) => writeln!(w, "{}String {:?}", prefix, value),
            Expr::Bool(value) => writeln!(w, "{}Bool {}", prefix, value),
            Expr::Null => writeln!(w, "{}Null", prefix),
            Expr::List(items) => {
                writeln!(w, "{}List", prefix)?;
                for item in items {
                    self.format_expr(item, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::Map(entries) => {
                writeln!(w, "{}Map", prefix)?;
                for entry in entries {
                    writeln!(w, "{}  Entry {}", prefix, entry.key)?;
                    self.format_expr(&entry.value, indent + 2, w)?;
                }
                Ok(())
            }
            Expr::Property { base, key } => {
                writeln!(w, "{}Property {}", prefix, key)?;
                self.format_expr(base, indent + 1, w)
            }
            Expr::Index { base, index } => {
                writeln!(w, "{}Index", prefix)?;
                self.format_expr(base, indent + 1, w)?;
                self.format_expr(index, indent + 1, w)
            }
            Expr::Slice { base, from, to } => {
                writeln!(w, "{}Slice", prefix)?;
                self.format_expr(base, indent + 1, w)?;
                if let Some(from) = from {
                    writeln!(w, "{}  From", prefix)?;
                    self.format_expr(from, indent + 2, w)?;
                }
                if let Some(to) = to {
                    writeln!(w, "{}  To", prefix)?;
                    self.format_expr(to, indent + 2, w)?;
                }
                Ok(())
            }
            Expr::HasLabels { base, labels } => {
                writeln!(w, "{}HasLabels{}", prefix, labels_suffix(labels))?;
                self.format_expr(base, indent + 1, w)
            }
            Expr::FunctionCall(call) => {
                let distinct = if call.distinct { " distinct" } else { "" };
                writeln!(w, "{}Call {}{}", prefix, qualified(&call.name), distinct)?;
                for arg in &call.args {
                    self.format_expr(arg, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::CountStar => writeln!(w, "{}CountStar", prefix),
            Expr::Binary { op, lhs, rhs } => {
                writeln!(w, "{}Binary {}", prefix, op.as_str())?;
                self.format_expr(lhs, indent + 1, w)?;
                self.format_expr(rhs, indent + 1, w)
            }
            Expr::Unary { op, operand } => {
                let op = match op {
                    UnaryOp::Not => "NOT",
                    UnaryOp::Minus => "-",
                    UnaryOp::Plus => "+",
                };
                writeln!(w, "{}Unary {}", prefix, op)?;
                self.format_expr(operand, indent + 1, w)
            }
            Expr::IsNull { operand, negated } => {
                let name = if *negated { "IsNotNull" } else { "IsNull" };
                writeln!(w, "{}{}", prefix, name)?;
                self.format_expr(operand, indent + 1, w)
            }
            Expr::Case(case) => self.format_case(case, indent, w),
            Expr::ListComprehension(c) => {
                writeln!(w, "{}ListComprehension {}", prefix, c.variable)?;
                self.format_expr(&c.list, indent + 1, w)?;
                self.format_where(c.predicate.as_deref(), indent + 1, w)?;
                if let Some(projection) = &c.projection {
                    writeln!(w, "{}  Project", prefix)?;
                    self.format_expr(projection, indent + 2, w)?;
                }
                Ok(())
            }
            Expr::PatternComprehension(c) => {
                write!(w, "{}PatternComprehension", prefix)?;
                if let Some(variable) = &c.variable {
                    write!(w, " {}", variable)?;
                }
                writeln!(w)?;
                self.format_path(&c.path, indent + 1, w)?;
                self.format_where(c.predicate.as_deref(), indent + 1, w)?;
                writeln!(w, "{}  Project", prefix)?;
                self.format_expr(&c.projection, indent + 2, w)
            }
            Expr::Quantified(q) => {
                writeln!(w, "{}Quantified {} {}", prefix, q.quantifier.as_str(), q.variable)?;
                self.format_expr(&q.list, indent + 1, w)?;
                self.format_where(q.predicate.as_deref(), indent + 1, w)
            }
            Expr::Pattern(path) => {
                writeln!(w, "{}PatternPredicate", prefix)?;
                self.format_path(path, indent + 1, w)
            }
        }
    }

    fn format_case(&self, case: &Case, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}Case", prefix)?;
        if let Some(subject) = &case.subject {
            self.format_expr(subject, indent + 1, w)?;
        }
        for alternative in &case.alternatives {
            writeln!(w, "{}  When", prefix)?;
            self.format_expr(&alternative.when, indent + 2, w)?;
            writeln!(w, "{}  Then", prefix)?;
            self.format_expr(&alternative.then, indent + 2, w)?;
        }
        if let Some(default) = &case.default {
            writeln!(w, "{}  Else", prefix)?;
            self.format_expr(default, indent + 2, w)?;
        }
        Ok(())
    }
}

fn labels_suffix(labels: &[String]) -> String {
    labels.iter().map(|l| format!(" :{}", l)).collect()
}

fn qualified(name: &QualifiedName) -> String {
    let mut out = String::new();
    for segment in &name.namespace {
        out.push_str(segment);
        out.push('.');
    }
    out.push_str(&name.name);
    out
}

fn projection_flags(projection: &Projection) -> &'static str {
    match (projection.distinct, projection.star) {
        (true, true) => " distinct *",
        (true, false) => " distinct",
        (false, true) => " *",
        (false, false) => "",
    }
}

impl Statement {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(self)
    }
}
