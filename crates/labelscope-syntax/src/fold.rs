//! By-value AST folding.
//!
//! # Usage
//!
//! Implement `Fold` for your struct. Override `fold_*` methods to add logic.
//! Call the matching `walk_*` inside your override to rebuild the children
//! first (bottom-up), then transform the node it returns.
//!
//! ```ignore
//! impl Fold for MyPass {
//!     fn fold_node_pattern(&mut self, node: NodePattern) -> NodePattern {
//!         let mut node = walk_node_pattern(self, node);
//!         node.labels.push("Extra".into());
//!         node
//!     }
//! }
//! ```
//!
//! Walks visit children in source order. Sub-trees without hooks of interest
//! are moved through unchanged.

use crate::ast::{
    Call, Case, CaseAlternative, Clause, Create, Delete, Expr, Foreach, FunctionCall,
    ListComprehension, MapEntry, Match, Merge, MergeAction, NodePattern, PathPattern, Pattern,
    PatternComprehension, PatternPart, PatternStep, Projection, ProjectionItem, Quantified,
    RelationshipPattern, Remove, RemoveItem, Return, Set, SetItem, SortItem, Statement, Unwind,
    With, YieldItems,
};

pub trait Fold: Sized {
    fn fold_statement(&mut self, statement: Statement) -> Statement {
        walk_statement(self, statement)
    }

    fn fold_clause(&mut self, clause: Clause) -> Clause {
        walk_clause(self, clause)
    }

    fn fold_projection(&mut self, projection: Projection) -> Projection {
        walk_projection(self, projection)
    }

    fn fold_pattern_part(&mut self, part: PatternPart) -> PatternPart {
        walk_pattern_part(self, part)
    }

    fn fold_path(&mut self, path: PathPattern) -> PathPattern {
        walk_path(self, path)
    }

    fn fold_node_pattern(&mut self, node: NodePattern) -> NodePattern {
        walk_node_pattern(self, node)
    }

    fn fold_relationship_pattern(&mut self, rel: RelationshipPattern) -> RelationshipPattern {
        walk_relationship_pattern(self, rel)
    }

    fn fold_set_item(&mut self, item: SetItem) -> SetItem {
        walk_set_item(self, item)
    }

    fn fold_remove_item(&mut self, item: RemoveItem) -> RemoveItem {
        walk_remove_item(self, item)
    }

    fn fold_expr(&mut self, expr: Expr) -> Expr {
        walk_expr(self, expr)
    }
}

pub fn walk_statement<F: Fold>(folder: &mut F, statement: Statement) -> Statement {
    Statement {
        clauses: fold_clauses(folder, statement.clauses),
        span: statement.span,
    }
}

fn fold_clauses<F: Fold>(folder: &mut F, clauses: Vec<Clause>) -> Vec<Clause> {
    clauses.into_iter().map(|c| folder.fold_clause(c)).collect()
}

fn fold_exprs<F: Fold>(folder: &mut F, exprs: Vec<Expr>) -> Vec<Expr> {
    exprs.into_iter().map(|e| folder.fold_expr(e)).collect()
}

fn fold_boxed<F: Fold>(folder: &mut F, expr: Box<Expr>) -> Box<Expr> {
    Box::new(folder.fold_expr(*expr))
}

fn fold_opt_boxed<F: Fold>(folder: &mut F, expr: Option<Box<Expr>>) -> Option<Box<Expr>> {
    expr.map(|e| fold_boxed(folder, e))
}

fn fold_pattern<F: Fold>(folder: &mut F, pattern: Pattern) -> Pattern {
    Pattern {
        parts: pattern
            .parts
            .into_iter()
            .map(|p| folder.fold_pattern_part(p))
            .collect(),
    }
}

fn fold_set_items<F: Fold>(folder: &mut F, items: Vec<SetItem>) -> Vec<SetItem> {
    items.into_iter().map(|i| folder.fold_set_item(i)).collect()
}

pub fn walk_clause<F: Fold>(folder: &mut F, clause: Clause) -> Clause {
    match clause {
        Clause::Match(m) => {
            let pattern = fold_pattern(folder, m.pattern);
            let predicate = m.predicate.map(|e| folder.fold_expr(e));
            Clause::Match(Match {
                optional: m.optional,
                pattern,
                predicate,
            })
        }
        Clause::Create(c) => Clause::Create(Create {
            pattern: fold_pattern(folder, c.pattern),
        }),
        Clause::Merge(m) => {
            let part = folder.fold_pattern_part(m.part);
            let actions = m
                .actions
                .into_iter()
                .map(|a| MergeAction {
                    on: a.on,
                    items: fold_set_items(folder, a.items),
                })
                .collect();
            Clause::Merge(Merge { part, actions })
        }
        Clause::Delete(d) => Clause::Delete(Delete {
            detach: d.detach,
            exprs: fold_exprs(folder, d.exprs),
        }),
        Clause::Set(s) => Clause::Set(Set {
            items: fold_set_items(folder, s.items),
        }),
        Clause::Remove(r) => Clause::Remove(Remove {
            items: r
                .items
                .into_iter()
                .map(|i| folder.fold_remove_item(i))
                .collect(),
        }),
        Clause::Return(r) => Clause::Return(Return {
            projection: folder.fold_projection(r.projection),
        }),
        Clause::With(w) => {
            let projection = folder.fold_projection(w.projection);
            let predicate = w.predicate.map(|e| folder.fold_expr(e));
            Clause::With(With {
                projection,
                predicate,
            })
        }
        Clause::Unwind(u) => Clause::Unwind(Unwind {
            expr: folder.fold_expr(u.expr),
            variable: u.variable,
        }),
        Clause::Call(c) => {
            let arguments = c.arguments.map(|args| fold_exprs(folder, args));
            let yields = c.yields.map(|y| YieldItems {
                items: y.items,
                predicate: y.predicate.map(|e| folder.fold_expr(e)),
            });
            Clause::Call(Call {
                procedure: c.procedure,
                arguments,
                yields,
            })
        }
        Clause::Foreach(f) => {
            let list = folder.fold_expr(f.list);
            let clauses = fold_clauses(folder, f.clauses);
            Clause::Foreach(Foreach {
                variable: f.variable,
                list,
                clauses,
            })
        }
        Clause::Union(u) => Clause::Union(u),
    }
}

pub fn walk_projection<F: Fold>(folder: &mut F, projection: Projection) -> Projection {
    let items = projection
        .items
        .into_iter()
        .map(|item| ProjectionItem {
            expr: folder.fold_expr(item.expr),
            alias: item.alias,
        })
        .collect();
    let order_by = projection
        .order_by
        .into_iter()
        .map(|sort| SortItem {
            expr: folder.fold_expr(sort.expr),
            direction: sort.direction,
        })
        .collect();
    let skip = projection.skip.map(|e| folder.fold_expr(e));
    let limit = projection.limit.map(|e| folder.fold_expr(e));
    Projection {
        distinct: projection.distinct,
        star: projection.star,
        items,
        order_by,
        skip,
        limit,
    }
}

pub fn walk_pattern_part<F: Fold>(folder: &mut F, part: PatternPart) -> PatternPart {
    PatternPart {
        variable: part.variable,
        shortest: part.shortest,
        path: folder.fold_path(part.path),
    }
}

pub fn walk_path<F: Fold>(folder: &mut F, path: PathPattern) -> PathPattern {
    let start = folder.fold_node_pattern(path.start);
    let steps = path
        .steps
        .into_iter()
        .map(|step| {
            let relationship = folder.fold_relationship_pattern(step.relationship);
            let node = folder.fold_node_pattern(step.node);
            PatternStep { relationship, node }
        })
        .collect();
    PathPattern { start, steps }
}

pub fn walk_node_pattern<F: Fold>(folder: &mut F, node: NodePattern) -> NodePattern {
    NodePattern {
        properties: fold_opt_boxed(folder, node.properties),
        ..node
    }
}

pub fn walk_relationship_pattern<F: Fold>(
    folder: &mut F,
    rel: RelationshipPattern,
) -> RelationshipPattern {
    RelationshipPattern {
        properties: fold_opt_boxed(folder, rel.properties),
        ..rel
    }
}

pub fn walk_set_item<F: Fold>(folder: &mut F, item: SetItem) -> SetItem {
    match item {
        SetItem::SetProperty { target, value } => {
            let target = folder.fold_expr(target);
            let value = folder.fold_expr(value);
            SetItem::SetProperty { target, value }
        }
        SetItem::SetLabels { .. } => item,
        SetItem::MergeProperties { variable, value } => SetItem::MergeProperties {
            variable,
            value: folder.fold_expr(value),
        },
        SetItem::OverwriteProperties { variable, value } => SetItem::OverwriteProperties {
            variable,
            value: folder.fold_expr(value),
        },
    }
}

pub fn walk_remove_item<F: Fold>(folder: &mut F, item: RemoveItem) -> RemoveItem {
    match item {
        RemoveItem::Labels { .. } => item,
        RemoveItem::Property(expr) => RemoveItem::Property(folder.fold_expr(expr)),
    }
}

pub fn walk_expr<F: Fold>(folder: &mut F, expr: Expr) -> Expr {
    match expr {
        Expr::Variable(_)
        | Expr::Parameter(_)
        | Expr::Integer(_)
        | Expr::Float(_)
        | Expr::String(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::CountStar => expr,
        Expr::List(items) => Expr::List(fold_exprs(folder, items)),
        Expr::Map(entries) => Expr::Map(
            entries
                .into_iter()
                .map(|entry| MapEntry {
                    key: entry.key,
                    value: folder.fold_expr(entry.value),
                })
                .collect(),
        ),
        Expr::Property { base, key } => Expr::Property {
            base: fold_boxed(folder, base),
            key,
        },
        Expr::Index { base, index } => {
            let base = fold_boxed(folder, base);
            let index = fold_boxed(folder, index);
            Expr::Index { base, index }
        }
        Expr::Slice { base, from, to } => {
            let base = fold_boxed(folder, base);
            let from = fold_opt_boxed(folder, from);
            let to = fold_opt_boxed(folder, to);
            Expr::Slice { base, from, to }
        }
        Expr::HasLabels { base, labels } => Expr::HasLabels {
            base: fold_boxed(folder, base),
            labels,
        },
        Expr::FunctionCall(call) => Expr::FunctionCall(FunctionCall {
            name: call.name,
            distinct: call.distinct,
            args: fold_exprs(folder, call.args),
        }),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = fold_boxed(folder, lhs);
            let rhs = fold_boxed(folder, rhs);
            Expr::Binary { op, lhs, rhs }
        }
        Expr::Unary { op, operand } => Expr::Unary {
            op,
            operand: fold_boxed(folder, operand),
        },
        Expr::IsNull { operand, negated } => Expr::IsNull {
            operand: fold_boxed(folder, operand),
            negated,
        },
        Expr::Case(case) => {
            let subject = fold_opt_boxed(folder, case.subject);
            let alternatives = case
                .alternatives
                .into_iter()
                .map(|alt| {
                    let when = folder.fold_expr(alt.when);
                    let then = folder.fold_expr(alt.then);
                    CaseAlternative { when, then }
                })
                .collect();
            let default = fold_opt_boxed(folder, case.default);
            Expr::Case(Case {
                subject,
                alternatives,
                default,
            })
        }
        Expr::ListComprehension(c) => {
            let list = fold_boxed(folder, c.list);
            let predicate = fold_opt_boxed(folder, c.predicate);
            let projection = fold_opt_boxed(folder, c.projection);
            Expr::ListComprehension(ListComprehension {
                variable: c.variable,
                list,
                predicate,
                projection,
            })
        }
        Expr::PatternComprehension(c) => {
            let path = folder.fold_path(c.path);
            let predicate = fold_opt_boxed(folder, c.predicate);
            let projection = fold_boxed(folder, c.projection);
            Expr::PatternComprehension(PatternComprehension {
                variable: c.variable,
                path,
                predicate,
                projection,
            })
        }
        Expr::Quantified(q) => {
            let list = fold_boxed(folder, q.list);
            let predicate = fold_opt_boxed(folder, q.predicate);
            Expr::Quantified(Quantified {
                quantifier: q.quantifier,
                variable: q.variable,
                list,
                predicate,
            })
        }
        Expr::Pattern(path) => Expr::Pattern(folder.fold_path(path)),
    }
}
