//! Adds the label to node patterns and `SET` label items.
//!
//! The rewrite is a single bottom-up fold in source order. A node pattern
//! whose variable was already labeled earlier in the query is left alone, so
//! `MATCH (n) WHERE (n)-->()` labels `n` once. Anonymous node patterns are
//! always labeled. `SET n:A` items always get the label, even when repeated.
//! Each `UNION` branch binds its own variables, so the seen set starts over
//! at every `UNION`.

use indexmap::IndexSet;
use labelscope_syntax::Statement;
use labelscope_syntax::ast::{Clause, NodePattern, SetItem};
use labelscope_syntax::fold::{Fold, walk_clause, walk_node_pattern, walk_set_item};
use tracing::trace;

use crate::label::Label;

/// One rewrite pass. Holds the variables labeled so far.
pub struct LabelRewriter<'a> {
    label: &'a Label,
    seen: IndexSet<String>,
}

impl<'a> LabelRewriter<'a> {
    pub fn new(label: &'a Label) -> Self {
        Self {
            label,
            seen: IndexSet::new(),
        }
    }

    /// Variables labeled so far in the current `UNION` branch, in the order
    /// they were first met.
    pub fn seen(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}

impl Fold for LabelRewriter<'_> {
    fn fold_clause(&mut self, clause: Clause) -> Clause {
        if matches!(clause, Clause::Union(_)) {
            trace!("new UNION branch");
            self.seen.clear();
        }
        walk_clause(self, clause)
    }

    fn fold_node_pattern(&mut self, node: NodePattern) -> NodePattern {
        let mut node = walk_node_pattern(self, node);

        if let Some(variable) = &node.variable {
            if self.seen.contains(variable) {
                trace!(variable = %variable, "node variable already labeled");
                return node;
            }
            self.seen.insert(variable.clone());
        }

        trace!(variable = ?node.variable, label = %self.label, "labeling node pattern");
        node.labels.push(self.label.as_str().to_string());
        node
    }

    fn fold_set_item(&mut self, item: SetItem) -> SetItem {
        match walk_set_item(self, item) {
            SetItem::SetLabels {
                variable,
                mut labels,
            } => {
                trace!(variable = %variable, label = %self.label, "labeling SET item");
                labels.push(self.label.as_str().to_string());
                SetItem::SetLabels { variable, labels }
            }
            other => other,
        }
    }
}

/// Rewrites `statement` with a fresh [`LabelRewriter`].
pub fn rewrite(statement: Statement, label: &Label) -> Statement {
    LabelRewriter::new(label).fold_statement(statement)
}
