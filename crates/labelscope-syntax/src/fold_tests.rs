use indoc::indoc;

use crate::ast::{Expr, NodePattern, SetItem};
use crate::fold::{Fold, walk_expr, walk_node_pattern, walk_set_item};
use crate::parse;

/// Records node variables in visit order and tags every node with `:Seen`.
#[derive(Default)]
struct NodeRecorder {
    visited: Vec<String>,
}

impl Fold for NodeRecorder {
    fn fold_node_pattern(&mut self, node: NodePattern) -> NodePattern {
        let mut node = walk_node_pattern(self, node);
        self.visited
            .push(node.variable.clone().unwrap_or_else(|| "_".to_string()));
        node.labels.push("Seen".to_string());
        node
    }
}

#[test]
fn visits_nodes_in_source_order() {
    let statement = parse(indoc! {"
        MATCH (a)-[:R]->(b), (c)
        WHERE (a)-->(:X {k: [(d)-->(e) | e.name]})
        RETURN a
    "})
    .unwrap();

    let mut folder = NodeRecorder::default();
    folder.fold_statement(statement);

    assert_eq!(folder.visited, ["a", "b", "c", "a", "d", "e", "_"]);
}

#[test]
fn identity_fold_preserves_tree() {
    struct Identity;
    impl Fold for Identity {}

    let statement = parse(indoc! {"
        MATCH (n:Person {name: $name})
        WITH n, [x IN n.tags WHERE x STARTS WITH 'a' | toUpper(x)] AS tags
        ORDER BY n.age DESC
        SET n:Tagged, n.count = n.count + 1
        RETURN CASE WHEN n.age > 18 THEN 'adult' ELSE 'minor' END AS kind
    "})
    .unwrap();

    let folded = Identity.fold_statement(statement.clone());
    assert_eq!(folded, statement);
}

#[test]
fn nodes_inside_foreach_and_merge_actions_are_reached() {
    let statement = parse(indoc! {"
        MERGE (a {id: 1})
          ON CREATE SET a.created = exists((a)-->(b))
        FOREACH (x IN [1, 2] | CREATE (c {v: x}))
    "})
    .unwrap();

    let mut folder = NodeRecorder::default();
    let folded = folder.fold_statement(statement);

    assert_eq!(folder.visited, ["a", "a", "b", "c"]);
    let dump = folded.printer().dump();
    assert_eq!(dump.matches(":Seen").count(), 4);
}

#[test]
fn set_label_hook_sees_every_set_item() {
    struct LabelCounter(usize);
    impl Fold for LabelCounter {
        fn fold_set_item(&mut self, item: SetItem) -> SetItem {
            if let SetItem::SetLabels { .. } = item {
                self.0 += 1;
            }
            walk_set_item(self, item)
        }
    }

    let statement = parse(indoc! {"
        MERGE (n:A)
          ON CREATE SET n:B
          ON MATCH SET n:C, n.x = 1
        SET n:D
    "})
    .unwrap();

    let mut counter = LabelCounter(0);
    counter.fold_statement(statement);
    assert_eq!(counter.0, 3);
}

#[test]
fn expression_hook_rewrites_bottom_up() {
    struct RenameVariables;
    impl Fold for RenameVariables {
        fn fold_expr(&mut self, expr: Expr) -> Expr {
            match walk_expr(self, expr) {
                Expr::Variable(name) => Expr::Variable(format!("{}_1", name)),
                other => other,
            }
        }
    }

    let statement = parse("RETURN a + b.c AS total").unwrap();
    let folded = RenameVariables.fold_statement(statement);
    insta::assert_snapshot!(folded.printer().dump(), @r"
    Statement
      Return
        Item AS total
          Binary +
            Variable a_1
            Property c
              Variable b_1
    ");
}
