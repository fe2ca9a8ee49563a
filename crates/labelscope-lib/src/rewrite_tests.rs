use labelscope_syntax::fold::Fold;
use labelscope_syntax::parse;

use crate::label::Label;
use crate::render::render;
use crate::rewrite::{LabelRewriter, rewrite};

fn labeled(input: &str) -> String {
    let label = Label::new("L").unwrap();
    let statement = parse(input).unwrap_or_else(|err| panic!("{}: {:?}", err, err.diagnostics()));
    render(&rewrite(statement, &label))
}

#[test]
fn labels_every_node_pattern() {
    assert_eq!(
        labeled("MATCH (a)-[:R]->(b)<--(:X) RETURN a"),
        "MATCH (a:L)-[:R]->(b:L)<--(:X:L) RETURN a"
    );
}

#[test]
fn appends_after_existing_labels() {
    assert_eq!(labeled("MATCH (n:A:B) RETURN n"), "MATCH (n:A:B:L) RETURN n");
    assert_eq!(labeled("MATCH (n:L) RETURN n"), "MATCH (n:L:L) RETURN n");
}

#[test]
fn repeated_variable_is_labeled_once() {
    assert_eq!(
        labeled("MATCH (a), (a)-->(b) WHERE (b)-->(a) RETURN a"),
        "MATCH (a:L), (a)-->(b:L) WHERE (b)-->(a) RETURN a"
    );
    assert_eq!(
        labeled("MATCH (n) WITH n MATCH (n)-->(m) RETURN m"),
        "MATCH (n:L) WITH n MATCH (n)-->(m:L) RETURN m"
    );
}

#[test]
fn anonymous_nodes_are_always_labeled() {
    assert_eq!(
        labeled("MATCH ()-->() WHERE ()-->() RETURN 1"),
        "MATCH (:L)-->(:L) WHERE (:L)-->(:L) RETURN 1"
    );
}

#[test]
fn set_label_items_always_get_the_label() {
    assert_eq!(
        labeled("MATCH (n) SET n:A SET n:B, n.x = 1 SET n:A"),
        "MATCH (n:L) SET n:A:L SET n:B:L, n.x = 1 SET n:A:L"
    );
}

#[test]
fn merge_actions_and_foreach_bodies() {
    assert_eq!(
        labeled("MERGE (n:User) ON CREATE SET n:New ON MATCH SET n:Seen"),
        "MERGE (n:User:L) ON CREATE SET n:New:L ON MATCH SET n:Seen:L"
    );
    assert_eq!(
        labeled("MATCH p = (a)-->(b) FOREACH (x IN nodes(p) | SET x:Marked CREATE (x)-->(:Copy))"),
        "MATCH p = (a:L)-->(b:L) FOREACH (x IN nodes(p) | SET x:Marked:L CREATE (x:L)-->(:Copy:L))"
    );
}

#[test]
fn label_removal_and_predicates_pass_through() {
    assert_eq!(
        labeled("MATCH (n) WHERE n:A REMOVE n:A RETURN n:B"),
        "MATCH (n:L) WHERE n:A REMOVE n:A RETURN n:B"
    );
}

#[test]
fn patterns_nested_in_expressions() {
    assert_eq!(
        labeled("MATCH (a) RETURN [(a)-->(b) | b.x], size((a)-->()), CASE WHEN (a)<--(c) THEN 1 END"),
        "MATCH (a:L) RETURN [(a)-->(b:L) | b.x], size((a)-->(:L)), CASE WHEN (a)<--(c:L) THEN 1 END"
    );
}

#[test]
fn copy_of_and_shortest_path() {
    assert_eq!(
        labeled("MATCH (a) CREATE (b COPY OF a)"),
        "MATCH (a:L) CREATE (b COPY OF a:L)"
    );
    assert_eq!(
        labeled("MATCH p = shortestPath((a)-[*]-(b)) RETURN p"),
        "MATCH p = shortestPath((a:L)-[*]-(b:L)) RETURN p"
    );
}

#[test]
fn queries_without_node_patterns_are_unchanged() {
    assert_eq!(
        labeled("UNWIND [1, 2] AS x RETURN x * 2 AS y"),
        "UNWIND [1, 2] AS x RETURN x * 2 AS y"
    );
    assert_eq!(labeled("CALL db.labels"), "CALL db.labels()");
}

#[test]
fn rewriter_records_variables_in_source_order() {
    let label = Label::new("L").unwrap();
    let statement = parse("MATCH (b)-->(a), (b)-->(c) CREATE (a)-->(d)").unwrap();

    let mut rewriter = LabelRewriter::new(&label);
    rewriter.fold_statement(statement);

    assert_eq!(rewriter.seen().collect::<Vec<_>>(), ["b", "a", "c", "d"]);
}

#[test]
fn each_union_branch_labels_its_own_variables() {
    assert_eq!(
        labeled("MATCH (n)-->(m) RETURN n UNION MATCH (n)<--(m) RETURN n UNION ALL MATCH (n) RETURN n"),
        "MATCH (n:L)-->(m:L) RETURN n UNION MATCH (n:L)<--(m:L) RETURN n UNION ALL MATCH (n:L) RETURN n"
    );
}

#[test]
fn seen_set_starts_over_after_union() {
    let label = Label::new("L").unwrap();
    let statement = parse("MATCH (a)-->(b) RETURN a UNION MATCH (c)-->(a) RETURN a").unwrap();

    let mut rewriter = LabelRewriter::new(&label);
    rewriter.fold_statement(statement);

    assert_eq!(rewriter.seen().collect::<Vec<_>>(), ["c", "a"]);
}
