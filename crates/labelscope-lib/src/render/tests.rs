use indoc::indoc;
use labelscope_syntax::parse;

use super::render;

fn canonical(input: &str) -> String {
    match parse(input) {
        Ok(statement) => render(&statement),
        Err(err) => panic!("{}: {:?}", err, err.diagnostics()),
    }
}

#[test]
fn match_where_return() {
    let input = "match (n:Person {name:'Ann'}) where n.age>30 return n.name as name order by name desc skip 1 limit 2";

    insta::assert_snapshot!(canonical(input), @r#"MATCH (n:Person {name: "Ann"}) WHERE n.age > 30 RETURN n.name AS name ORDER BY name DESCENDING SKIP 1 LIMIT 2"#);
}

#[test]
fn rendering_is_stable() {
    let input = indoc! {"
        OPTIONAL MATCH (a)-[r:KNOWS|LIKES*1..3]->(b)
        WITH DISTINCT a, count(*) AS c
        ORDER BY c DESC
        SKIP 1
        LIMIT 10
        WHERE c > 1
        RETURN *
    "};

    let once = canonical(input);
    assert_eq!(canonical(&once), once);
    insta::assert_snapshot!(once, @"OPTIONAL MATCH (a)-[r:KNOWS|LIKES*1..3]->(b) WITH DISTINCT a, count(*) AS c ORDER BY c DESCENDING SKIP 1 LIMIT 10 WHERE c > 1 RETURN *");
}

#[test]
fn relationship_shapes() {
    let input = "MATCH (a)<--(b)--(c)<-->(d)-->(e), (a)-[*]->(b), (a)-[*2]-(c), (a)-[*..3]-(d), (a)-[r*2..]-(e), (a)-[r:A|:B {since: 2020}]->(b), (a)-[{w: 1}]-(b)";

    insta::assert_snapshot!(canonical(input), @"MATCH (a)<--(b)--(c)<-->(d)-->(e), (a)-[*]->(b), (a)-[*2]-(c), (a)-[*..3]-(d), (a)-[r*2..]-(e), (a)-[r:A|B {since: 2020}]->(b), (a)-[{w: 1}]-(b)");
}

#[test]
fn node_shapes() {
    assert_eq!(canonical("MATCH ({name:'x'})"), r#"MATCH ({name: "x"})"#);
    assert_eq!(canonical("MATCH (:A{name:'x'})"), r#"MATCH (:A {name: "x"})"#);
    assert_eq!(canonical("MATCH (n $props)"), "MATCH (n $props)");
    assert_eq!(canonical("MATCH ()"), "MATCH ()");
    assert_eq!(
        canonical("MATCH (a) CREATE (b COPY OF a:Clone)"),
        "MATCH (a) CREATE (b COPY OF a:Clone)"
    );
}

#[test]
fn path_variables_and_shortest_paths() {
    assert_eq!(
        canonical("MATCH p = shortestPath((a)-[*]-(b)), q = allShortestPaths((a)-->(b)) RETURN p"),
        "MATCH p = shortestPath((a)-[*]-(b)), q = allShortestPaths((a)-->(b)) RETURN p"
    );
}

#[test]
fn quotes_names_only_when_needed() {
    let input = "MATCH (`my node`:`Weird Label`:`Plain`)-[:`REL`]->(`a``b`) RETURN `my node`.`a prop`, `x`";

    insta::assert_snapshot!(canonical(input), @"MATCH (`my node`:`Weird Label`:Plain)-[:REL]->(`a``b`) RETURN `my node`.`a prop`, x");
}

#[test]
fn string_literals_are_double_quoted() {
    let input = r#"RETURN 'it\'s', "say \"hi\"", 'tab\there', 'back\\slash', 'line\nbreak'"#;

    assert_eq!(
        canonical(input),
        r#"RETURN "it's", "say \"hi\"", "tab\there", "back\\slash", "line\nbreak""#
    );
}

#[test]
fn legacy_parameters_use_dollar_syntax() {
    assert_eq!(
        canonical("UNWIND {rows} AS row RETURN {0}, $1, $name"),
        "UNWIND $rows AS row RETURN $0, $1, $name"
    );
}

#[test]
fn minimal_parentheses() {
    let input = "RETURN (1 + 2) * 3, 1 + (2 * 3), 1 - (2 - 3), (1 - 2) - 3, NOT (a OR b) AND c, (a AND b) OR c, -(1 + 2), (n).x";

    insta::assert_snapshot!(canonical(input), @"RETURN (1 + 2) * 3, 1 + 2 * 3, 1 - (2 - 3), 1 - 2 - 3, not (a OR b) AND c, a AND b OR c, -(1 + 2), n.x");
}

#[test]
fn comparison_operands_keep_parentheses() {
    let input = "MATCH (n) WHERE (n.a = 1) = true AND (n.a < n.b) = false AND true = (n.c > 2) RETURN n";

    insta::assert_snapshot!(canonical(input), @"MATCH (n) WHERE (n.a = 1) = true AND (n.a < n.b) = false AND true = (n.c > 2) RETURN n");
}

#[test]
fn chained_comparisons_render_pairwise() {
    insta::assert_snapshot!(canonical("RETURN 1 < n.x <= 10"), @"RETURN 1 < n.x AND n.x <= 10");
}

#[test]
fn float_without_integer_part() {
    insta::assert_snapshot!(canonical("RETURN .5, -.5e3"), @"RETURN .5, -.5e3");
}

#[test]
fn operators_and_predicates() {
    let input = "RETURN a != b, a =~ 'x.*', a STARTS WITH 'x', a ends with 'y', a CONTAINS 'z', a IN [1, 2], a IS NULL, a IS NOT NULL, a XOR b, 2 ^ 3 % 4";

    insta::assert_snapshot!(canonical(input), @r#"RETURN a <> b, a =~ "x.*", a STARTS WITH "x", a ENDS WITH "y", a CONTAINS "z", a IN [1, 2], a IS NULL, a IS NOT NULL, a XOR b, 2 ^ 3 % 4"#);
}

#[test]
fn postfix_expressions() {
    let input = "MATCH (n) WHERE n:A:B RETURN n.list[0], n.list[1..2], n.list[..2], n.list[1..], {a: 1}.a, {}";

    insta::assert_snapshot!(canonical(input), @"MATCH (n) WHERE n:A:B RETURN n.list[0], n.list[1..2], n.list[..2], n.list[1..], {a: 1}.a, {}");
}

#[test]
fn functions_case_and_comprehensions() {
    let input = indoc! {"
        RETURN count(DISTINCT n), COUNT(*), apoc.text.join(xs, ','),
               CASE n.x WHEN 1 THEN 'one' ELSE 'many' END,
               CASE WHEN n.x > 1 THEN true END,
               [x IN range(1, 3) WHERE x > 1 | x * 2],
               [p = (a)-[:R]->(b) WHERE b.ok | b.name],
               all(x IN xs WHERE x > 0), none(x IN xs WHERE x IS NULL)
    "};

    insta::assert_snapshot!(canonical(input), @r#"RETURN count(DISTINCT n), count(*), apoc.text.join(xs, ","), CASE n.x WHEN 1 THEN "one" ELSE "many" END, CASE WHEN n.x > 1 THEN true END, [x IN range(1, 3) WHERE x > 1 | x * 2], [p = (a)-[:R]->(b) WHERE b.ok | b.name], all(x IN xs WHERE x > 0), none(x IN xs WHERE x IS NULL)"#);
}

#[test]
fn pattern_predicates() {
    let input = "MATCH (n) WHERE NOT((n)<-[:P]-({s:'C'})) AND (n)-->() RETURN n";

    insta::assert_snapshot!(canonical(input), @r#"MATCH (n) WHERE not (n)<-[:P]-({s: "C"}) AND (n)-->() RETURN n"#);
}

#[test]
fn update_clauses() {
    let input = indoc! {"
        MERGE (n:User {id: $id})
          ON CREATE SET n.created = timestamp()
          ON MATCH SET n += $props, n:Active
        SET n = {a: 1}, n.b = 2
        REMOVE n:Temp, n.flag
        DETACH DELETE n
    "};

    insta::assert_snapshot!(canonical(input), @"MERGE (n:User {id: $id}) ON CREATE SET n.created = timestamp() ON MATCH SET n += $props, n:Active SET n = {a: 1}, n.b = 2 REMOVE n:Temp, n.flag DETACH DELETE n");
}

#[test]
fn call_always_has_parentheses() {
    assert_eq!(canonical("CALL db.labels"), "CALL db.labels()");
    assert_eq!(
        canonical("CALL nsp.customProcedure(c, 1) YIELD nodes, rels AS r WHERE r > 0 RETURN nodes"),
        "CALL nsp.customProcedure(c, 1) YIELD nodes, rels AS r WHERE r > 0 RETURN nodes"
    );
}

#[test]
fn foreach_and_union() {
    let input = indoc! {"
        MATCH p = (a)-->(b)
        FOREACH (n IN nodes(p) | SET n.marked = true)
        RETURN a
        UNION ALL
        RETURN 1 AS a
        UNION
        RETURN 2 AS a
    "};

    insta::assert_snapshot!(canonical(input), @"MATCH p = (a)-->(b) FOREACH (n IN nodes(p) | SET n.marked = true) RETURN a UNION ALL RETURN 1 AS a UNION RETURN 2 AS a");
}

#[test]
fn return_star_with_items() {
    assert_eq!(canonical("MATCH (n) RETURN *, n.x AS x"), "MATCH (n) RETURN *, n.x AS x");
}
