use labelscope_lib::{CONFIGURATION_KEY, ConfigMap, Error, LabelModification, modification_from_config};

fn with_new_label(query: &str) -> String {
    LabelModification::for_label("NewLabel")
        .apply(query)
        .unwrap_or_else(|err| panic!("{query}: {err}"))
}

#[test]
fn labels_simple_match() {
    assert_eq!(with_new_label("MATCH (n) RETURN n"), "MATCH (n:NewLabel) RETURN n");
    assert_eq!(
        with_new_label("MATCH (n:Existing) RETURN n"),
        "MATCH (n:Existing:NewLabel) RETURN n"
    );
}

#[test]
fn labels_match_with_properties() {
    assert_eq!(
        with_new_label("MATCH (n{name:'Someone'}) RETURN n"),
        r#"MATCH (n:NewLabel {name: "Someone"}) RETURN n"#
    );
}

#[test]
fn procedure_calls() {
    assert_eq!(
        with_new_label("MATCH (n{name:'Someone'}) CALL nsp.customProcedure()"),
        r#"MATCH (n:NewLabel {name: "Someone"}) CALL nsp.customProcedure()"#
    );
    assert_eq!(
        with_new_label("MATCH (n{name:'Someone'}) CALL nsp.customProcedure(n)"),
        r#"MATCH (n:NewLabel {name: "Someone"}) CALL nsp.customProcedure(n)"#
    );
}

#[test]
fn pattern_predicate_with_procedure_call() {
    let query = "MATCH (c:IdEntity:ConfigEntity {objectState:'COMMITTED'}) \
                 WHERE (c)-[:PREDECESSOR]->({objectState:'DEPLOYING'}) \
                 CALL nsp.customProcedure(c, 1) YIELD nodes, rels RETURN c, nodes, rels";

    assert_eq!(
        with_new_label(query),
        "MATCH (c:IdEntity:ConfigEntity:NewLabel {objectState: \"COMMITTED\"}) \
         WHERE (c)-[:PREDECESSOR]->(:NewLabel {objectState: \"DEPLOYING\"}) \
         CALL nsp.customProcedure(c, 1) YIELD nodes, rels RETURN c, nodes, rels"
    );
}

#[test]
fn negated_pattern_predicate_with_set() {
    let query = "MATCH (n:IdEntity:ConfigEntity {objectState:'DEPLOYING'}) \
                 WHERE NOT((n)<-[:PREDECESSOR]-({objectState:'COMMITTED'})) \
                 SET n.objectState='COMMITTED' RETURN COUNT(n)";

    assert_eq!(
        with_new_label(query),
        "MATCH (n:IdEntity:ConfigEntity:NewLabel {objectState: \"DEPLOYING\"}) \
         WHERE not (n)<-[:PREDECESSOR]-(:NewLabel {objectState: \"COMMITTED\"}) \
         SET n.objectState = \"COMMITTED\" RETURN COUNT(n)"
    );
}

#[test]
fn set_with_several_properties() {
    let query = "MATCH (n:IdEntity:ConfigEntity {objectState:'DEPLOYING'}) \
                 SET n.objectState='COMMITTED', n.objectState2='COMMITTED' RETURN COUNT(n)";

    assert_eq!(
        with_new_label(query),
        "MATCH (n:IdEntity:ConfigEntity:NewLabel {objectState: \"DEPLOYING\"}) \
         SET n.objectState = \"COMMITTED\", n.objectState2 = \"COMMITTED\" RETURN COUNT(n)"
    );
}

#[test]
fn batch_node_update_with_legacy_parameter() {
    let query = "UNWIND {rows} as row MATCH (n) WHERE ID(n)=row.nodeId \
                 SET n:`DataDNSSettings`:`ConfigEntity`:`IdEntity`:`Entity` \
                 SET n += row.props RETURN row.nodeId as ref, ID(n) as id, row.type as type";

    assert_eq!(
        with_new_label(query),
        "UNWIND $rows AS row MATCH (n:NewLabel) WHERE ID(n) = row.nodeId \
         SET n:DataDNSSettings:ConfigEntity:IdEntity:Entity:NewLabel \
         SET n += row.props RETURN row.nodeId AS ref, ID(n) AS id, row.type AS type"
    );
}

#[test]
fn merge_existing_label() {
    assert_eq!(with_new_label("MERGE (a:Foobar)"), "MERGE (a:Foobar:NewLabel)");
}

#[test]
fn batch_relationship_merge() {
    let query = "UNWIND {rows} as row MATCH (startNode) WHERE ID(startNode) = row.startNodeId \
                 MATCH (endNode) WHERE ID(endNode) = row.endNodeId \
                 MERGE (startNode)-[rel:`UNDECRYPTABLE_ACTIONS`]->(endNode) \
                 RETURN row.relRef as ref, ID(rel) as id, row.type as type";

    assert_eq!(
        with_new_label(query),
        "UNWIND $rows AS row MATCH (startNode:NewLabel) WHERE ID(startNode) = row.startNodeId \
         MATCH (endNode:NewLabel) WHERE ID(endNode) = row.endNodeId \
         MERGE (startNode)-[rel:UNDECRYPTABLE_ACTIONS]->(endNode) \
         RETURN row.relRef AS ref, ID(rel) AS id, row.type AS type"
    );
}

#[test]
fn short_spec_scenario() {
    assert_eq!(
        with_new_label("MATCH (c:A {k:'v'}) WHERE (c)-[:R]->({k2:'v2'}) CALL p.proc(c) YIELD x RETURN c"),
        r#"MATCH (c:A:NewLabel {k: "v"}) WHERE (c)-[:R]->(:NewLabel {k2: "v2"}) CALL p.proc(c) YIELD x RETURN c"#
    );
}

#[test]
fn illegal_labels_are_rejected() {
    for label in ["1bad", "", "two words", "dash-ed"] {
        let err = LabelModification::for_label(label)
            .apply("MATCH (n) RETURN n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { .. }), "{label:?}: {err:?}");
    }
}

#[test]
fn registered_through_configuration() {
    let config = ConfigMap::from_json(r#"{"cypher.modification.label": "Tenant7"}"#).unwrap();
    assert!(config.get(CONFIGURATION_KEY).is_some());

    let modification = modification_from_config(&config).unwrap();

    assert_eq!(
        modification.apply("MATCH (a)-[:R]->(b) RETURN a").unwrap(),
        "MATCH (a:Tenant7)-[:R]->(b:Tenant7) RETURN a"
    );
}

#[test]
fn output_parses_back_unchanged() {
    let modification = LabelModification::for_label("NewLabel");
    let once = modification
        .apply("MATCH (a)-[r:R*1..2 {w: 1}]->(b) WHERE a.x IN [1, 2] RETURN a ORDER BY a.x DESC LIMIT 3")
        .unwrap();

    let statement = labelscope_syntax::parse(&once).unwrap();

    assert_eq!(labelscope_lib::render(&statement), once);
}
