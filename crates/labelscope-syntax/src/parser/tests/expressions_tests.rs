use super::dump;

#[test]
fn arithmetic_precedence() {
    insta::assert_snapshot!(dump("RETURN 1 + 2 * 3 ^ 2 AS x"), @r"
    Statement
      Return
        Item AS x
          Binary +
            Integer 1
            Binary *
              Integer 2
              Binary ^
                Integer 3
                Integer 2
    ");
}

#[test]
fn boolean_precedence() {
    insta::assert_snapshot!(dump("RETURN a OR b XOR c AND NOT d"), @r"
    Statement
      Return
        Item
          Binary OR
            Variable a
            Binary XOR
              Variable b
              Binary AND
                Variable c
                Unary NOT
                  Variable d
    ");
}

#[test]
fn string_list_and_null_predicates() {
    let input = "RETURN n.name STARTS WITH 'A' AND n.x IS NOT NULL AND n.y IN [1, 2]";

    insta::assert_snapshot!(dump(input), @r#"
    Statement
      Return
        Item
          Binary AND
            Binary AND
              Binary STARTS WITH
                Property name
                  Variable n
                String "A"
              IsNotNull
                Property x
                  Variable n
            Binary IN
              Property y
                Variable n
              List
                Integer 1
                Integer 2
    "#);
}

#[test]
fn bang_equals_reads_as_not_equals() {
    assert_eq!(dump("RETURN a != b"), dump("RETURN a <> b"));
}

#[test]
fn labels_index_and_slices() {
    insta::assert_snapshot!(dump("RETURN n:Admin:Root, xs[0], xs[1..], xs[..2]"), @r"
    Statement
      Return
        Item
          HasLabels :Admin :Root
            Variable n
        Item
          Index
            Variable xs
            Integer 0
        Item
          Slice
            Variable xs
            From
              Integer 1
        Item
          Slice
            Variable xs
            To
              Integer 2
    ");
}

#[test]
fn case_with_subject() {
    insta::assert_snapshot!(dump("RETURN CASE n.kind WHEN 'a' THEN 1 ELSE 0 END"), @r#"
    Statement
      Return
        Item
          Case
            Property kind
              Variable n
            When
              String "a"
            Then
              Integer 1
            Else
              Integer 0
    "#);
}

#[test]
fn quantifiers_and_function_calls() {
    let input = "RETURN all(x IN xs WHERE x > 0), count(DISTINCT n), apoc.text.join(xs, ',')";

    insta::assert_snapshot!(dump(input), @r#"
    Statement
      Return
        Item
          Quantified all x
            Variable xs
            Where
              Binary >
                Variable x
                Integer 0
        Item
          Call count distinct
            Variable n
        Item
          Call apoc.text.join
            Variable xs
            String ","
    "#);
}

#[test]
fn pattern_predicate_and_parenthesized_expression() {
    let input = "MATCH (n) WHERE (n)-[:R]->() AND (n.x + 1) * 2 > 3 RETURN n";

    insta::assert_snapshot!(dump(input), @r"
    Statement
      Match
        Part
          Node n
        Where
          Binary AND
            PatternPredicate
              Node n
              Rel -> :R
              Node
            Binary >
              Binary *
                Binary +
                  Property x
                    Variable n
                  Integer 1
                Integer 2
              Integer 3
      Return
        Item
          Variable n
    ");
}

#[test]
fn literals_and_parameters() {
    let input = r#"RETURN 'it\'s', "say \"hi\"", $0, $name, -1, 1.5e3"#;

    insta::assert_snapshot!(dump(input), @r#"
    Statement
      Return
        Item
          String "it's"
        Item
          String "say \"hi\""
        Item
          Parameter 0
        Item
          Parameter name
        Item
          Unary -
            Integer 1
        Item
          Float 1.5e3
    "#);
}

#[test]
fn comprehensions() {
    let input = "RETURN [x IN range(1, 3) | x * 2], [(a)-[:R]->(b) WHERE b.ok | b.name], [1, 'two']";

    insta::assert_snapshot!(dump(input), @r#"
    Statement
      Return
        Item
          ListComprehension x
            Call range
              Integer 1
              Integer 3
            Project
              Binary *
                Variable x
                Integer 2
        Item
          PatternComprehension
            Node a
            Rel -> :R
            Node b
            Where
              Property ok
                Variable b
            Project
              Property name
                Variable b
        Item
          List
            Integer 1
            String "two"
    "#);
}

#[test]
fn count_star() {
    insta::assert_snapshot!(dump("MATCH (n) RETURN COUNT(*)"), @r"
    Statement
      Match
        Part
          Node n
      Return
        Item
          CountStar
    ");
}

#[test]
fn chained_comparisons_are_pairwise() {
    insta::assert_snapshot!(dump("RETURN a < b <= c"), @r"
    Statement
      Return
        Item
          Binary AND
            Binary <
              Variable a
              Variable b
            Binary <=
              Variable b
              Variable c
    ");
}

#[test]
fn parenthesized_comparison_as_operand() {
    insta::assert_snapshot!(dump("RETURN (a = 1) = true"), @r"
    Statement
      Return
        Item
          Binary =
            Binary =
              Variable a
              Integer 1
            Bool true
    ");
}

#[test]
fn float_without_integer_part() {
    insta::assert_snapshot!(dump("RETURN .5 * x"), @r"
    Statement
      Return
        Item
          Binary *
            Float .5
            Variable x
    ");
}
