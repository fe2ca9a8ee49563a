use indoc::indoc;
use serde_json::json;

use crate::Error;
use crate::config::{CONFIGURATION_KEY, ConfigMap, ConfigValue};

#[test]
fn json_strings_become_text() {
    assert!(matches!(ConfigValue::from(json!("Tenant")), ConfigValue::Text(t) if t == "Tenant"));
    assert!(matches!(ConfigValue::from(json!(42)), ConfigValue::Other(_)));
}

#[test]
fn type_names() {
    let cases = [
        (ConfigValue::from("x"), "string"),
        (ConfigValue::from(json!(null)), "null"),
        (ConfigValue::from(json!(true)), "boolean"),
        (ConfigValue::from(json!(1.5)), "number"),
        (ConfigValue::from(json!([1])), "array"),
        (ConfigValue::from(json!({"a": 1})), "object"),
    ];
    for (value, expected) in cases {
        assert_eq!(value.type_name(), expected, "{value:?}");
    }

    let mut config = ConfigMap::new();
    config.insert_provider("p", || "A".to_string());
    assert_eq!(config.get("p").unwrap().type_name(), "provider");
}

#[test]
fn from_json_keeps_insertion_order() {
    let source = indoc! {r#"
        {
          "cypher.modification.label": "Tenant",
          "other.setting": 3,
          "a.flag": false
        }
    "#};

    let config = ConfigMap::from_json(source).unwrap();

    let keys: Vec<_> = config.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, [CONFIGURATION_KEY, "other.setting", "a.flag"]);
    assert!(matches!(config.get(CONFIGURATION_KEY), Some(ConfigValue::Text(t)) if t == "Tenant"));
    assert_eq!(config.len(), 3);
}

#[test]
fn from_json_rejects_non_objects() {
    let err = ConfigMap::from_json(r#"["Tenant"]"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration: expected a JSON object, found array"
    );

    let err = ConfigMap::from_json("{ not json").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn insert_replaces_previous_value() {
    let mut config = ConfigMap::new();
    assert!(config.is_empty());
    assert!(config.insert(CONFIGURATION_KEY, "A").is_none());

    let previous = config.insert(CONFIGURATION_KEY, "B");

    assert!(matches!(previous, Some(ConfigValue::Text(t)) if t == "A"));
    assert!(matches!(config.get(CONFIGURATION_KEY), Some(ConfigValue::Text(t)) if t == "B"));
    assert_eq!(config.len(), 1);
}

#[test]
fn debug_hides_provider() {
    let mut config = ConfigMap::new();
    config.insert_provider(CONFIGURATION_KEY, || "A".to_string());

    assert_eq!(
        format!("{:?}", config.get(CONFIGURATION_KEY).unwrap()),
        "Provider(..)"
    );
}
