//! Catalog tests for the masking extension

use serde_json::json;

use mask_core::{FunctionCatalog, FunctionError, LogicalType, MaskExtension, Value};

fn parse_rows(json: &str) -> Vec<Vec<Value>> {
    serde_json::from_str(json).expect("rows should deserialize")
}

#[test]
fn test_signatures_match_registration() {
    let catalog = MaskExtension::catalog();

    let mask_string = catalog.get("mask_string").unwrap();
    assert_eq!(
        mask_string.arguments(),
        &[
            LogicalType::Varchar,
            LogicalType::Integer,
            LogicalType::Integer,
            LogicalType::Varchar,
        ]
    );
    assert_eq!(mask_string.return_type(), LogicalType::Varchar);

    for name in ["mask_email", "scramble_string"] {
        let function = catalog.get(name).unwrap();
        assert_eq!(function.arguments(), &[LogicalType::Varchar]);
        assert_eq!(function.return_type(), LogicalType::Varchar);
    }
}

#[test]
fn test_mask_string_batch_from_json() {
    let catalog = MaskExtension::catalog();
    let rows: Vec<Vec<Value>> = serde_json::from_value(json!([
        ["hello world", 3, 5, "*"],
        ["hello world", 1, 5, "#"],
        ["hello world", 0, 0, "*"],
        [null, 1, 2, "*"],
        ["hello world", 20, 5, "xyz"]
    ]))
    .expect("rows should deserialize");

    let results = catalog.execute("mask_string", &rows).unwrap();
    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!(["he*****orld", "##### world", "hello world", null, "hello world"])
    );
}

#[test]
fn test_mask_email_batch() {
    let catalog = MaskExtension::catalog();
    let rows = parse_rows(r#"[["johndoe@example.com"], ["a@b.com"], ["@example.com"], ["plain"]]"#);

    let results = catalog.execute("mask_email", &rows).unwrap();
    assert_eq!(
        results,
        vec![
            Value::from("j******@example.com"),
            Value::from("a@b.com"),
            Value::from("@example.com"),
            Value::from("plain"),
        ]
    );
}

#[test]
fn test_scramble_string_batch() {
    let catalog = MaskExtension::catalog();
    let rows = parse_rows(r#"[["password"], [""], [null]]"#);

    let results = catalog.execute("scramble_string", &rows).unwrap();
    assert_eq!(results.len(), 3);

    let mut scrambled: Vec<char> = results[0].as_str().unwrap().chars().collect();
    scrambled.sort_unstable();
    let mut original: Vec<char> = "password".chars().collect();
    original.sort_unstable();
    assert_eq!(scrambled, original);

    assert_eq!(results[1], Value::from(""));
    assert!(results[2].is_null());
}

#[test]
fn test_batch_stops_at_first_bad_row() {
    let catalog = MaskExtension::catalog();
    let rows = parse_rows(r#"[["hello", 1, 2, "*"], ["hello", 1, 2, ""]]"#);

    let err = catalog.execute("mask_string", &rows).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidMaskChar(_)));
    assert_eq!(
        err.to_string(),
        "Invalid mask character: mask character must not be empty"
    );
}

#[test]
fn test_extension_loads_into_existing_catalog() {
    let mut catalog = FunctionCatalog::new();
    assert!(catalog.invoke("mask_email", &[Value::from("a@b.com")]).is_err());

    MaskExtension.load(&mut catalog);
    assert!(catalog.contains("mask_email"));
    assert_eq!(
        catalog.invoke("mask_email", &[Value::from("ab@c.io")]).unwrap(),
        Value::from("a*@c.io")
    );
}
