//! Mutation pipeline acceptance tests.
//!
//! Drives the full decision table through the `Database` facade: whether
//! precepts apply and whether a commit happens, per operation and existence.

use scribe_tests::prelude::*;

#[test]
fn test_insert_fresh_key_sets_auto_fields_and_reports_one() {
    // GIVEN
    let mut db = items_db();
    let mut document = doc! { "id" => 1i64, "name" => "first" };

    // WHEN
    let affected = db
        .insert("items", &mut document, &["updated_time=NOW()", "age=SERIAL()"])
        .unwrap();

    // THEN: both auto-fields set on the caller's document and the stored copy
    assert_eq!(affected, 1);
    assert!(document.get("updated_time").unwrap().as_int().unwrap() > 0);
    assert_eq!(document.get("age"), Some(&Value::Int(1)));
    assert_eq!(int_field(&db, "items", 1, "age"), Some(1));
}

#[test]
fn test_insert_existing_key_is_a_no_op_with_untouched_fields() {
    // GIVEN
    let mut db = items_db();
    let mut first = doc! { "id" => 1i64, "name" => "original" };
    db.insert("items", &mut first, &["updated_time=NOW()", "age=SERIAL()"])
        .unwrap();

    // WHEN
    let mut second = doc! { "id" => 1i64, "name" => "duplicate" };
    let affected = db
        .insert("items", &mut second, &["updated_time=NOW()", "age=SERIAL()"])
        .unwrap();

    // THEN: affected 0, the duplicate's auto-fields stay absent, the stored
    // document is the original
    assert_eq!(affected, 0);
    assert_eq!(second.get("updated_time"), None);
    assert_eq!(second.get("age"), None);
    let stored = db.get("items", &Value::Int(1)).unwrap().unwrap();
    assert_eq!(stored.get("name").and_then(|v| v.as_str()), Some("original"));
}

#[test]
fn test_update_missing_key_is_a_no_op() {
    // GIVEN
    let mut db = items_db();
    let mut document = doc! { "id" => 404i64 };

    // WHEN
    let affected = db
        .update("items", &mut document, &["updated_time=NOW()", "age=SERIAL()"])
        .unwrap();

    // THEN
    assert_eq!(affected, 0);
    assert_eq!(document.get("updated_time"), None);
    assert_eq!(document.get("age"), None);
    assert!(db.get("items", &Value::Int(404)).unwrap().is_none());
}

#[test]
fn test_update_existing_key_replaces_and_applies_precepts() {
    // GIVEN
    let mut db = items_db();
    let mut original = doc! { "id" => 2i64, "rev" => 1i64 };
    db.insert("items", &mut original, &[]).unwrap();

    // WHEN
    let mut replacement = doc! { "id" => 2i64, "rev" => 2i64 };
    let affected = db
        .update("items", &mut replacement, &["age=SERIAL()"])
        .unwrap();

    // THEN
    assert_eq!(affected, 1);
    assert_eq!(replacement.get("age"), Some(&Value::Int(1)));
    assert_eq!(int_field(&db, "items", 2, "rev"), Some(2));
}

#[test]
fn test_upsert_creates_then_replaces() {
    // GIVEN
    let mut db = items_db();

    // WHEN: first upsert creates
    let mut first = doc! { "id" => 3i64, "rev" => 1i64 };
    assert_eq!(db.upsert("items", &mut first, &[]).unwrap(), 1);

    // AND: second upsert replaces
    let mut second = doc! { "id" => 3i64, "rev" => 2i64 };
    assert_eq!(db.upsert("items", &mut second, &[]).unwrap(), 1);

    // THEN
    assert_eq!(int_field(&db, "items", 3, "rev"), Some(2));
}

#[test]
fn test_operations_against_an_unknown_namespace_fail() {
    let mut db = items_db();
    let mut document = doc! { "id" => 1i64 };
    let err = db.insert("ghost", &mut document, &[]).unwrap_err();
    assert!(matches!(err, DatabaseError::Mutation(_)));
}

#[test]
fn test_mutation_without_primary_key_fails_before_commit() {
    let mut db = items_db();
    let mut document = doc! { "name" => "keyless" };
    let err = db
        .insert("items", &mut document, &["age=SERIAL()"])
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Mutation(_)));
    // The failure happened at the existence check, before evaluation.
    assert_eq!(document.get("age"), None);
}
