//! SERIAL() precept acceptance tests.
//!
//! Counter sequences across creates, replaces, and skips, including both
//! gating policies for the skipped-Update case.

use scribe_tests::prelude::*;

#[test]
fn test_six_upserts_yield_one_through_six() {
    // GIVEN
    let mut db = items_db();

    // WHEN: six upserts on one key, first creates and the rest replace
    let mut seen = Vec::new();
    for rev in 0..6i64 {
        let mut document = doc! { "id" => 1i64, "rev" => rev };
        let affected = db.upsert("items", &mut document, &["age=SERIAL()"]).unwrap();
        assert_eq!(affected, 1);
        seen.push(document.get("age").unwrap().as_int().unwrap());
    }

    // THEN: strictly increasing regardless of the create/replace mix
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_serial_fields_advance_independently() {
    // GIVEN
    let mut db = items_db();

    // WHEN: two fields driven by SERIAL() across two documents
    let mut first = doc! { "id" => 1i64 };
    db.insert("items", &mut first, &["age=SERIAL()", "genre=SERIAL()"])
        .unwrap();
    let mut second = doc! { "id" => 2i64 };
    db.insert("items", &mut second, &["age=SERIAL()", "genre=SERIAL()"])
        .unwrap();

    // THEN: each field has its own sequence
    assert_eq!(first.get("age"), Some(&Value::Int(1)));
    assert_eq!(first.get("genre"), Some(&Value::Int(1)));
    assert_eq!(second.get("age"), Some(&Value::Int(2)));
    assert_eq!(second.get("genre"), Some(&Value::Int(2)));
}

#[test]
fn test_skipped_update_consumes_nothing_under_default_gating() {
    // GIVEN
    let mut db = items_db();

    // WHEN: an update against a missing key is skipped
    let mut missing = doc! { "id" => 404i64 };
    assert_eq!(db.update("items", &mut missing, &["age=SERIAL()"]).unwrap(), 0);

    // THEN: the next applied precept sees an unbroken sequence
    let mut document = doc! { "id" => 1i64 };
    db.insert("items", &mut document, &["age=SERIAL()"]).unwrap();
    assert_eq!(document.get("age"), Some(&Value::Int(1)));
}

#[test]
fn test_skipped_update_leaves_a_gap_under_always_gating() {
    // GIVEN: the legacy policy evaluating precepts unconditionally
    let mut db = Database::with_gating(PreceptGating::Always);
    db.open_namespace(NamespaceDef::new("items", "id")).unwrap();

    // WHEN: the skipped update still evaluates its SERIAL()
    let mut missing = doc! { "id" => 404i64 };
    assert_eq!(db.update("items", &mut missing, &["age=SERIAL()"]).unwrap(), 0);
    assert_eq!(missing.get("age"), None);

    // THEN: the consumed value is gone; the next insert gets 2
    let mut document = doc! { "id" => 1i64 };
    db.insert("items", &mut document, &["age=SERIAL()"]).unwrap();
    assert_eq!(document.get("age"), Some(&Value::Int(2)));
}

#[test]
fn test_repeated_same_field_precepts_each_consume_a_value() {
    // GIVEN
    let mut db = items_db();

    // WHEN: two SERIAL() precepts on one field in one mutation
    let mut document = doc! { "id" => 1i64 };
    db.insert("items", &mut document, &["age=SERIAL()", "age=SERIAL()"])
        .unwrap();

    // THEN: last one wins in the document, both consumed
    assert_eq!(document.get("age"), Some(&Value::Int(2)));
    let mut next = doc! { "id" => 2i64 };
    db.insert("items", &mut next, &["age=SERIAL()"]).unwrap();
    assert_eq!(next.get("age"), Some(&Value::Int(3)));
}

#[test]
fn test_parse_failure_consumes_no_counter_values() {
    // GIVEN
    let mut db = items_db();

    // WHEN: a precept list with a bad entry, under both orderings
    let mut document = doc! { "id" => 1i64 };
    for precepts in [
        ["age=SERIAL()", "t=NOW(FORTNIGHT)"],
        ["t=BOGUS()", "age=SERIAL()"],
    ] {
        let err = db.insert("items", &mut document, &precepts).unwrap_err();
        assert!(matches!(err, DatabaseError::Parse(_)));
    }

    // THEN: nothing was stored, nothing was consumed
    assert!(db.get("items", &Value::Int(1)).unwrap().is_none());
    db.insert("items", &mut document, &["age=SERIAL()"]).unwrap();
    assert_eq!(document.get("age"), Some(&Value::Int(1)));
}

#[test]
fn test_drop_namespace_restarts_serials_but_delete_does_not() {
    // GIVEN
    let mut db = items_db();
    let mut document = doc! { "id" => 1i64 };
    db.insert("items", &mut document, &["age=SERIAL()"]).unwrap();

    // WHEN: deleting the document
    db.delete("items", &document).unwrap();
    let mut after_delete = doc! { "id" => 1i64 };
    db.insert("items", &mut after_delete, &["age=SERIAL()"]).unwrap();

    // THEN: the counter survives deletes
    assert_eq!(after_delete.get("age"), Some(&Value::Int(2)));

    // WHEN: dropping and reopening the namespace
    db.drop_namespace("items").unwrap();
    db.open_namespace(NamespaceDef::new("items", "id")).unwrap();
    let mut after_drop = doc! { "id" => 1i64 };
    db.insert("items", &mut after_drop, &["age=SERIAL()"]).unwrap();

    // THEN: counters live for the namespace lifetime only
    assert_eq!(after_drop.get("age"), Some(&Value::Int(1)));
}

#[test]
fn test_serials_are_scoped_per_namespace() {
    // GIVEN
    let mut db = items_db();
    db.open_namespace(NamespaceDef::new("orders", "id")).unwrap();

    // WHEN
    let mut item = doc! { "id" => 1i64 };
    db.insert("items", &mut item, &["n=SERIAL()"]).unwrap();
    let mut order = doc! { "id" => 1i64 };
    db.insert("orders", &mut order, &["n=SERIAL()"]).unwrap();

    // THEN
    assert_eq!(item.get("n"), Some(&Value::Int(1)));
    assert_eq!(order.get("n"), Some(&Value::Int(1)));
}
