//! Integration tests for webhook classification.
//!
//! These tests drive the public `resolve` entry point end-to-end with the
//! production date and email adapters:
//! 1. Catalogue dispatch by event name
//! 2. Envelope and structural validation
//! 3. Sub-resource location by event type
//! 4. Accessor defaults and flag parsing

use proptest::prelude::*;
use serde_json::{json, Value};

use memberpress_events::domain::events::descriptor_for;
use memberpress_events::{resolve, Category, EventError, EventName};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// A `data` object satisfying every variant's structural requirements.
fn universal_data() -> Value {
    json!({
        "id": 1001,
        "username": "bob",
        "email": "bob@x.com",
        "subscr_id": "sub_1001",
        "trans_num": "txn_1001",
        "gateway": "stripe",
        "price": "9.99",
        "period": "1",
        "period_type": "months",
        "status": "active",
        "amount": "9.99",
        "total": "9.99",
        "tax_amount": "0.00",
        "tax_rate": "0.000",
        "txn_type": "payment",
        "created_at": "2022-05-01 10:00:00",
        "expires_at": "2022-06-01 10:00:00",
        "membership": {"id": 7, "title": "Pro"},
        "member": {"id": 42, "username": "carol", "email": "carol@example.com"},
        "subscription": {"id": 9, "subscr_id": "sub_9"}
    })
}

fn envelope(name: EventName, data: Value) -> Value {
    let tag = descriptor_for(name.as_str())
        .map(|d| d.event_type_tag())
        .unwrap_or_default();
    json!({"event": name.as_str(), "type": tag, "data": data})
}

fn member_payload() -> Value {
    json!({
        "event": "member-added",
        "type": "member",
        "data": {"id": 5, "username": "bob", "email": "bob@x.com"}
    })
}

fn transaction_payload() -> Value {
    envelope(EventName::TransactionCompleted, universal_data())
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn every_known_name_resolves_to_a_valid_view_of_that_name() {
    for name in EventName::ALL.iter().filter(|n| !n.is_unidentified()) {
        let view = resolve(envelope(*name, universal_data())).unwrap();
        assert_eq!(view.event_name(), *name);
        assert!(view.is_valid(), "{name} should validate");
    }
}

#[test]
fn empty_payload_resolves_to_unidentified() {
    let view = resolve(json!({})).unwrap();
    assert_eq!(view.event_name(), EventName::UnidentifiedEvent);
    assert!(!view.is_valid());
}

#[test]
fn null_event_resolves_to_unidentified() {
    let view = resolve(json!({"event": null})).unwrap();
    assert_eq!(view.event_name(), EventName::UnidentifiedEvent);
}

#[test]
fn unknown_name_is_a_lookup_error() {
    assert_eq!(
        resolve(json!({"event": "member-promoted"})).unwrap_err(),
        EventError::UnknownEvent("member-promoted".to_string())
    );
}

proptest! {
    #[test]
    fn arbitrary_unknown_names_fail(name in "[a-z0-9_.-]{1,40}") {
        prop_assume!(EventName::from_wire(&name).is_none());
        let payload = json!({"event": name, "type": "member", "data": {}});
        prop_assert!(matches!(
            resolve(payload),
            Err(EventError::UnknownEvent(_))
        ));
    }

    #[test]
    fn resolve_never_fails_for_known_names_whatever_the_data(
        index in 0..EventName::ALL.len(),
        data in prop_oneof![
            Just(Value::Null),
            Just(json!([])),
            Just(json!("0")),
            Just(json!({})),
            Just(json!({"member": "0", "membership_id": 3})),
        ],
    ) {
        let name = EventName::ALL[index];
        let view = resolve(json!({"event": name.as_str(), "type": "transaction", "data": data})).unwrap();
        prop_assert_eq!(view.event_name(), name);
        let _ = view.amount();
        let _ = view.created_at();
        let _ = view.member();
        let _ = view.recent_transactions();
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn validate_is_idempotent() {
    let mut view = resolve(transaction_payload()).unwrap();
    let before = (view.is_valid(), view.amount(), view.created_at(), view.rebill());
    view.validate();
    view.validate();
    let after = (view.is_valid(), view.amount(), view.created_at(), view.rebill());
    assert_eq!(before, after);
}

#[tracing_test::traced_test]
#[test]
fn mismatched_type_is_invalid_with_warning() {
    let payload = json!({
        "event": "after-cc-expires-reminder",
        "type": "transaction",
        "data": universal_data()
    });
    let view = resolve(payload).unwrap();

    assert_eq!(view.event_name(), EventName::AfterCcExpiresReminder);
    assert!(!view.is_valid());
    assert!(logs_contain("inconsistent or missing 'type' key"));
}

#[test]
fn missing_category_key_is_invalid() {
    let mut payload = transaction_payload();
    payload["data"].as_object_mut().unwrap().remove("membership");
    assert!(!resolve(payload).unwrap().is_valid());
}

#[test]
fn category_id_alias_satisfies_requirement() {
    let mut payload = transaction_payload();
    let data = payload["data"].as_object_mut().unwrap();
    data.remove("membership");
    data.insert("membership_id".to_string(), json!(7));
    assert!(resolve(payload).unwrap().is_valid());
}

// =============================================================================
// Sub-resource Location
// =============================================================================

#[test]
fn member_event_materialises_member_from_data() {
    let view = resolve(member_payload()).unwrap();
    assert!(view.is_valid());
    assert_eq!(view.member().and_then(|m| m.username()), Some("bob"));
    assert_eq!(view.email(), Some("bob@x.com"));
}

#[test]
fn transaction_event_materialises_member_from_nested_key() {
    let view = resolve(transaction_payload()).unwrap();
    assert_eq!(view.member().and_then(|m| m.username()), Some("carol"));
    assert!(view.has_member());
    assert!(view.has_transaction());
    assert_eq!(view.event_type(), Some(Category::Transaction));
}

#[test]
fn undeclared_categories_are_absent() {
    let view = resolve(member_payload()).unwrap();
    assert!(!view.has_subscription());
    assert!(view.subscription().is_none());
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn rebill_flag_parsing() {
    for (raw, expected) in [
        (json!("TRUE"), true),
        (json!("true"), true),
        (json!("True"), true),
        (json!("maybe"), false),
        (json!("false"), false),
    ] {
        let mut payload = transaction_payload();
        payload["data"]["rebill"] = raw;
        assert_eq!(resolve(payload).unwrap().rebill(), expected);
    }
    assert!(!resolve(transaction_payload()).unwrap().rebill());
}

#[test]
fn zero_date_reads_as_absent() {
    let mut payload = transaction_payload();
    payload["data"]["expires_at"] = json!("0000-00-00 00:00:00");
    let view = resolve(payload).unwrap();
    assert!(view.is_valid());
    assert_eq!(view.expires_at(), None);
    assert!(view.created_at().is_some());
}

#[test]
fn numeric_accessors_default_when_absent() {
    let view = resolve(member_payload()).unwrap();
    assert_eq!(view.amount(), 0.0);
    assert_eq!(view.active_txn_count(), 0);
    assert_eq!(view.total(), None);
}
