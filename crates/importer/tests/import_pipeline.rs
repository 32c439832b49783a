//! End-to-end tests for the collection import pipeline.

#![allow(clippy::unwrap_used, clippy::panic, missing_docs)]

use pretty_assertions::assert_eq;
use tern_domain::{CollectionItem, HttpMethod, WsBodyMode};
use tern_importer::CollectionImporter;

fn import(content: &str) -> tern_importer::ImportOutcome {
    CollectionImporter::new().import_str(content).unwrap()
}

#[test]
fn item_count_matches_supported_leaves() {
    // Five leaves, of which three carry a whitelisted method or the
    // WebSocket marker.
    let content = r#"{
        "info": {"name": "Counts"},
        "item": [
            {"name": "A", "request": {"method": "GET", "url": "/a"}},
            {"name": "B", "request": {"method": "OPTIONS", "url": "/b"}},
            {"name": "C", "request": {"method": "delete", "url": "/c"}},
            {"name": "D", "request": {"method": "HEAD", "url": "/d"}},
            {"name": "E", "request": {"method": "WEBSOCKET", "url": "wss://e"}}
        ]
    }"#;

    let outcome = import(content);
    assert_eq!(outcome.collection.items.len(), 3);
    assert_eq!(outcome.collection.total_requests, 3);
    assert_eq!(outcome.warnings.len(), 2);
}

#[test]
fn nested_folders_produce_slash_joined_names() {
    let content = r#"{
        "info": {"name": "Nested"},
        "item": [{
            "name": "Auth",
            "item": [{
                "name": "V2",
                "item": [{"name": "Login", "request": {"method": "POST", "url": "/login"}}]
            }]
        }]
    }"#;

    let outcome = import(content);
    let item = &outcome.collection.items[0];
    assert_eq!(item.name(), "Auth/V2/Login");
    match item {
        CollectionItem::Request(r) => assert_eq!(r.operation_id, "Login"),
        other => panic!("expected REQUEST item, got {other:?}"),
    }
}

#[test]
fn method_filtering_and_case_normalization() {
    let content = r#"{
        "info": {"name": "Methods"},
        "item": [
            {"name": "Opt", "request": {"method": "OPTIONS", "url": "/o"}},
            {"name": "Lower", "request": {"method": "get", "url": "/g"}}
        ]
    }"#;

    let outcome = import(content);
    assert_eq!(outcome.collection.items.len(), 1);
    match &outcome.collection.items[0] {
        CollectionItem::Request(r) => {
            assert_eq!(r.name, "Lower");
            assert_eq!(r.method, HttpMethod::Get);
            assert_eq!(r.method.to_string(), "GET");
        }
        other => panic!("expected REQUEST item, got {other:?}"),
    }
}

#[test]
fn header_required_inverts_disabled() {
    let content = r#"{
        "info": {"name": "Headers"},
        "item": [{
            "name": "WithHeaders",
            "request": {
                "method": "GET",
                "url": "/h",
                "header": [
                    {"key": "X-Token", "value": "t", "disabled": false},
                    {"key": "X-Token-Off", "value": "t", "disabled": true}
                ]
            }
        }]
    }"#;

    let outcome = import(content);
    match &outcome.collection.items[0] {
        CollectionItem::Request(r) => {
            assert!(r.headers[0].required);
            assert!(!r.headers[1].required);
            assert_eq!(r.headers[0].schema, serde_json::json!({}));
        }
        other => panic!("expected REQUEST item, got {other:?}"),
    }
}

#[test]
fn raw_body_parses_and_formdata_passes_through() {
    let content = r#"{
        "info": {"name": "Bodies"},
        "item": [
            {"name": "Raw", "request": {
                "method": "POST", "url": "/r",
                "body": {"mode": "raw", "raw": "{\"a\":1}"}
            }},
            {"name": "Form", "request": {
                "method": "POST", "url": "/f",
                "body": {"mode": "formdata", "formdata": [{"key": "k", "value": "v"}]}
            }},
            {"name": "NoBody", "request": {"method": "GET", "url": "/n"}}
        ]
    }"#;

    let outcome = import(content);
    let bodies: Vec<_> = outcome
        .collection
        .items
        .iter()
        .map(|item| match item {
            CollectionItem::Request(r) => &r.body,
            other => panic!("expected REQUEST item, got {other:?}"),
        })
        .collect();

    assert_eq!(bodies[0].len(), 1);
    assert_eq!(bodies[0][0].body_type, "raw");
    assert_eq!(bodies[0][0].schema, Some(serde_json::json!({"a": 1})));

    assert_eq!(bodies[1].len(), 1);
    assert_eq!(bodies[1][0].body_type, "formdata");
    assert_eq!(bodies[1][0].schema, None);

    // No source body at all: the sequence is empty, not a null element.
    assert!(bodies[2].is_empty());
}

#[test]
fn query_params_keep_order_and_disabled_entries() {
    let content = r#"{
        "info": {"name": "Query"},
        "item": [{
            "name": "Q",
            "request": {
                "method": "GET",
                "url": {
                    "raw": "/q?a=1&b=2",
                    "query": [
                        {"key": "a", "value": "1"},
                        {"key": "b", "value": "2", "disabled": true}
                    ]
                }
            }
        }]
    }"#;

    let outcome = import(content);
    match &outcome.collection.items[0] {
        CollectionItem::Request(r) => {
            assert_eq!(r.url, "/q?a=1&b=2");
            let pairs: Vec<(&str, &str)> = r
                .query_params
                .iter()
                .map(|q| (q.key.as_str(), q.value.as_str()))
                .collect();
            assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
        }
        other => panic!("expected REQUEST item, got {other:?}"),
    }
}

/// Serializes a collection with the wall-clock fields stripped, for
/// comparisons across separate conversion calls.
fn without_timestamps(collection: &tern_domain::Collection) -> serde_json::Value {
    fn strip(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                map.remove("createdAt");
                map.remove("updatedAt");
                for v in map.values_mut() {
                    strip(v);
                }
            }
            serde_json::Value::Array(items) => {
                for v in items {
                    strip(v);
                }
            }
            _ => {}
        }
    }

    let mut json = serde_json::to_value(collection).unwrap();
    strip(&mut json);
    json
}

#[test]
fn conversion_is_idempotent_modulo_timestamps() {
    let content = r#"{
        "info": {"name": "Stable", "description": "same in, same out"},
        "item": [
            {"name": "Dir", "item": [
                {"name": "One", "request": {"method": "PUT", "url": "/1",
                    "body": {"mode": "raw", "raw": "[1, 2, 3]"}}}
            ]},
            {"name": "Two", "request": {"method": "WEBSOCKET", "url": "wss://2"}}
        ]
    }"#;

    let first = import(content);
    let second = import(content);
    assert_eq!(
        without_timestamps(&first.collection),
        without_timestamps(&second.collection)
    );
}

#[test]
fn end_to_end_demo_scenario() {
    let content = r#"{
        "info": {"name": "Demo"},
        "item": [
            {"name": "Ping", "request": {"method": "GET", "url": "https://api.test/ping"}},
            {"name": "Auth", "item": [
                {"name": "Connect", "request": {"method": "WEBSOCKET", "url": "wss://api.test/live"}}
            ]}
        ]
    }"#;

    let outcome = import(content);
    let collection = &outcome.collection;

    assert_eq!(collection.name, "Demo");
    assert_eq!(collection.description, None);
    assert_eq!(collection.total_requests, 2);
    assert_eq!(collection.created_at, collection.updated_at);

    match &collection.items[0] {
        CollectionItem::Request(r) => {
            assert_eq!(r.name, "Ping");
            assert_eq!(r.operation_id, "Ping");
            assert_eq!(r.method, HttpMethod::Get);
            assert_eq!(r.id, None);
            assert!(r.body.is_empty());
        }
        other => panic!("expected REQUEST item, got {other:?}"),
    }

    match &collection.items[1] {
        CollectionItem::WebSocket(w) => {
            assert_eq!(w.name, "Auth/Connect");
            assert_eq!(w.url, "wss://api.test/live");
            assert_eq!(w.body_mode, WsBodyMode::None);
            assert_eq!(w.message, None);
            assert_eq!(w.created_by, "system");
        }
        other => panic!("expected WEBSOCKET item, got {other:?}"),
    }
}
