//! Diagnostics overlay integration harness.
//!
//! # What this covers
//!
//! - **Visibility gate**: the overlay renders only in development builds,
//!   starts expanded, collapses and re-expands, and stays gone once closed.
//! - **Value formatting**: `format_value` is total over any serializable
//!   input and pretty-prints structures with keys in insertion order.
//!   Verified with proptest over arbitrary JSON.
//! - **Shape summary**: arrays, objects (first three keys), primitives and
//!   falsy values.
//! - **Network log window**: only the three most recent requests are shown,
//!   oldest first, with failures classified at status 400 and above.
//!
//! # Running
//!
//! ```sh
//! cargo test --test diagnostics_harness
//! # Update inline snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use mediadeck_core::diagnostics::{
    format_optional, format_value, summarize_shape, BuildMode, NetworkLogView, OverlayState,
    StatusClass,
};
use mediadeck_core::NetworkRequest;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Visibility gate
// ---------------------------------------------------------------------------

#[test]
fn production_never_renders() {
    let state = OverlayState::new();
    assert!(!state.should_render(BuildMode::Production));
    assert!(state.should_render(BuildMode::Development));
}

#[test]
fn collapse_toggles_and_close_is_terminal() {
    let mut state = OverlayState::new();
    assert!(state.is_expanded());

    state.toggle_expanded();
    assert!(!state.is_expanded());
    state.toggle_expanded();
    assert!(state.is_expanded());

    state.hide();
    assert!(!state.should_render(BuildMode::Development));
    state.toggle_expanded();
    assert!(!state.is_visible(), "no action re-opens a closed overlay");
}

// ---------------------------------------------------------------------------
// format_value
// ---------------------------------------------------------------------------

#[rstest]
#[case::null(Value::Null, "null")]
#[case::string(json!("hello"), "hello")]
#[case::boolean(json!(false), "false")]
#[case::integer(json!(-7), "-7")]
#[case::float(json!(0.25), "0.25")]
#[case::empty_array(json!([]), "[]")]
#[case::empty_object(json!({}), "{}")]
fn format_value_scalars(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(format_value(&value), expected);
}

#[test]
fn format_value_pretty_prints_nested_structures() {
    let data = json!({
        "user": {"name": "Ada", "roles": ["admin"]},
        "count": 2
    });
    insta::assert_snapshot!(format_value(&data), @r#"
    {
      "user": {
        "name": "Ada",
        "roles": [
          "admin"
        ]
      },
      "count": 2
    }
    "#);
}

#[test]
fn format_value_accepts_plain_rust_types() {
    #[derive(serde::Serialize)]
    struct Probe {
        url: &'static str,
        ok: bool,
    }
    let out = format_value(&Probe { url: "/a", ok: true });
    assert_eq!(out, "{\n  \"url\": \"/a\",\n  \"ok\": true\n}");
}

#[test]
fn format_optional_absent_reads_null() {
    assert_eq!(format_optional(None), "null");
    assert_eq!(format_optional(Some(&json!("x"))), "x");
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,16}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn structured_values_round_trip_through_display(value in arb_json()) {
        let out = format_value(&value);
        if value.is_array() || value.is_object() {
            let parsed: Value = serde_json::from_str(&out).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }

    #[test]
    fn summary_never_panics(value in arb_json()) {
        let summary = summarize_shape(Some(&value));
        prop_assert!(!summary.is_empty());
    }

    #[test]
    fn window_is_the_log_tail(n in 0usize..40) {
        let log = request_log(n);
        let view = NetworkLogView::new(&log);
        let shown: Vec<&NetworkRequest> = view.rows().map(|r| r.request()).collect();
        let expected: Vec<&NetworkRequest> = log.iter().skip(n.saturating_sub(3)).collect();
        prop_assert_eq!(shown, expected);
        prop_assert_eq!(view.hidden_count() + view.len(), n);
    }
}

// ---------------------------------------------------------------------------
// summarize_shape
// ---------------------------------------------------------------------------

#[rstest]
#[case::absent(None, "No data")]
#[case::null(Some(Value::Null), "No data")]
#[case::false_(Some(json!(false)), "No data")]
#[case::zero(Some(json!(0)), "No data")]
#[case::empty_string(Some(json!("")), "No data")]
#[case::array(Some(json!([1, 2, 3])), "Array (3 items)")]
#[case::empty_array(Some(json!([])), "Array (0 items)")]
#[case::small_object(Some(json!({"a": 1, "b": 2})), "Object (2 properties: a, b)")]
#[case::large_object(
    Some(json!({"a": 1, "b": 2, "c": 3, "d": 4})),
    "Object (4 properties: a, b, c...)"
)]
#[case::string(Some(json!("hi")), "string")]
#[case::number(Some(json!(3)), "number")]
#[case::boolean(Some(json!(true)), "boolean")]
fn summarize(#[case] value: Option<Value>, #[case] expected: &str) {
    assert_eq!(summarize_shape(value.as_ref()), expected);
}

// ---------------------------------------------------------------------------
// Network log window
// ---------------------------------------------------------------------------

#[test]
fn only_last_three_requests_are_shown() {
    let log = request_log(5);
    let view = NetworkLogView::new(&log);
    let labels: Vec<String> = view.rows().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["GET /api/3", "GET /api/4", "GET /api/5"]);
    assert_eq!(view.hidden_count(), 2);
}

#[test]
fn short_log_is_shown_whole() {
    let log = request_log(2);
    let view = NetworkLogView::new(&log);
    assert_eq!(view.len(), 2);
    assert_eq!(view.hidden_count(), 0);
}

#[test]
fn empty_log_has_no_rows() {
    let view = NetworkLogView::new(&[]);
    assert!(view.is_empty());
    assert_eq!(view.rows().count(), 0);
}

#[rstest]
#[case::ok(Some(200), StatusClass::Success)]
#[case::redirect(Some(302), StatusClass::Success)]
#[case::boundary(Some(399), StatusClass::Success)]
#[case::client_error(Some(400), StatusClass::Failure)]
#[case::server_error(Some(503), StatusClass::Failure)]
#[case::no_response(None, StatusClass::Success)]
fn status_classification(#[case] status: Option<u16>, #[case] expected: StatusClass) {
    assert_eq!(StatusClass::of(status), expected);
}

#[test]
fn error_text_travels_with_its_row() {
    let log = vec![
        get("/ok", 200),
        NetworkRequest::new("POST", "/upload", Some(500)).with_error("disk full"),
        NetworkRequest::new("GET", "/offline", None).with_error("connection refused"),
    ];
    let rows: Vec<_> = NetworkLogView::new(&log).rows().collect();

    assert_eq!(rows[0].error(), None);
    assert_eq!(rows[1].error(), Some("disk full"));
    assert_eq!(rows[1].status_class(), StatusClass::Failure);
    assert_eq!(rows[2].status_text(), "---");
}

#[test]
fn session_data_feeds_summary_and_window() {
    let session = session_with(Some(json!([1, 2])), request_log(4));
    assert_eq!(summarize_shape(session.data.as_ref()), "Array (2 items)");
    assert_eq!(NetworkLogView::new(&session.network_requests).len(), 3);
}
