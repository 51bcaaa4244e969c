use std::sync::Mutex;

use outcome_rail::convert::{
    flatten_errors, parse, parse_schema, stringify, try_catch, try_catch_kind, try_catch_with,
    unwrap_or_with, SerdeSchema, DEFAULT_ERROR_MESSAGE, MISSING_DIAGNOSTIC,
};
use outcome_rail::logging::{ErrorLog, NoopLog};
use outcome_rail::{ErrorKind, Outcome, WireOutcome};
use serde_json::json;

#[test]
fn test_try_catch_wraps_ok_as_success() {
    let outcome = try_catch(|| "7".parse::<i32>());
    assert_eq!(outcome.into_data(), Some(7));
}

#[test]
fn test_try_catch_converts_err_with_default_message() {
    let outcome = try_catch(|| "x".parse::<i32>());
    assert_eq!(outcome.message(), Some(DEFAULT_ERROR_MESSAGE));
    assert_eq!(outcome.error_kind(), Some(ErrorKind::Unexpected));
    assert!(outcome.diagnostic().is_some());
}

#[test]
fn test_try_catch_with_custom_message() {
    let outcome = try_catch_with(|| "x".parse::<i32>(), "bad input");
    assert_eq!(outcome.message(), Some("bad input"));
}

#[test]
fn test_try_catch_kind_override() {
    let outcome = try_catch_kind(|| "x".parse::<i32>(), "bad input", ErrorKind::UserValidation);
    assert_eq!(outcome.error_kind(), Some(ErrorKind::UserValidation));
}

#[test]
fn test_try_catch_diagnostic_is_the_error_rendering() {
    let outcome: WireOutcome<()> = try_catch(|| Err::<(), _>("low level detail"));
    assert_eq!(outcome.diagnostic(), Some("low level detail"));
}

#[test]
fn test_parse_schema_success() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    let schema = SerdeSchema::<User>::new();
    let outcome = parse_schema(json!({ "id": 3, "name": "ada" }), &schema, None);
    assert_eq!(outcome.into_data(), Some(User { id: 3, name: "ada".to_string() }));
}

#[test]
fn test_parse_schema_failure_is_user_validation() {
    let schema = SerdeSchema::<u32>::new();
    let outcome = parse_schema(json!("not a number"), &schema, Some("invalid id"));
    assert_eq!(outcome.error_kind(), Some(ErrorKind::UserValidation));
    assert_eq!(outcome.message(), Some("invalid id"));
    // Validator detail survives only as the diagnostic.
    assert!(outcome.diagnostic().is_some());
}

#[test]
fn test_parse_schema_default_message() {
    let schema = SerdeSchema::<u32>::new();
    let outcome = parse_schema(json!(null), &schema, None);
    assert_eq!(outcome.message(), Some("Schema validation failed"));
}

#[test]
fn test_stringify_success() {
    let outcome = stringify(&json!({ "a": 1 }));
    assert_eq!(outcome.into_data().as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn test_parse_success_and_failure() {
    assert_eq!(parse(r#"{"a":1}"#).into_data(), Some(json!({ "a": 1 })));

    let failed = parse("{oops");
    assert!(failed.is_error());
    assert_eq!(failed.message(), Some("Failed to parse JSON"));
}

#[test]
fn test_flatten_errors_all_success_preserves_order() {
    let merged = flatten_errors(vec![
        WireOutcome::success(1),
        WireOutcome::success(2),
        WireOutcome::success(3),
    ]);
    assert_eq!(merged.into_data(), Some(vec![1, 2, 3]));
}

#[test]
fn test_flatten_errors_empty_input_is_empty_success() {
    let merged = flatten_errors(Vec::<WireOutcome<i32>>::new());
    assert_eq!(merged.into_data(), Some(vec![]));
}

#[test]
fn test_flatten_errors_aggregates_messages_in_order() {
    let merged = flatten_errors(vec![
        WireOutcome::success(1),
        WireOutcome::error("a"),
        WireOutcome::success(2),
        WireOutcome::error("b"),
    ]);
    assert_eq!(merged.message(), Some("a; b"));
}

#[test]
fn test_flatten_errors_aggregates_diagnostics_with_placeholder() {
    let with_diag: WireOutcome<i32> = WireOutcome::Error {
        error_type: ErrorKind::Unexpected,
        message: "a".to_string(),
        diagnostic: Some("trace-a".to_string()),
        request_id: None,
    };
    let merged = flatten_errors(vec![with_diag, WireOutcome::error("b")]);
    assert_eq!(
        merged.diagnostic(),
        Some(format!("trace-a\n{MISSING_DIAGNOSTIC}").as_str())
    );
}

#[test]
fn test_flatten_errors_keeps_first_failing_kind() {
    let not_found: WireOutcome<i32> = WireOutcome::Error {
        error_type: ErrorKind::NotFound,
        message: "gone".to_string(),
        diagnostic: None,
        request_id: None,
    };
    let merged = flatten_errors(vec![not_found, WireOutcome::error("boom")]);
    assert_eq!(merged.error_kind(), Some(ErrorKind::NotFound));
}

#[derive(Default)]
struct RecordingLog {
    entries: Mutex<Vec<(String, Option<String>)>>,
}

impl ErrorLog for RecordingLog {
    fn log(&self, message: &str, diagnostic: Option<&str>) {
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), diagnostic.map(str::to_string)));
    }
}

#[test]
fn test_unwrap_or_returns_data_on_success() {
    assert_eq!(unwrap_or_with(Some(Outcome::success(7)), 42, &NoopLog), 7);
}

#[test]
fn test_unwrap_or_returns_default_on_error_and_logs() {
    let log = RecordingLog::default();
    let outcome: Outcome<i32> = Outcome::error_with_cause("x", "cause detail");
    assert_eq!(unwrap_or_with(Some(outcome), 42, &log), 42);

    let entries = log.entries.lock().unwrap();
    assert_eq!(*entries, vec![("x".to_string(), Some("cause detail".to_string()))]);
}

#[test]
fn test_unwrap_or_returns_default_on_absent_result_without_logging() {
    let log = RecordingLog::default();
    assert_eq!(unwrap_or_with(None::<Outcome<i32>>, 42, &log), 42);
    assert!(log.entries.lock().unwrap().is_empty());
}

#[test]
#[allow(deprecated)]
fn test_deprecated_unwrap_or_still_works() {
    use outcome_rail::convert::unwrap_or;

    assert_eq!(unwrap_or(Some(Outcome::success(7)), 42), 7);
    assert_eq!(unwrap_or(Some(Outcome::<i32>::error("x")), 42), 42);
    assert_eq!(unwrap_or(None::<Outcome<i32>>, 42), 42);
}

#[test]
fn test_deserialize_outcome_rehydrates_exactly() {
    use outcome_rail::convert::deserialize_outcome;

    let wire: WireOutcome<i32> = WireOutcome::Error {
        error_type: ErrorKind::Unauthorized,
        message: "Unauthorized".to_string(),
        diagnostic: Some("trace".to_string()),
        request_id: Some("r-1".to_string()),
    };
    let outcome = deserialize_outcome(wire.clone());
    assert_eq!(outcome.serialize(), wire);
}
