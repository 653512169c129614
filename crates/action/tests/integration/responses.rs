use std::fmt;

use pretty_assertions::assert_eq;
use rstest::rstest;
use safe_action::prelude::*;
use safe_action::{UNEXPECTED_ERROR_MESSAGE, VALIDATION_FAILED_MESSAGE};
use serde_json::{Value, json};

use crate::common::{UpdateUser, update_user_schema};

#[derive(Debug, Clone, Copy)]
enum Failure {
    Standard,
    Message,
    PlainString,
    PlainObject,
    Panic,
}

#[derive(Debug)]
struct DbUnreachable;

impl fmt::Display for DbUnreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DB unreachable")
    }
}

impl std::error::Error for DbUnreachable {}

async fn failing(kind: Failure) -> Result<Value, HandlerError> {
    match kind {
        Failure::Standard => Err(DbUnreachable.into()),
        Failure::Message => Err(HandlerError::msg("DB unreachable")),
        Failure::PlainString => Err(HandlerError::opaque("DB unreachable")),
        Failure::PlainObject => Err(HandlerError::opaque(json!({ "code": 503 }))),
        Failure::Panic => panic!("DB unreachable"),
    }
}

#[rstest]
#[case::standard_error(Failure::Standard, "DB unreachable")]
#[case::message_error(Failure::Message, "DB unreachable")]
#[case::plain_string(Failure::PlainString, UNEXPECTED_ERROR_MESSAGE)]
#[case::plain_object(Failure::PlainObject, UNEXPECTED_ERROR_MESSAGE)]
#[case::panic(Failure::Panic, UNEXPECTED_ERROR_MESSAGE)]
#[tokio::test]
async fn handler_failures_become_failed_responses(
    #[case] kind: Failure,
    #[case] expected: &str,
) {
    let action = create_action(update_user_schema(), move |_: UpdateUser| failing(kind));

    let response = action.invoke(json!({ "id": "1", "name": "Ali" })).await;

    assert!(response.is_failure());
    assert_eq!(response.error(), Some(expected));
    assert_eq!(response.data(), None);
    assert_eq!(response.validation_errors(), None);
}

#[rstest]
#[case::null(json!(null))]
#[case::string(json!("Ali"))]
#[case::array(json!([1, 2, 3]))]
#[case::empty_object(json!({}))]
#[case::wrong_types(json!({ "id": 1, "name": false }))]
#[tokio::test]
async fn malformed_input_is_always_invalid(#[case] raw: Value) {
    let action = create_action(update_user_schema(), |user: UpdateUser| async move {
        Ok::<_, HandlerError>(user.name)
    });

    let response = action.invoke(raw).await;

    assert!(response.is_invalid());
    assert_eq!(response.error(), Some(VALIDATION_FAILED_MESSAGE));
    assert!(response.validation_errors().is_some_and(|e| !e.is_empty()));
    assert_eq!(response.data(), None);
}

#[rstest]
#[case::valid(json!({ "id": "1", "name": "Ali" }))]
#[case::invalid(json!({ "id": "1", "name": "Al" }))]
#[tokio::test]
async fn repeated_invocations_are_structurally_equal(#[case] raw: Value) {
    let action = create_action(update_user_schema(), |user: UpdateUser| async move {
        Ok::<_, HandlerError>(json!({ "id": user.id, "len": user.name.len() }))
    });

    let first = action.invoke(raw.clone()).await;
    let second = action.invoke(raw).await;

    assert_eq!(first.outcome(), second.outcome());
}

#[tokio::test]
async fn into_result_supports_question_mark() {
    async fn rename(raw: Value) -> Result<String, safe_action::ActionFailure> {
        let action = create_action(update_user_schema(), |user: UpdateUser| async move {
            Ok::<_, HandlerError>(user.name)
        });
        let name = action.invoke(raw).await.into_result()?;
        Ok(name.to_uppercase())
    }

    assert_eq!(rename(json!({ "id": "1", "name": "Ali" })).await, Ok("ALI".into()));
    let err = rename(json!({ "id": "1", "name": "Al" })).await.unwrap_err();
    assert!(err.validation_errors().is_some());
}
