use pretty_assertions::assert_eq;
use safe_action::prelude::*;
use serde_json::json;

use crate::common::{CallCounter, NAME_TOO_SHORT, rename_handler, update_user_schema};

#[tokio::test]
async fn short_name_is_rejected_with_field_message() {
    let counter = CallCounter::default();
    let update_user = create_action(update_user_schema(), rename_handler(counter.clone()));

    let response = update_user.invoke(json!({ "id": "1", "name": "Al" })).await;

    assert!(response.is_invalid());
    assert_eq!(response.error(), Some("Validation failed."));
    assert_eq!(
        response.validation_errors(),
        Some(&FieldErrors::single("name", NAME_TOO_SHORT))
    );
    assert_eq!(response.data(), None);
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn valid_user_is_renamed() {
    let counter = CallCounter::default();
    let update_user = create_action(update_user_schema(), rename_handler(counter.clone()));

    let response = update_user.invoke(json!({ "id": "1", "name": "Ali" })).await;

    assert_eq!(
        response.data(),
        Some(&json!({ "success": true, "updatedName": "Ali" }))
    );
    assert_eq!(response.error(), None);
    assert_eq!(response.validation_errors(), None);
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn wire_form_matches_client_contract() {
    let update_user = create_action_with(
        update_user_schema(),
        rename_handler(CallCounter::default()),
        ActionConfig::default().with_duration_tracking(false),
    );

    let invalid = update_user.invoke(json!({ "id": "1", "name": "Al" })).await;
    assert_eq!(
        serde_json::to_value(&invalid).unwrap(),
        json!({
            "error": "Validation failed.",
            "validationErrors": { "name": [NAME_TOO_SHORT] }
        })
    );

    let ok = update_user.invoke(json!({ "id": "1", "name": "Ali" })).await;
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({ "data": { "success": true, "updatedName": "Ali" }, "error": null })
    );
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() {
    let counter = CallCounter::default();
    let update_user = create_action(update_user_schema(), rename_handler(counter.clone()));

    let response = update_user.invoke(json!({ "id": "1" })).await;

    assert_eq!(
        response.validation_errors().and_then(|e| e.get("name")),
        Some(&["Required".to_string()][..])
    );
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn typed_input_goes_through_the_same_schema() {
    #[derive(serde::Serialize)]
    struct Form<'a> {
        id: &'a str,
        name: &'a str,
    }

    let update_user = create_action(update_user_schema(), rename_handler(CallCounter::default()));
    let response = update_user.invoke_with(&Form { id: "7", name: "Bo" }).await;
    assert!(response.is_invalid());
}

#[tokio::test]
async fn wrongly_typed_field_is_reported_by_name() {
    let counter = CallCounter::default();
    let update_user = create_action(update_user_schema(), rename_handler(counter.clone()));

    let response = update_user.invoke(json!({ "id": 1, "name": "Ali" })).await;

    let errors = response.validation_errors();
    assert!(errors.is_some_and(|e| e.contains("id") && !e.contains("_root")));
    assert_eq!(counter.count(), 0);
}
