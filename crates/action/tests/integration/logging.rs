use safe_action::prelude::*;
use serde_json::json;
use tracing_test::traced_test;

use crate::common::{UpdateUser, update_user_schema};

fn renamer(
    config: ActionConfig,
) -> SafeAction<SerdeSchema<UpdateUser>, impl Handler<UpdateUser, Output = String>> {
    create_action_with(
        update_user_schema(),
        |user: UpdateUser| async move { Ok::<_, HandlerError>(user.name) },
        config,
    )
    .named("rename_user")
}

#[tokio::test]
#[traced_test]
async fn success_timing_is_logged_in_development() {
    let response = renamer(ActionConfig::development())
        .invoke(json!({ "id": "1", "name": "Ali" }))
        .await;

    assert!(response.is_success());
    assert!(logs_contain("[ACTION LOG]: Success in"));
    assert!(logs_contain("rename_user"));
}

#[tokio::test]
#[traced_test]
async fn success_timing_is_silent_outside_development() {
    for mode in [ExecutionMode::Production, ExecutionMode::Test] {
        let response = renamer(ActionConfig::default().with_mode(mode))
            .invoke(json!({ "id": "1", "name": "Ali" }))
            .await;
        assert!(response.is_success());
    }

    assert!(!logs_contain("[ACTION LOG]"));
}

#[tokio::test]
#[traced_test]
async fn success_timing_needs_duration_tracking() {
    let config = ActionConfig::development().with_duration_tracking(false);
    let response = renamer(config)
        .invoke(json!({ "id": "1", "name": "Ali" }))
        .await;

    assert!(response.is_success());
    assert!(!logs_contain("[ACTION LOG]"));
}

#[tokio::test]
#[traced_test]
async fn handler_failure_is_logged_in_every_mode() {
    let action = create_action(update_user_schema(), |_: UpdateUser| async {
        Err::<(), _>(HandlerError::msg("DB unreachable"))
    });

    let response = action.invoke(json!({ "id": "1", "name": "Ali" })).await;

    assert_eq!(response.error(), Some("DB unreachable"));
    assert!(logs_contain("[ACTION_ERROR]: DB unreachable"));
}

#[tokio::test]
#[traced_test]
async fn opaque_failure_logs_the_original_value() {
    let action = create_action(update_user_schema(), |_: UpdateUser| async {
        Err::<(), _>(HandlerError::opaque("socket closed"))
    });

    let response = action.invoke(json!({ "id": "1", "name": "Ali" })).await;

    assert_eq!(response.error(), Some(safe_action::UNEXPECTED_ERROR_MESSAGE));
    assert!(logs_contain("socket closed"));
}

#[tokio::test]
#[traced_test]
async fn validation_rejection_is_a_debug_event() {
    let response = renamer(ActionConfig::development())
        .invoke(json!({ "id": "1", "name": "Al" }))
        .await;

    assert!(response.is_invalid());
    assert!(logs_contain("input rejected by schema"));
    assert!(!logs_contain("[ACTION_ERROR]"));
}

#[tokio::test]
#[traced_test]
async fn unconvertible_input_is_logged_inside_the_action_span() {
    use std::collections::HashMap;

    // JSON object keys must be strings.
    let mut raw = HashMap::new();
    raw.insert(vec![1_u8], "Ali");

    let response = renamer(ActionConfig::default()).invoke_with(&raw).await;

    assert!(response.is_invalid());
    assert!(logs_contain("input could not be converted to JSON"));
    assert!(logs_contain("rename_user"));
}
