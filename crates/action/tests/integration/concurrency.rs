use std::time::Duration;

use futures::future::join_all;
use pretty_assertions::assert_eq;
use safe_action::prelude::*;
use serde_json::json;

use crate::common::{UpdateUser, update_user_schema};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_invocations_are_independent() {
    let action = create_action(update_user_schema(), |user: UpdateUser| async move {
        // Later ids finish first, so completion order differs from start order.
        let delay = 40_u64.saturating_sub(user.id.parse::<u64>().unwrap_or(0) * 5);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok::<_, HandlerError>(user.id)
    });

    let inputs = (0..8).map(|i| {
        let name = if i % 3 == 0 { "Al" } else { "Alice" };
        json!({ "id": i.to_string(), "name": name })
    });
    let responses = join_all(inputs.map(|raw| action.invoke(raw))).await;

    for (i, response) in responses.iter().enumerate() {
        if i % 3 == 0 {
            assert!(response.is_invalid(), "input {i} should be invalid");
        } else {
            assert_eq!(response.data(), Some(&i.to_string()));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shared_action_runs_on_spawned_tasks() {
    let call = create_action(update_user_schema(), |user: UpdateUser| async move {
        Ok::<_, HandlerError>(user.name.len())
    })
    .named("name_length")
    .into_fn();

    let tasks: Vec<_> = ["Ali", "Alice", "Al"]
        .into_iter()
        .map(|name| tokio::spawn(call.clone()(json!({ "id": "1", "name": name }))))
        .collect();

    let mut lengths = Vec::new();
    for task in tasks {
        lengths.push(task.await.unwrap().into_data());
    }
    assert_eq!(lengths, vec![Some(3), Some(5), None]);
}

#[tokio::test]
async fn duration_covers_handler_time() {
    let action = create_action(update_user_schema(), |_: UpdateUser| async {
        tokio::time::sleep(Duration::from_millis(25)).await;
        Ok::<_, HandlerError>(())
    });

    let response = action.invoke(json!({ "id": "1", "name": "Ali" })).await;
    assert!(response.duration().is_some_and(|d| d >= Duration::from_millis(25)));
}
