//! Update-user flow: one invalid call, one valid call, one failing handler.
//!
//! Run with `SAFE_ACTION_ENV=development cargo run --example basic_usage` to
//! also see the success timing line.

use safe_action::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct UpdateUser {
    id: String,
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    safe_action_log::init_with(safe_action_log::Config::development())?;

    let schema = SerdeSchema::<UpdateUser>::new().refine(
        "name",
        |u| u.name.chars().count() >= 3,
        "Name should be at least 3 characters long",
    );

    let update_user = create_action_with(
        schema.clone(),
        |user: UpdateUser| async move {
            // Persist `user.name` for `user.id` here.
            tracing::debug!(id = %user.id, "renaming user");
            Ok::<_, HandlerError>(json!({ "success": true, "updatedName": user.name }))
        },
        ActionConfig::from_env(),
    )
    .named("update_user");

    let rejected = update_user.invoke(json!({ "id": "1", "name": "Al" })).await;
    println!("{}", serde_json::to_string_pretty(&rejected)?);

    if let Some(errors) = rejected.validation_errors() {
        for (field, messages) in errors.iter() {
            println!("{field}: {}", messages.join(", "));
        }
    }

    let accepted = update_user.invoke(json!({ "id": "1", "name": "Ali" })).await;
    println!("{}", serde_json::to_string_pretty(&accepted)?);

    let unreachable = create_action(schema, |_: UpdateUser| async {
        Err::<(), _>(HandlerError::msg("DB unreachable"))
    })
    .named("update_user_offline");
    let failed = unreachable.invoke(json!({ "id": "1", "name": "Ali" })).await;
    println!("{}", serde_json::to_string_pretty(&failed)?);

    Ok(())
}
