use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use safe_action::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};

pub const NAME_TOO_SHORT: &str = "Name should be at least 3 characters long";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateUser {
    pub id: String,
    pub name: String,
}

pub fn update_user_schema() -> SerdeSchema<UpdateUser> {
    SerdeSchema::new().refine("name", |u: &UpdateUser| u.name.chars().count() >= 3, NAME_TOO_SHORT)
}

/// Counts handler invocations.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// The rename handler from the update-user flow, counting its calls.
pub fn rename_handler(
    counter: CallCounter,
) -> impl Fn(UpdateUser) -> std::future::Ready<Result<Value, HandlerError>> + Clone + Send + Sync {
    move |user: UpdateUser| {
        counter.hit();
        std::future::ready(Ok(json!({ "success": true, "updatedName": user.name })))
    }
}
