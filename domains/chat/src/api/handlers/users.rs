//! User API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use parrot_common::Result;

use crate::api::state::ChatState;
use crate::domain::entities::User;

/// User response DTO
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
        }
    }
}

/// Get the primary user of this deployment
pub async fn get_my_user(State(state): State<ChatState>) -> Result<Json<UserResponse>> {
    let user = state.service.primary_user().await?;
    Ok(Json(user.into()))
}
