use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use roost_shared::Profile;

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}

async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.profile.get_profile().await?))
}
