use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use roost_shared::Property;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_properties))
        .route("/properties/{id}", get(get_property))
}

async fn list_properties(State(state): State<AppState>) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(state.properties.list_properties().await?))
}

async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, AppError> {
    state
        .properties
        .get_property(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("property {}", id)))
}
