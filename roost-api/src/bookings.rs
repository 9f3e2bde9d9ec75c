use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::get,
    Router,
};
use roost_shared::{Booking, NewBooking};
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}

/// Bookings as stored; clients resolve the properties themselves.
async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list().await?;
    Ok(Json(bookings.into_iter().map(|b| b.booking).collect()))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let created = state.bookings.create(&req).await?;
    info!(
        booking_id = %created.booking.id,
        property_id = %req.property_id,
        "Booking stored"
    );
    Ok((StatusCode::CREATED, Json(created.booking)))
}
