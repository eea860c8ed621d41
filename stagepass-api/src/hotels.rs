use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};

use stagepass_core::models::{Hotel, HotelWithRooms};

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/{hotel_id}", get(get_hotel_by_id))
}

/// GET /hotels
/// All hotels, for a user whose ticket grants hotel access
async fn get_hotels(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels = state.hotels.get_hotels(user.0).await?;
    Ok(Json(hotels))
}

/// GET /hotels/{hotel_id}
/// One hotel with its rooms; malformed ids are rejected before the
/// service runs
async fn get_hotel_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelWithRooms>, AppError> {
    let hotel_id = hotel_id.parse::<i32>().map_err(|_| AppError::InvalidId)?;

    let hotel = state.hotels.get_hotel_by_id(user.0, hotel_id).await?;
    Ok(Json(hotel))
}
