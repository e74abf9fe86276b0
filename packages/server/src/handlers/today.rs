use axum::{Json, extract::State};
use common::catalog::{Dish, Restaurant};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::shared::ApiResponse;
use crate::state::AppState;
use crate::utils::catalog::{current_day, dishes_for_day, restaurant_for_day};

#[utoipa::path(
    get,
    path = "/dishes",
    tag = "Today",
    operation_id = "todayDishes",
    summary = "Dishes featured on the current event day",
    responses(
        (status = 200, description = "Dishes of the current day, possibly empty", body = ApiResponse<Vec<Dish>>),
    ),
)]
#[instrument(skip(state))]
pub async fn today_dishes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Dish>>>, AppError> {
    let day = current_day(&state).await;
    let dishes = dishes_for_day(&state, day).await?;
    Ok(Json(ApiResponse::ok(dishes)))
}

#[utoipa::path(
    get,
    path = "/restaurant",
    tag = "Today",
    operation_id = "todayRestaurant",
    summary = "Restaurant featured on the current event day",
    responses(
        (status = 200, description = "Restaurant of the current day", body = ApiResponse<Restaurant>),
        (status = 404, description = "No restaurant scheduled for the current day (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn today_restaurant(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Restaurant>>, AppError> {
    let day = current_day(&state).await;
    let restaurant = restaurant_for_day(&state, day)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No restaurant scheduled for day {day}")))?;
    Ok(Json(ApiResponse::ok(restaurant)))
}
