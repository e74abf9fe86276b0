use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::rating::{
    DishRating, DishRatingCandidate, RestaurantRating, RestaurantRatingCandidate,
};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::{AppJson, AppQuery};
use crate::models::shared::{ApiResponse, ParticipantDayQuery};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/dish",
    tag = "Ratings",
    operation_id = "submitDishRating",
    summary = "Rate a dish",
    description = "Records a participant's sub-scores for one dish on one event day. Each participant can rate a dish at most once per day.",
    request_body = DishRatingCandidate,
    responses(
        (status = 201, description = "Rating recorded", body = ApiResponse<DishRating>),
        (status = 400, description = "Missing field or value out of range (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Dish already rated today (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(participant = ?payload.participant_id, dish = ?payload.dish_id))]
pub async fn submit_dish_rating(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DishRatingCandidate>,
) -> Result<impl IntoResponse, AppError> {
    let rating = state.intake.submit_dish(payload).await?;
    info!(id = %rating.id, day = %rating.day, "Dish rating recorded");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rating))))
}

#[utoipa::path(
    get,
    path = "/dish",
    tag = "Ratings",
    operation_id = "listDishRatings",
    summary = "List a participant's dish ratings for a day",
    params(ParticipantDayQuery),
    responses(
        (status = 200, description = "Dish ratings, oldest first", body = ApiResponse<Vec<DishRating>>),
        (status = 400, description = "Missing or invalid parameter (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_dish_ratings(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ParticipantDayQuery>,
) -> Result<Json<ApiResponse<Vec<DishRating>>>, AppError> {
    let (participant_id, day) = query.validate()?;
    let ratings = state.intake.dish_ratings_for(&participant_id, day).await?;
    Ok(Json(ApiResponse::ok(ratings)))
}

#[utoipa::path(
    post,
    path = "/restaurant",
    tag = "Ratings",
    operation_id = "submitRestaurantRating",
    summary = "Rate the day's restaurant",
    description = "Records a 1-5 star rating for a restaurant. Each participant can rate a restaurant at most once per day.",
    request_body = RestaurantRatingCandidate,
    responses(
        (status = 201, description = "Rating recorded", body = ApiResponse<RestaurantRating>),
        (status = 400, description = "Missing field or value out of range (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Restaurant already rated today (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(participant = ?payload.participant_id, restaurant = ?payload.restaurant_id))]
pub async fn submit_restaurant_rating(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RestaurantRatingCandidate>,
) -> Result<impl IntoResponse, AppError> {
    let rating = state.intake.submit_restaurant(payload).await?;
    info!(id = %rating.id, day = %rating.day, "Restaurant rating recorded");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rating))))
}

#[utoipa::path(
    get,
    path = "/restaurant",
    tag = "Ratings",
    operation_id = "listRestaurantRatings",
    summary = "List a participant's restaurant ratings for a day",
    params(ParticipantDayQuery),
    responses(
        (status = 200, description = "Restaurant ratings, oldest first", body = ApiResponse<Vec<RestaurantRating>>),
        (status = 400, description = "Missing or invalid parameter (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_restaurant_ratings(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ParticipantDayQuery>,
) -> Result<Json<ApiResponse<Vec<RestaurantRating>>>, AppError> {
    let (participant_id, day) = query.validate()?;
    let ratings = state
        .intake
        .restaurant_ratings_for(&participant_id, day)
        .await?;
    Ok(Json(ApiResponse::ok(ratings)))
}
