use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use common::EventDay;
use common::catalog::{
    DISH_PLACEHOLDER_IMAGE, Dish, RESTAURANT_PLACEHOLDER_IMAGE, Restaurant, image_or,
    normalize_tags,
};
use common::event::EventState;
use common::intake::parse_day;
use common::rating::{DishRating, RestaurantRating};
use common::storage::StorageError;
use common::user::User;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::extractors::json::{AppJson, AppQuery};
use crate::models::admin::*;
use crate::models::catalog::*;
use crate::models::shared::ApiResponse;
use crate::state::AppState;
use crate::utils::catalog::find_restaurant;

#[utoipa::path(
    post,
    path = "/restaurant",
    tag = "Admin",
    operation_id = "createRestaurant",
    summary = "Schedule a restaurant for an event day",
    description = "Creates the restaurant featured on a day. Each day has at most one restaurant.",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = ApiResponse<Restaurant>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 409, description = "Day already has a restaurant (CONFLICT)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload))]
pub async fn create_restaurant(
    admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let valid = validate_create_restaurant(payload)?;
    let day = valid.day;

    let restaurant = Restaurant {
        id: Uuid::now_v7().to_string(),
        name: valid.name,
        description: valid.description,
        image_url: image_or(valid.image_url, RESTAURANT_PLACEHOLDER_IMAGE),
        meeting_time: valid.meeting_time,
        day_number: day,
        coordinates: valid.coordinates,
        created_at: Utc::now(),
    };

    let restaurant = state
        .stores
        .restaurants
        .insert(restaurant)
        .await
        .map_err(|e| match e {
            StorageError::Duplicate(_) => {
                AppError::Conflict(format!("Restaurant already exists for day {day}"))
            }
            other => AppError::from(other),
        })?;

    info!(admin = %admin.0.username, id = %restaurant.id, %day, "Restaurant created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(restaurant).with_message("Restaurant added successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurant",
    tag = "Admin",
    operation_id = "listRestaurants",
    summary = "List all restaurants",
    responses(
        (status = 200, description = "Restaurants ordered by day", body = ApiResponse<Vec<Restaurant>>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_restaurants(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Restaurant>>>, AppError> {
    let mut restaurants = state.stores.restaurants.list_all().await?;
    restaurants.sort_by_key(|r| r.day_number);
    Ok(Json(ApiResponse::list(restaurants)))
}

#[utoipa::path(
    post,
    path = "/dish",
    tag = "Admin",
    operation_id = "createDish",
    summary = "Add a dish to an event day",
    description = "Creates a dish served by an existing restaurant. Dishes cannot be edited or removed afterwards.",
    request_body = CreateDishRequest,
    responses(
        (status = 201, description = "Dish created", body = ApiResponse<Dish>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Restaurant not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload))]
pub async fn create_dish(
    admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDishRequest>,
) -> Result<impl IntoResponse, AppError> {
    let valid = validate_create_dish(payload)?;
    let restaurant = find_restaurant(&state, &valid.restaurant_id).await?;

    let dish = Dish {
        id: Uuid::now_v7().to_string(),
        name: valid.name,
        tags: normalize_tags(valid.tags),
        image_url: image_or(valid.image_url, DISH_PLACEHOLDER_IMAGE),
        restaurant_id: restaurant.id,
        day_number: valid.day,
        created_at: Utc::now(),
    };
    let dish = state.stores.dishes.insert(dish).await?;

    info!(admin = %admin.0.username, id = %dish.id, day = %dish.day_number, "Dish created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(dish).with_message("Dish added successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/dish",
    tag = "Admin",
    operation_id = "listDishes",
    summary = "List all dishes",
    responses(
        (status = 200, description = "Dishes ordered by day", body = ApiResponse<Vec<Dish>>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_dishes(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Dish>>>, AppError> {
    let mut dishes = state.stores.dishes.list_all().await?;
    dishes.sort_by(|a, b| {
        a.day_number
            .cmp(&b.day_number)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(Json(ApiResponse::list(dishes)))
}

#[utoipa::path(
    get,
    path = "/ratings",
    tag = "Admin",
    operation_id = "listAllRatings",
    summary = "Feed of all ratings",
    description = "Returns dish and restaurant ratings from every participant, newest first, optionally filtered by day and kind.",
    params(AdminRatingsQuery),
    responses(
        (status = 200, description = "Ratings feed", body = ApiResponse<Vec<AdminRatingEntry>>),
        (status = 400, description = "Invalid filter (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin, query))]
pub async fn list_ratings(
    _admin: AdminUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AdminRatingsQuery>,
) -> Result<Json<ApiResponse<Vec<AdminRatingEntry>>>, AppError> {
    let day = query.day.map(parse_day).transpose()?;
    let on_day = |d: EventDay| day.is_none_or(|wanted| wanted == d);

    let usernames: HashMap<String, String> = state
        .stores
        .users
        .list_all()
        .await?
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();
    let name_of = |id: &str, names: &HashMap<String, String>| {
        names.get(id).cloned().unwrap_or_else(|| id.to_string())
    };

    let mut entries = Vec::new();

    if query.kind != Some(RatingKind::Restaurant) {
        let dish_names: HashMap<String, String> = state
            .stores
            .dishes
            .list_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();
        let ratings = state
            .stores
            .dish_ratings
            .list_by(&|r: &DishRating| on_day(r.day))
            .await?;
        entries.extend(ratings.into_iter().map(|r| AdminRatingEntry {
            participant_name: name_of(&r.participant_id, &usernames),
            item_name: name_of(&r.dish_id, &dish_names),
            score: r.scores.summary(),
            average: r.scores.average(),
            id: r.id,
            kind: RatingKind::Dish,
            participant_id: r.participant_id,
            item_id: r.dish_id,
            comment: r.comment,
            day: r.day,
            created_at: r.created_at,
        }));
    }

    if query.kind != Some(RatingKind::Dish) {
        let restaurant_names: HashMap<String, String> = state
            .stores
            .restaurants
            .list_all()
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();
        let ratings = state
            .stores
            .restaurant_ratings
            .list_by(&|r: &RestaurantRating| on_day(r.day))
            .await?;
        entries.extend(ratings.into_iter().map(|r| AdminRatingEntry {
            participant_name: name_of(&r.participant_id, &usernames),
            item_name: name_of(&r.restaurant_id, &restaurant_names),
            score: format!("{}/5 stars", r.rating),
            average: f64::from(r.rating),
            id: r.id,
            kind: RatingKind::Restaurant,
            participant_id: r.participant_id,
            item_id: r.restaurant_id,
            comment: r.comment,
            day: r.day,
            created_at: r.created_at,
        }));
    }

    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(ApiResponse::list(entries)))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Admin",
    operation_id = "listUsers",
    summary = "List all users",
    responses(
        (status = 200, description = "Users ordered by username", body = ApiResponse<Vec<User>>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let mut users = state.stores.users.list_all().await?;
    users.sort_by(|a, b| a.username.cmp(&b.username));
    Ok(Json(ApiResponse::list(users)))
}

#[utoipa::path(
    patch,
    path = "/user-role",
    tag = "Admin",
    operation_id = "updateUserRole",
    summary = "Promote or demote a user",
    request_body = UpdateUserRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<User>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload))]
pub async fn update_user_role(
    admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateUserRoleRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let (user_id, is_admin) = validate_update_user_role(payload)?;

    let user = state
        .stores
        .users
        .update(&user_id, &|u: &mut User| u.is_admin = is_admin)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let action = if is_admin { "promoted to" } else { "demoted from" };
    info!(admin = %admin.0.username, user = %user.username, is_admin, "User role changed");
    Ok(Json(
        ApiResponse::ok(user).with_message(format!("User {action} admin successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/event-state",
    tag = "Admin",
    operation_id = "getEventState",
    summary = "Current event state",
    responses(
        (status = 200, description = "Event state", body = ApiResponse<EventState>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn get_event_state(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Json<ApiResponse<EventState>> {
    let event = state.event.read().await.clone();
    Json(ApiResponse::ok(event))
}

#[utoipa::path(
    post,
    path = "/event-state",
    tag = "Admin",
    operation_id = "updateEventState",
    summary = "Set the active day and event window",
    request_body = UpdateEventStateRequest,
    responses(
        (status = 200, description = "Event state updated", body = ApiResponse<EventState>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload))]
pub async fn update_event_state(
    admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateEventStateRequest>,
) -> Result<Json<ApiResponse<EventState>>, AppError> {
    let valid = validate_update_event_state(&payload)?;

    let updated = {
        let mut event = state.event.write().await;
        *event = EventState::new(valid.current_day, valid.start_date, valid.end_date);
        event.clone()
    };

    info!(admin = %admin.0.username, day = %updated.current_day, "Event state updated");
    Ok(Json(
        ApiResponse::ok(updated).with_message("Event state updated successfully"),
    ))
}
