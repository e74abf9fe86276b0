use common::EventDay;
use common::catalog::{Dish, Restaurant};

use crate::error::AppError;
use crate::state::AppState;

/// The currently active event day.
pub async fn current_day(state: &AppState) -> EventDay {
    state.event.read().await.current_day
}

/// Look up a restaurant by ID, returning 404 if not found.
pub async fn find_restaurant(state: &AppState, id: &str) -> Result<Restaurant, AppError> {
    state
        .stores
        .restaurants
        .list_by(&|r: &Restaurant| r.id == id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("Restaurant '{id}' not found")))
}

/// The restaurant scheduled for `day`, if any.
pub async fn restaurant_for_day(
    state: &AppState,
    day: EventDay,
) -> Result<Option<Restaurant>, AppError> {
    Ok(state.stores.restaurants.find(&day).await?)
}

/// Dishes scheduled for `day`, in creation order.
pub async fn dishes_for_day(state: &AppState, day: EventDay) -> Result<Vec<Dish>, AppError> {
    let mut dishes = state
        .stores
        .dishes
        .list_by(&|d: &Dish| d.day_number == day)
        .await?;
    dishes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    Ok(dishes)
}
