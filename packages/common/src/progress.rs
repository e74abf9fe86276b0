//! Per-participant completion for an event day.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Dish, Restaurant};
use crate::day::EventDay;
use crate::rating::{DishRating, RestaurantRating};
use crate::storage::{RecordStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishProgress {
    #[schema(example = 3)]
    pub rated: usize,
    #[schema(example = 5)]
    pub total: usize,
    #[schema(example = 60)]
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProgress {
    pub rated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    pub completed: bool,
    #[schema(example = 67)]
    pub percentage: u8,
}

/// How far a participant got through one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    pub day: EventDay,
    pub dishes: DishProgress,
    pub restaurant: RestaurantProgress,
    pub overall: OverallProgress,
}

impl DayProgress {
    /// The restaurant counts as one more item next to the dishes, so the
    /// overall percentage is `(dishes_rated + restaurant) / (total + 1)`.
    pub fn compute(
        day: EventDay,
        dishes_rated: usize,
        total_dishes: usize,
        restaurant_rated: bool,
    ) -> Self {
        let restaurant = usize::from(restaurant_rated);
        Self {
            day,
            dishes: DishProgress {
                rated: dishes_rated,
                total: total_dishes,
                percentage: percentage(dishes_rated, total_dishes),
            },
            restaurant: RestaurantProgress {
                rated: restaurant_rated,
            },
            overall: OverallProgress {
                completed: dishes_rated >= total_dishes && restaurant_rated,
                percentage: percentage(dishes_rated + restaurant, total_dishes + 1),
            },
        }
    }
}

/// Integer percentage rounded half up, capped at 100. Zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 200 + whole) / (2 * whole);
    rounded.min(100) as u8
}

/// Reads the catalog and both rating stores to build [`DayProgress`].
pub struct ProgressAggregator {
    restaurants: Arc<dyn RecordStore<Restaurant>>,
    dishes: Arc<dyn RecordStore<Dish>>,
    dish_ratings: Arc<dyn RecordStore<DishRating>>,
    restaurant_ratings: Arc<dyn RecordStore<RestaurantRating>>,
}

impl ProgressAggregator {
    pub fn new(
        restaurants: Arc<dyn RecordStore<Restaurant>>,
        dishes: Arc<dyn RecordStore<Dish>>,
        dish_ratings: Arc<dyn RecordStore<DishRating>>,
        restaurant_ratings: Arc<dyn RecordStore<RestaurantRating>>,
    ) -> Self {
        Self {
            restaurants,
            dishes,
            dish_ratings,
            restaurant_ratings,
        }
    }

    /// Only ratings of the dishes and the restaurant scheduled for `day`
    /// count towards progress.
    pub async fn progress(
        &self,
        participant_id: &str,
        day: EventDay,
    ) -> Result<DayProgress, StorageError> {
        let scheduled: HashSet<String> = self
            .dishes
            .list_by(&|d: &Dish| d.day_number == day)
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();

        let dishes_rated = self
            .dish_ratings
            .list_by(&|r: &DishRating| {
                r.participant_id == participant_id && r.day == day && scheduled.contains(&r.dish_id)
            })
            .await?
            .len();

        let restaurant_rated = match self.restaurants.find(&day).await? {
            Some(restaurant) => !self
                .restaurant_ratings
                .list_by(&|r: &RestaurantRating| {
                    r.participant_id == participant_id
                        && r.day == day
                        && r.restaurant_id == restaurant.id
                })
                .await?
                .is_empty(),
            None => false,
        };

        Ok(DayProgress::compute(
            day,
            dishes_rated,
            scheduled.len(),
            restaurant_rated,
        ))
    }
}
