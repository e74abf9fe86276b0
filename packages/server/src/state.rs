use std::sync::Arc;

use common::catalog::{Dish, Restaurant};
use common::event::EventState;
use common::intake::RatingIntake;
use common::progress::ProgressAggregator;
use common::rating::{DishRating, RestaurantRating};
use common::storage::{MemoryStore, RecordStore};
use common::user::User;
use tokio::sync::RwLock;

use crate::config::AppConfig;

/// Record stores shared by the handlers.
#[derive(Clone)]
pub struct Stores {
    pub restaurants: Arc<dyn RecordStore<Restaurant>>,
    pub dishes: Arc<dyn RecordStore<Dish>>,
    pub dish_ratings: Arc<dyn RecordStore<DishRating>>,
    pub restaurant_ratings: Arc<dyn RecordStore<RestaurantRating>>,
    pub users: Arc<dyn RecordStore<User>>,
}

impl Stores {
    /// Empty process-local stores.
    pub fn in_memory() -> Self {
        Self {
            restaurants: Arc::new(MemoryStore::<Restaurant>::new()),
            dishes: Arc::new(MemoryStore::<Dish>::new()),
            dish_ratings: Arc::new(MemoryStore::<DishRating>::new()),
            restaurant_ratings: Arc::new(MemoryStore::<RestaurantRating>::new()),
            users: Arc::new(MemoryStore::<User>::new()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub stores: Stores,
    pub event: Arc<RwLock<EventState>>,
    pub intake: Arc<RatingIntake>,
    pub progress: Arc<ProgressAggregator>,
}

impl AppState {
    pub fn new(config: AppConfig, stores: Stores, event: EventState) -> Self {
        let intake = RatingIntake::new(
            stores.dish_ratings.clone(),
            stores.restaurant_ratings.clone(),
            config.scoring.clone(),
        );
        let progress = ProgressAggregator::new(
            stores.restaurants.clone(),
            stores.dishes.clone(),
            stores.dish_ratings.clone(),
            stores.restaurant_ratings.clone(),
        );
        Self {
            config,
            stores,
            event: Arc::new(RwLock::new(event)),
            intake: Arc::new(intake),
            progress: Arc::new(progress),
        }
    }
}
