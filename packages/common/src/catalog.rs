use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::EventDay;
use crate::storage::Keyed;

pub const DISH_PLACEHOLDER_IMAGE: &str = "/images/dish-placeholder.jpg";
pub const RESTAURANT_PLACEHOLDER_IMAGE: &str = "/images/restaurant-placeholder.jpg";

/// A competition dish served by a restaurant on one event day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Campero Clásico")]
    pub name: String,
    #[schema(example = json!(["Traditional", "Popular"]))]
    pub tags: Vec<String>,
    #[schema(example = "/images/campero-clasico.jpg")]
    pub image_url: String,
    #[schema(example = "1")]
    pub restaurant_id: String,
    pub day_number: EventDay,
    pub created_at: DateTime<Utc>,
}

impl Keyed for Dish {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}

/// Geographic position of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Coordinates {
    #[schema(example = 10.4806)]
    pub latitude: f64,
    #[schema(example = -66.9036)]
    pub longitude: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The restaurant featured on one event day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "El Campero Dorado")]
    pub name: String,
    pub description: String,
    #[schema(example = "/images/restaurant-placeholder.jpg")]
    pub image_url: String,
    pub meeting_time: DateTime<Utc>,
    pub day_number: EventDay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
}

/// Restaurants are unique per day.
impl Keyed for Restaurant {
    type Key = EventDay;

    fn key(&self) -> Self::Key {
        self.day_number
    }
}

/// Trim tags and drop the empty ones.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Use `fallback` when the image reference is missing or blank.
pub fn image_or(image_url: Option<String>, fallback: &str) -> String {
    image_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
