use chrono::{DateTime, Utc};
use common::EventDay;
use common::catalog::Coordinates;
use common::intake::{missing_fields, parse_day};
use serde::Deserialize;

use super::shared::validate_name;
use crate::error::AppError;

const MAX_DESCRIPTION_CHARS: usize = 10_000;

/// Request body for scheduling a day's restaurant.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[schema(example = "El Campero Dorado")]
    pub name: Option<String>,
    #[schema(example = "A traditional Venezuelan restaurant.")]
    pub description: Option<String>,
    /// Defaults to a placeholder image.
    pub image_url: Option<String>,
    pub meeting_time: Option<DateTime<Utc>>,
    #[schema(example = 2)]
    pub day_number: Option<i64>,
    #[schema(example = 10.4806)]
    pub latitude: Option<f64>,
    #[schema(example = -66.9036)]
    pub longitude: Option<f64>,
}

/// Fields of a restaurant request that passed validation.
pub struct ValidRestaurant {
    pub name: String,
    pub description: String,
    pub meeting_time: DateTime<Utc>,
    pub day: EventDay,
    pub coordinates: Option<Coordinates>,
    pub image_url: Option<String>,
}

pub fn validate_create_restaurant(
    req: CreateRestaurantRequest,
) -> Result<ValidRestaurant, AppError> {
    let name = non_blank(req.name);
    let description = non_blank(req.description);
    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if description.is_none() {
        missing.push("description");
    }
    if req.meeting_time.is_none() {
        missing.push("meetingTime");
    }
    if req.day_number.is_none() {
        missing.push("dayNumber");
    }
    let (Some(name), Some(description), Some(meeting_time), Some(day)) =
        (name, description, req.meeting_time, req.day_number)
    else {
        return Err(missing_fields(&missing).into());
    };

    validate_name(&name)?;
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    let day = parse_day(day)?;

    let coordinates = match (req.latitude, req.longitude) {
        (None, None) => None,
        (Some(latitude), Some(longitude)) => {
            let coordinates = Coordinates {
                latitude,
                longitude,
            };
            if !coordinates.is_valid() {
                return Err(AppError::Validation(
                    "latitude must be within -90..90 and longitude within -180..180".into(),
                ));
            }
            Some(coordinates)
        }
        _ => {
            return Err(AppError::Validation(
                "latitude and longitude must be given together".into(),
            ));
        }
    };

    Ok(ValidRestaurant {
        name,
        description,
        meeting_time,
        day,
        coordinates,
        image_url: req.image_url,
    })
}

/// Request body for adding a dish to a day.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    #[schema(example = "Campero Picante")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["Spicy", "Hot Sauce"]))]
    pub tags: Vec<String>,
    /// Defaults to a placeholder image.
    pub image_url: Option<String>,
    #[schema(example = "1")]
    pub restaurant_id: Option<String>,
    #[schema(example = 1)]
    pub day_number: Option<i64>,
}

pub struct ValidDish {
    pub name: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub restaurant_id: String,
    pub day: EventDay,
}

pub fn validate_create_dish(req: CreateDishRequest) -> Result<ValidDish, AppError> {
    let name = non_blank(req.name);
    let restaurant_id = non_blank(req.restaurant_id);
    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if restaurant_id.is_none() {
        missing.push("restaurantId");
    }
    if req.day_number.is_none() {
        missing.push("dayNumber");
    }
    let (Some(name), Some(restaurant_id), Some(day)) = (name, restaurant_id, req.day_number)
    else {
        return Err(missing_fields(&missing).into());
    };

    validate_name(&name)?;
    if req.tags.len() > 20 {
        return Err(AppError::Validation("Too many tags: max 20".into()));
    }

    Ok(ValidDish {
        name,
        tags: req.tags,
        image_url: req.image_url,
        restaurant_id,
        day: parse_day(day)?,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
