//! Rating submission: validation, duplicate prevention and recording.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::day::EventDay;
use crate::rating::{
    DishRating, DishRatingCandidate, DishRatingKey, DishScores, MAX_COMMENT_CHARS,
    RESTAURANT_SCORE_RANGE, RestaurantRating, RestaurantRatingCandidate, RestaurantRatingKey,
    ScoreRange, ScoresCandidate,
};
use crate::storage::{RecordStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// A required field is missing or a value is out of range.
    #[error("{0}")]
    Validation(String),
    /// The participant already rated this target on this day.
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Storage(StorageError),
}

const DUPLICATE_DISH: &str = "You have already rated this dish today";
const DUPLICATE_RESTAURANT: &str = "You have already rated this restaurant today";

/// Accepts rating submissions and keeps at most one rating per
/// participant, target and day.
pub struct RatingIntake {
    dish_ratings: Arc<dyn RecordStore<DishRating>>,
    restaurant_ratings: Arc<dyn RecordStore<RestaurantRating>>,
    scoring: ScoringConfig,
}

impl RatingIntake {
    pub fn new(
        dish_ratings: Arc<dyn RecordStore<DishRating>>,
        restaurant_ratings: Arc<dyn RecordStore<RestaurantRating>>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            dish_ratings,
            restaurant_ratings,
            scoring,
        }
    }

    /// Validate and record a dish rating.
    pub async fn submit_dish(
        &self,
        candidate: DishRatingCandidate,
    ) -> Result<DishRating, IntakeError> {
        let mut missing = Vec::new();
        let participant_id = required_text(candidate.participant_id, "participantId", &mut missing);
        let dish_id = required_text(candidate.dish_id, "dishId", &mut missing);
        if candidate.scores.is_none() {
            missing.push("scores");
        }
        if candidate.day.is_none() {
            missing.push("day");
        }
        let (Some(participant_id), Some(dish_id), Some(scores), Some(day)) =
            (participant_id, dish_id, candidate.scores, candidate.day)
        else {
            return Err(missing_fields(&missing));
        };

        let day = parse_day(day)?;
        let scores = validate_scores(scores, self.scoring.dish_range())?;
        let comment = normalize_comment(candidate.comment)?;

        let key = DishRatingKey {
            participant_id,
            dish_id,
            day,
        };
        if self.dish_ratings.find(&key).await.map_err(IntakeError::Storage)?.is_some() {
            debug!(participant = %key.participant_id, dish = %key.dish_id, %day, "Duplicate dish rating");
            return Err(IntakeError::Conflict(DUPLICATE_DISH.into()));
        }

        let rating = DishRating {
            id: Uuid::now_v7().to_string(),
            participant_id: key.participant_id,
            dish_id: key.dish_id,
            day,
            scores,
            comment,
            created_at: Utc::now(),
        };
        self.dish_ratings
            .insert(rating)
            .await
            .map_err(|e| conflict_or_storage(e, DUPLICATE_DISH))
    }

    /// Validate and record a restaurant rating.
    pub async fn submit_restaurant(
        &self,
        candidate: RestaurantRatingCandidate,
    ) -> Result<RestaurantRating, IntakeError> {
        let mut missing = Vec::new();
        let participant_id = required_text(candidate.participant_id, "participantId", &mut missing);
        let restaurant_id = required_text(candidate.restaurant_id, "restaurantId", &mut missing);
        if candidate.rating.is_none() {
            missing.push("rating");
        }
        if candidate.day.is_none() {
            missing.push("day");
        }
        let (Some(participant_id), Some(restaurant_id), Some(rating), Some(day)) =
            (participant_id, restaurant_id, candidate.rating, candidate.day)
        else {
            return Err(missing_fields(&missing));
        };

        let day = parse_day(day)?;
        let rating = score(rating, "rating", RESTAURANT_SCORE_RANGE)?;
        let comment = normalize_comment(candidate.comment)?;

        let key = RestaurantRatingKey {
            participant_id,
            restaurant_id,
            day,
        };
        if self
            .restaurant_ratings
            .find(&key)
            .await
            .map_err(IntakeError::Storage)?
            .is_some()
        {
            debug!(participant = %key.participant_id, restaurant = %key.restaurant_id, %day, "Duplicate restaurant rating");
            return Err(IntakeError::Conflict(DUPLICATE_RESTAURANT.into()));
        }

        let rating = RestaurantRating {
            id: Uuid::now_v7().to_string(),
            participant_id: key.participant_id,
            restaurant_id: key.restaurant_id,
            day,
            rating,
            comment,
            created_at: Utc::now(),
        };
        self.restaurant_ratings
            .insert(rating)
            .await
            .map_err(|e| conflict_or_storage(e, DUPLICATE_RESTAURANT))
    }

    /// A participant's dish ratings for one day, oldest first.
    pub async fn dish_ratings_for(
        &self,
        participant_id: &str,
        day: EventDay,
    ) -> Result<Vec<DishRating>, StorageError> {
        let mut ratings = self
            .dish_ratings
            .list_by(&|r: &DishRating| r.participant_id == participant_id && r.day == day)
            .await?;
        ratings.sort_by_key(|r| r.created_at);
        Ok(ratings)
    }

    /// A participant's restaurant ratings for one day, oldest first.
    pub async fn restaurant_ratings_for(
        &self,
        participant_id: &str,
        day: EventDay,
    ) -> Result<Vec<RestaurantRating>, StorageError> {
        let mut ratings = self
            .restaurant_ratings
            .list_by(&|r: &RestaurantRating| r.participant_id == participant_id && r.day == day)
            .await?;
        ratings.sort_by_key(|r| r.created_at);
        Ok(ratings)
    }
}

fn required_text(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    if value.is_none() {
        missing.push(name);
    }
    value
}

/// Standard message for absent required fields.
pub fn missing_fields(missing: &[&str]) -> IntakeError {
    IntakeError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

pub fn parse_day(day: i64) -> Result<EventDay, IntakeError> {
    EventDay::new(day).map_err(|e| IntakeError::Validation(e.to_string()))
}

fn score(value: i64, name: &str, range: ScoreRange) -> Result<u8, IntakeError> {
    if range.contains(value) {
        Ok(value as u8)
    } else {
        Err(IntakeError::Validation(format!(
            "{name} must be between {} and {}",
            range.min, range.max
        )))
    }
}

fn validate_scores(scores: ScoresCandidate, range: ScoreRange) -> Result<DishScores, IntakeError> {
    let (Some(taste), Some(texture), Some(ingredients), Some(presentation)) = (
        scores.taste,
        scores.texture,
        scores.ingredients,
        scores.presentation,
    ) else {
        return Err(IntakeError::Validation(
            "Missing required score fields: taste, texture, ingredients, presentation".into(),
        ));
    };

    Ok(DishScores {
        taste: score(taste, "taste", range)?,
        texture: score(texture, "texture", range)?,
        ingredients: score(ingredients, "ingredients", range)?,
        presentation: score(presentation, "presentation", range)?,
        bonus: scores
            .bonus
            .map(|bonus| score(bonus, "bonus", range))
            .transpose()?,
    })
}

/// Trim a comment; blank becomes `None`.
pub fn normalize_comment(comment: Option<String>) -> Result<Option<String>, IntakeError> {
    let comment = comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if let Some(ref c) = comment
        && c.chars().count() > MAX_COMMENT_CHARS
    {
        return Err(IntakeError::Validation(format!(
            "Comment must be at most {MAX_COMMENT_CHARS} characters"
        )));
    }
    Ok(comment)
}

fn conflict_or_storage(err: StorageError, message: &str) -> IntakeError {
    match err {
        StorageError::Duplicate(_) => IntakeError::Conflict(message.to_string()),
        other => IntakeError::Storage(other),
    }
}
