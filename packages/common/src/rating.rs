use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::EventDay;
use crate::storage::Keyed;

/// Restaurant ratings are always stars out of five.
pub const RESTAURANT_SCORE_RANGE: ScoreRange = ScoreRange::new(1, 5);

/// Longest accepted comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 2000;

/// Inclusive bounds for an integer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

/// Sub-scores for a single dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishScores {
    #[schema(example = 4)]
    pub taste: u8,
    #[schema(example = 5)]
    pub texture: u8,
    #[schema(example = 4)]
    pub ingredients: u8,
    #[schema(example = 3)]
    pub presentation: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 5)]
    pub bonus: Option<u8>,
}

impl DishScores {
    /// Mean of the present sub-scores.
    pub fn average(&self) -> f64 {
        let mut sum = u32::from(self.taste)
            + u32::from(self.texture)
            + u32::from(self.ingredients)
            + u32::from(self.presentation);
        let mut count = 4;
        if let Some(bonus) = self.bonus {
            sum += u32::from(bonus);
            count += 1;
        }
        f64::from(sum) / f64::from(count)
    }

    /// Compact form used in the admin feed, e.g. `T:4, Tx:5, I:4, P:3, B:5`.
    pub fn summary(&self) -> String {
        let bonus = self
            .bonus
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        format!(
            "T:{}, Tx:{}, I:{}, P:{}, B:{}",
            self.taste, self.texture, self.ingredients, self.presentation, bonus
        )
    }
}

/// A participant's rating of one dish on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishRating {
    #[schema(example = "0192f0c1-5a4e-7c3b-9d2e-8f1a2b3c4d5e")]
    pub id: String,
    #[schema(example = "u1")]
    pub participant_id: String,
    #[schema(example = "d1")]
    pub dish_id: String,
    pub day: EventDay,
    pub scores: DishScores,
    #[schema(example = "Perfectly balanced flavors.")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DishRatingKey {
    pub participant_id: String,
    pub dish_id: String,
    pub day: EventDay,
}

impl Keyed for DishRating {
    type Key = DishRatingKey;

    fn key(&self) -> Self::Key {
        DishRatingKey {
            participant_id: self.participant_id.clone(),
            dish_id: self.dish_id.clone(),
            day: self.day,
        }
    }
}

/// A participant's star rating of the day's restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRating {
    #[schema(example = "0192f0c1-5a4e-7c3b-9d2e-8f1a2b3c4d5e")]
    pub id: String,
    #[schema(example = "u1")]
    pub participant_id: String,
    #[schema(example = "1")]
    pub restaurant_id: String,
    pub day: EventDay,
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: u8,
    #[schema(example = "Friendly service.")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestaurantRatingKey {
    pub participant_id: String,
    pub restaurant_id: String,
    pub day: EventDay,
}

impl Keyed for RestaurantRating {
    type Key = RestaurantRatingKey;

    fn key(&self) -> Self::Key {
        RestaurantRatingKey {
            participant_id: self.participant_id.clone(),
            restaurant_id: self.restaurant_id.clone(),
            day: self.day,
        }
    }
}

/// Unvalidated sub-scores as submitted.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoresCandidate {
    #[schema(example = 4)]
    pub taste: Option<i64>,
    #[schema(example = 5)]
    pub texture: Option<i64>,
    #[schema(example = 4)]
    pub ingredients: Option<i64>,
    #[schema(example = 3)]
    pub presentation: Option<i64>,
    #[schema(example = 5)]
    pub bonus: Option<i64>,
}

/// Unvalidated dish rating submission.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishRatingCandidate {
    #[schema(example = "u1")]
    pub participant_id: Option<String>,
    #[schema(example = "d1")]
    pub dish_id: Option<String>,
    pub scores: Option<ScoresCandidate>,
    pub comment: Option<String>,
    #[schema(example = 1)]
    pub day: Option<i64>,
}

/// Unvalidated restaurant rating submission.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRatingCandidate {
    #[schema(example = "u1")]
    pub participant_id: Option<String>,
    #[schema(example = "1")]
    pub restaurant_id: Option<String>,
    #[schema(example = 4)]
    pub rating: Option<i64>,
    pub comment: Option<String>,
    #[schema(example = 1)]
    pub day: Option<i64>,
}
