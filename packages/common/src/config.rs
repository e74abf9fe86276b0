use serde::Deserialize;

use crate::rating::ScoreRange;

/// Score bounds for dish ratings.
#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Highest accepted dish sub-score. Default: 5.
    #[serde(default = "default_dish_score_max")]
    pub dish_score_max: u8,
}

fn default_dish_score_max() -> u8 {
    5
}

impl ScoringConfig {
    /// Accepted range for each dish sub-score.
    pub fn dish_range(&self) -> ScoreRange {
        ScoreRange::new(1, self.dish_score_max.max(1))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            dish_score_max: default_dish_score_max(),
        }
    }
}
