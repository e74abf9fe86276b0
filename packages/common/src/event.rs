use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::EventDay;

/// The competition-wide state: which day is live and when the event runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventState {
    pub current_day: EventDay,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventState {
    pub fn new(current_day: EventDay, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            current_day,
            start_date,
            end_date,
            updated_at: Utc::now(),
        }
    }

    /// A week-long event starting now, on day one.
    pub fn starting_now() -> Self {
        let start = Utc::now();
        Self::new(EventDay::FIRST, start, start + chrono::Duration::days(7))
    }
}
