use chrono::{DateTime, Utc};
use common::EventDay;
use common::intake::{missing_fields, parse_day};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which kind of rating an admin feed entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RatingKind {
    #[serde(alias = "campero")]
    Dish,
    Restaurant,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminRatingsQuery {
    /// Only ratings for this event day.
    #[param(example = 1)]
    pub day: Option<i64>,
    /// Only ratings of this kind.
    #[serde(rename = "type")]
    #[param(inline)]
    pub kind: Option<RatingKind>,
}

/// One line of the admin ratings feed.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminRatingEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RatingKind,
    #[schema(example = "3")]
    pub participant_id: String,
    /// Username of the participant, or the raw ID for unknown accounts.
    #[schema(example = "maria")]
    pub participant_name: String,
    #[schema(example = "1")]
    pub item_id: String,
    /// Name of the rated dish or restaurant, or the raw ID if it no longer exists.
    #[schema(example = "Campero Clásico")]
    pub item_name: String,
    /// Formatted score, e.g. `T:4, Tx:5, I:4, P:3, B:5` or `4/5 stars`.
    #[schema(example = "4/5 stars")]
    pub score: String,
    /// Mean dish sub-score, or the restaurant's star rating.
    #[schema(example = 4.2)]
    pub average: f64,
    pub comment: Option<String>,
    pub day: EventDay,
    pub created_at: DateTime<Utc>,
}

/// Request body for promoting or demoting a user.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    #[schema(example = "3")]
    pub user_id: Option<String>,
    #[schema(example = true)]
    pub is_admin: Option<bool>,
}

pub fn validate_update_user_role(req: UpdateUserRoleRequest) -> Result<(String, bool), AppError> {
    let user_id = req
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    match (user_id, req.is_admin) {
        (Some(user_id), Some(is_admin)) => Ok((user_id, is_admin)),
        _ => Err(AppError::Validation(
            "userId and isAdmin (boolean) are required".into(),
        )),
    }
}

/// Request body for moving the event to another day or window.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventStateRequest {
    #[schema(example = 2)]
    pub current_day: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

pub struct ValidEventState {
    pub current_day: EventDay,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

pub fn validate_update_event_state(
    req: &UpdateEventStateRequest,
) -> Result<ValidEventState, AppError> {
    let mut missing = Vec::new();
    if req.current_day.is_none() {
        missing.push("currentDay");
    }
    if req.start_date.is_none() {
        missing.push("startDate");
    }
    if req.end_date.is_none() {
        missing.push("endDate");
    }
    let (Some(current_day), Some(start_date), Some(end_date)) =
        (req.current_day, req.start_date, req.end_date)
    else {
        return Err(missing_fields(&missing).into());
    };

    let current_day = parse_day(current_day)?;
    if start_date >= end_date {
        return Err(AppError::Validation(
            "startDate must be before endDate".into(),
        ));
    }
    Ok(ValidEventState {
        current_day,
        start_date,
        end_date,
    })
}
