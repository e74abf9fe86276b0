use common::EventDay;
use common::intake::parse_day;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Success envelope wrapping every response payload.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`.
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
    /// Human-readable note about the performed action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of items in `data`, set on admin listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            total: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Listing with `total` filled in.
    pub fn list(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            total: Some(total),
            ..Self::ok(data)
        }
    }
}

/// Query selecting one participant's records for one day.
#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ParticipantDayQuery {
    /// Participant whose records to return.
    #[param(example = "u1")]
    pub participant_id: Option<String>,
    /// Event day (1-7).
    #[param(example = 1)]
    pub day: Option<i64>,
}

impl ParticipantDayQuery {
    pub fn validate(self) -> Result<(String, EventDay), AppError> {
        let participant_id = self
            .participant_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        let (Some(participant_id), Some(day)) = (participant_id, self.day) else {
            return Err(AppError::Validation(
                "Missing participantId or day parameter".into(),
            ));
        };
        Ok((participant_id, parse_day(day)?))
    }
}

/// Validate a trimmed display name (1-256 Unicode characters).
pub fn validate_name(name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 256 {
        return Err(AppError::Validation("Name must be 1-256 characters".into()));
    }
    Ok(())
}
