use axum::{Json, extract::State};
use common::progress::DayProgress;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppQuery;
use crate::models::shared::{ApiResponse, ParticipantDayQuery};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/progress",
    tag = "Progress",
    operation_id = "getProgress",
    summary = "A participant's completion for a day",
    description = "Counts the participant's ratings of the dishes scheduled for the day and whether the restaurant was rated. The overall percentage treats the restaurant as one more item: (dishes rated + restaurant rated) / (dishes + 1).",
    params(ParticipantDayQuery),
    responses(
        (status = 200, description = "Progress for the day", body = ApiResponse<DayProgress>),
        (status = 400, description = "Missing or invalid parameter (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn get_progress(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ParticipantDayQuery>,
) -> Result<Json<ApiResponse<DayProgress>>, AppError> {
    let (participant_id, day) = query.validate()?;
    let progress = state.progress.progress(&participant_id, day).await?;
    Ok(Json(ApiResponse::ok(progress)))
}
