use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, leaderboard::LeaderboardDto},
    server::{
        error::AppError,
        middleware::extract::AppQuery,
        model::leaderboard::LeaderboardPeriod,
        service::gamification::leaderboard::LeaderboardService,
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardParams {
    /// `weekly`, `monthly` or `all` (default)
    pub period: Option<String>,
}

/// Top visitors by XP earned in the period.
///
/// Served from a short-lived cache that the maintenance job also refreshes.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardDto),
        (status = 400, description = "Unknown period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let period = match params.period.as_deref() {
        None => LeaderboardPeriod::All,
        Some(value) => LeaderboardPeriod::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!("Khoảng thời gian không hợp lệ: {}", value))
        })?,
    };

    let leaderboard = LeaderboardService::new(&state.db)
        .get(period, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(leaderboard.into_dto())))
}
