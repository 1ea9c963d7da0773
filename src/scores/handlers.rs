use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::CurrentUser,
    error::ApiError,
    scores::{
        dto::SubmitScoreRequest,
        repo_types::{LeaderboardRow, Score},
    },
    state::AppState,
};

/// The leaderboard is a fixed top-N; there is no pagination.
const LEADERBOARD_LIMIT: i64 = 10;

pub fn score_routes() -> Router<AppState> {
    Router::new()
        .route("/scores", post(submit_score))
        .route("/leaderboard", get(leaderboard))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.0.id))]
pub async fn submit_score(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<(StatusCode, Json<Score>), ApiError> {
    let Some(value) = payload.score else {
        warn!("score submission without a value");
        return Err(ApiError::MissingScore);
    };

    let score = Score::create(&state.db, user.0.id, value).await?;

    info!(score_id = %score.id, value, "score recorded");
    Ok((StatusCode::CREATED, Json(score)))
}

#[instrument(skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardRow>>, ApiError> {
    let rows = Score::top_totals(&state.db, LEADERBOARD_LIMIT).await?;
    Ok(Json(rows))
}
