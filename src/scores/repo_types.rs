use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A submitted score event. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub created_at: OffsetDateTime,
}

/// One leaderboard entry: display fields joined from the user plus the
/// summed score.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub name: String,
    pub avatar_url: String,
    pub total_score: i64,
}
