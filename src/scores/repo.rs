use crate::scores::repo_types::{LeaderboardRow, Score};
use sqlx::PgPool;
use uuid::Uuid;

impl Score {
    /// Record a score event for a user. The FK checks user existence at
    /// write time; rows are never touched again after this.
    pub async fn create(db: &PgPool, user_id: Uuid, score: i32) -> anyhow::Result<Score> {
        let row = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (user_id, score)
            VALUES ($1, $2)
            RETURNING id, user_id, score, created_at
            "#,
        )
        .bind(user_id)
        .bind(score)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Per-user score totals, highest first, at most `limit` rows.
    /// Users with no score events never appear; the order of equal totals is
    /// whatever the database yields.
    pub async fn top_totals(db: &PgPool, limit: i64) -> anyhow::Result<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT u.name, u.avatar_url, SUM(s.score)::BIGINT AS total_score
            FROM scores s
            JOIN users u ON u.id = s.user_id
            GROUP BY u.id, u.name, u.avatar_url
            ORDER BY total_score DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
