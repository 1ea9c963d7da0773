use crate::auth::repo_types::{NewUser, PublicUser, User};
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by email, credential column included (login needs it).
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, age, class, email, password_hash, avatar_url, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user. The email unique index is the write-time guarantee;
    /// callers pre-check for a friendlier error.
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, age, class, email, password_hash, avatar_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, age, class, email, password_hash, avatar_url, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.age)
        .bind(new.class)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.avatar_url)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

impl PublicUser {
    /// Find a user by id. The password hash is never selected here.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<PublicUser>> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, age, class, email, avatar_url, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
