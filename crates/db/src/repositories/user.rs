use crate::models::DbUser;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Inserts the user row if it does not exist yet. User identity comes from
/// an external provider; only aggregate counters live here.
pub async fn ensure_user(pool: &Pool<Postgres>, id: &str) -> Result<DbUser> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, total_bookings, created_at)
        VALUES ($1, 0, $2)
        ON CONFLICT (id) DO UPDATE SET id = EXCLUDED.id
        RETURNING id, total_bookings, created_at
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, total_bookings, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn increment_total_bookings(pool: &Pool<Postgres>, id: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET total_bookings = total_bookings + 1
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
