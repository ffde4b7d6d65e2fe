use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

pub async fn create(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    username: &str,
    password: &str,
    role: &str,
    age: i32,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (first_name, last_name, username, password, role, age)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(username)
    .bind(password)
    .bind(role)
    .bind(age)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_page(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username ASC LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Full-replacement update of every mutable field. `role` is not mutable.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    username: &str,
    password: &str,
    age: i32,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET first_name = $2, last_name = $3, username = $4, password = $5, age = $6
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(username)
    .bind(password)
    .bind(age)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Idempotent: attaching an already-attached location is a no-op.
pub async fn attach_location(
    pool: &PgPool,
    user_id: Uuid,
    location_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_locations (user_id, location_id) VALUES ($1, $2)
         ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(location_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn location_names(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT l.name FROM locations l
         JOIN user_locations ul ON ul.location_id = l.id
         WHERE ul.user_id = $1 ORDER BY l.name ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
