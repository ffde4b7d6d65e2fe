use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

/// API shape for a user: the row fields plus the names of attached locations.
#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub age: i32,
    pub locations: Vec<String>,
}

impl UserPayload {
    pub fn new(user: User, locations: Vec<String>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            password: user.password,
            role: user.role,
            age: user.age,
            locations,
        }
    }
}
