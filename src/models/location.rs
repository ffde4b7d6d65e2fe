use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Coordinates are nullable: rows minted by name-only get-or-create carry none.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(skip_serializing)]
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}
