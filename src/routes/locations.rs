use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::Location;
use crate::pagination::paginate;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let total = db::locations::count_all(&state.pool).await?;
    let page = paginate(total, params.page.as_deref(), state.config.page_size);

    let locations = db::locations::list_page(&state.pool, page.limit, page.offset).await?;

    Ok(Json(serde_json::json!({
        "items": locations,
        "num_pages": page.num_pages,
        "total": page.total,
    })))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, AppError> {
    let location = db::locations::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;
    Ok(Json(location))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateLocation>,
) -> Result<Json<Location>, AppError> {
    let location = db::locations::create(&state.pool, &req.name, req.lat, req.lng)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A location with this name already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;
    Ok(Json(location))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::locations::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Location not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
