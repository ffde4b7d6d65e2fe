use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::UserPayload;
use crate::pagination::paginate;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub age: i32,
    pub locations: Option<String>,
}

// `role` is not an updatable field.
#[derive(Deserialize)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub age: i32,
    pub locations: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let total = db::users::count_all(&state.pool).await?;
    let page = paginate(total, params.page.as_deref(), state.config.page_size);

    let users = db::users::list_page(&state.pool, page.limit, page.offset).await?;

    let mut items = Vec::with_capacity(users.len());
    for user in users {
        let locations = db::users::location_names(&state.pool, user.id).await?;
        items.push(UserPayload::new(user, locations));
    }

    Ok(Json(serde_json::json!({
        "items": items,
        "num_pages": page.num_pages,
        "total": page.total,
    })))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserPayload>, AppError> {
    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let locations = db::users::location_names(&state.pool, user.id).await?;
    Ok(Json(UserPayload::new(user, locations)))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<UserPayload>, AppError> {
    // The user row commits before the location step; there is no enclosing
    // transaction.
    let user = db::users::create(
        &state.pool,
        &req.first_name,
        &req.last_name,
        &req.username,
        &req.password,
        &req.role,
        req.age,
    )
    .await?;

    if let Some(name) = req.locations.as_deref().filter(|n| !n.is_empty()) {
        let location = db::locations::get_or_create(&state.pool, name).await?;
        db::users::attach_location(&state.pool, user.id, location.id).await?;
    }

    let locations = db::users::location_names(&state.pool, user.id).await?;
    Ok(Json(UserPayload::new(user, locations)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<UserPayload>, AppError> {
    let user = db::users::update(
        &state.pool,
        id,
        &req.first_name,
        &req.last_name,
        &req.username,
        &req.password,
        req.age,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("User not found".to_string()),
        _ => AppError::Database(e),
    })?;

    // A supplied name is added to the user's locations, never a replacement,
    // so repeated updates accumulate associations.
    if let Some(name) = req.locations.as_deref().filter(|n| !n.is_empty()) {
        let location = db::locations::get_or_create(&state.pool, name).await?;
        db::users::attach_location(&state.pool, user.id, location.id).await?;
    }

    let locations = db::users::location_names(&state.pool, user.id).await?;
    Ok(Json(UserPayload::new(user, locations)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::users::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
