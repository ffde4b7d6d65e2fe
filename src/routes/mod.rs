pub mod locations;
pub mod users;

use axum::Router;
use axum::routing::{delete, get, patch, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Users
        .route("/users/", get(users::list))
        .route("/users/create/", post(users::create))
        .route("/users/{id}/", get(users::get))
        .route("/users/{id}/update/", patch(users::update))
        .route("/users/{id}/delete/", delete(users::delete))
        // Locations
        .route("/locations/", get(locations::list))
        .route("/locations/create/", post(locations::create))
        .route("/locations/{id}/", get(locations::get))
        .route("/locations/{id}/delete/", delete(locations::delete))
}
