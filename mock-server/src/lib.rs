//! In-memory movie backend used by the client's integration tests.
//!
//! Routes live under `/api`. `PUT /api/movies/{id}` takes no body and flips
//! the watched flag. When built with [`app_requiring_bearer`], every route
//! answers 401 unless an `Authorization: Bearer ...` header is present; the
//! token itself is not inspected.

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub watched: bool,
}

#[derive(Deserialize)]
pub struct NewMovie {
    pub title: String,
}

/// Insertion-ordered so listings come back in the order movies were added.
pub type Db = Arc<RwLock<Vec<Movie>>>;

pub fn app() -> Router {
    Router::new().nest("/api", movie_routes())
}

pub fn app_requiring_bearer() -> Router {
    Router::new().nest(
        "/api",
        movie_routes().layer(middleware::from_fn(require_bearer)),
    )
}

fn movie_routes() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/movies", get(list_movies).post(add_movie))
        .route("/movies/{id}", put(toggle_watched).delete(delete_movie))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_requiring_bearer(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_requiring_bearer()).await
}

async fn require_bearer(request: Request, next: Next) -> Result<Response, StatusCode> {
    let has_bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer ") && v.len() > "Bearer ".len());
    if !has_bearer {
        debug!("rejecting {} without bearer token", request.uri());
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    Json(db.read().await.clone())
}

async fn add_movie(
    State(db): State<Db>,
    Json(input): Json<NewMovie>,
) -> (StatusCode, Json<Movie>) {
    let movie = Movie {
        id: Uuid::new_v4(),
        title: input.title,
        watched: false,
    };
    db.write().await.push(movie.clone());
    (StatusCode::CREATED, Json(movie))
}

async fn toggle_watched(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Movie>, StatusCode> {
    let mut movies = db.write().await;
    let movie = movies
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    movie.watched = !movie.watched;
    Ok(Json(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut movies = db.write().await;
    let index = movies
        .iter()
        .position(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    movies.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
