use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::Genre;

/// List all genres.
#[openapi(tag = "Genres")]
#[get("/genres")]
pub async fn list_genres(pool: &State<PgPool>) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres: Vec<Genre> = sqlx::query_as("SELECT id, name FROM genres ORDER BY id ASC")
        .fetch_all(pool.inner())
        .await?;

    Ok(Json(genres))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NewGenre {
    pub name: String,
}

/// Create a genre and return the stored row.
#[openapi(tag = "Genres")]
#[post("/genres", data = "<request>")]
pub async fn create_genre(
    request: Json<NewGenre>,
    pool: &State<PgPool>,
) -> Result<Json<Genre>, ApiError> {
    let genre: Genre =
        sqlx::query_as("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(&request.name)
            .fetch_one(pool.inner())
            .await?;

    Ok(Json(genre))
}
