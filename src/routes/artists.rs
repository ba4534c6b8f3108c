use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{Artist, ArtistWithGenre};

const ARTIST_COLUMNS: &str = "id, name, first_album, on_tour, genre_id, owner_id";

/// Only a missing row is a 404; pool and connection faults keep their
/// database classification and surface as 500.
fn missing_artist(err: sqlx::Error, id: i32) -> ApiError {
    match err {
        sqlx::Error::RowNotFound => ApiError::NotFound(format!("Artist {} not found", id)),
        other => ApiError::from(other),
    }
}

/// List all artists with their genre name.
#[openapi(tag = "Artists")]
#[get("/artists")]
pub async fn list_artists(
    pool: &State<PgPool>,
) -> Result<Json<Vec<ArtistWithGenre>>, ApiError> {
    let artists: Vec<ArtistWithGenre> = sqlx::query_as(
        r#"SELECT artists.id, artists.name, artists.first_album, artists.on_tour,
                  artists.owner_id, genres.name AS genre
           FROM artists
           LEFT JOIN genres ON genres.id = artists.genre_id
           ORDER BY artists.id ASC"#,
    )
    .fetch_all(pool.inner())
    .await?;

    Ok(Json(artists))
}

/// Get a single artist by id.
#[openapi(tag = "Artists")]
#[get("/artists/<id>")]
pub async fn get_artist(id: i32, pool: &State<PgPool>) -> Result<Json<Artist>, ApiError> {
    let artist: Artist = sqlx::query_as(&format!(
        "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(pool.inner())
    .await
    .map_err(|err| missing_artist(err, id))?;

    Ok(Json(artist))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ArtistUpsert {
    pub name: String,
    pub first_album: Option<i32>,
    #[serde(default)]
    pub on_tour: bool,
    pub genre_id: Option<i32>,
    pub owner_id: Option<i32>,
}

/// Create an artist and return the stored row.
#[openapi(tag = "Artists")]
#[post("/artists", data = "<request>")]
pub async fn create_artist(
    request: Json<ArtistUpsert>,
    pool: &State<PgPool>,
) -> Result<Json<Artist>, ApiError> {
    let artist: Artist = sqlx::query_as(&format!(
        r#"INSERT INTO artists (name, first_album, on_tour, genre_id, owner_id)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING {ARTIST_COLUMNS}"#
    ))
    .bind(&request.name)
    .bind(request.first_album)
    .bind(request.on_tour)
    .bind(request.genre_id)
    .bind(request.owner_id)
    .fetch_one(pool.inner())
    .await?;

    Ok(Json(artist))
}

/// Replace an artist row and return the updated version.
#[openapi(tag = "Artists")]
#[put("/artists/<id>", data = "<request>")]
pub async fn update_artist(
    id: i32,
    request: Json<ArtistUpsert>,
    pool: &State<PgPool>,
) -> Result<Json<Artist>, ApiError> {
    let artist: Artist = sqlx::query_as(&format!(
        r#"UPDATE artists
           SET name = $1, first_album = $2, on_tour = $3, genre_id = $4, owner_id = $5
           WHERE id = $6
           RETURNING {ARTIST_COLUMNS}"#
    ))
    .bind(&request.name)
    .bind(request.first_album)
    .bind(request.on_tour)
    .bind(request.genre_id)
    .bind(request.owner_id)
    .bind(id)
    .fetch_one(pool.inner())
    .await
    .map_err(|err| missing_artist(err, id))?;

    Ok(Json(artist))
}

/// Delete an artist and return the removed row.
#[openapi(tag = "Artists")]
#[delete("/artists/<id>")]
pub async fn delete_artist(id: i32, pool: &State<PgPool>) -> Result<Json<Artist>, ApiError> {
    let artist: Artist = sqlx::query_as(&format!(
        "DELETE FROM artists WHERE id = $1 RETURNING {ARTIST_COLUMNS}"
    ))
    .bind(id)
    .fetch_one(pool.inner())
    .await
    .map_err(|err| missing_artist(err, id))?;

    Ok(Json(artist))
}
