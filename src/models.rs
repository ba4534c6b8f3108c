use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, JsonSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, JsonSchema)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub first_album: Option<i32>,
    pub on_tour: bool,
    pub genre_id: Option<i32>,
    pub owner_id: Option<i32>,
}

/// Listing row joining each artist with its genre name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, JsonSchema)]
pub struct ArtistWithGenre {
    pub id: i32,
    pub name: String,
    pub first_album: Option<i32>,
    pub on_tour: bool,
    pub owner_id: Option<i32>,
    pub genre: Option<String>,
}
