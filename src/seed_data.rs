//! Demo catalog rows loaded by the `seed_db` binary and reused in tests.

#[derive(Debug, Clone)]
pub struct ArtistSeed {
    pub name: String,
    pub first_album: i32,
    pub on_tour: bool,
    pub genre: String,
}

pub fn seed_genres() -> Vec<String> {
    vec![
        "electronica".to_string(),
        "indietronica".to_string(),
        "house".to_string(),
        "dance pop".to_string(),
    ]
}

pub fn seed_artists() -> Vec<ArtistSeed> {
    vec![
        ArtistSeed {
            name: "Griz".to_string(),
            first_album: 2011,
            on_tour: false,
            genre: "electronica".to_string(),
        },
        ArtistSeed {
            name: "Odesza".to_string(),
            first_album: 2012,
            on_tour: false,
            genre: "indietronica".to_string(),
        },
        ArtistSeed {
            name: "Disclosure".to_string(),
            first_album: 2013,
            on_tour: false,
            genre: "house".to_string(),
        },
        ArtistSeed {
            name: "Louis the Child".to_string(),
            first_album: 2013,
            on_tour: false,
            genre: "dance pop".to_string(),
        },
    ]
}
