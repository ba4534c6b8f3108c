use std::collections::HashMap;
use std::io::{self, Write};

use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use catalog_api::auth::passwords::PasswordService;
use catalog_api::db::MIGRATOR;
use catalog_api::seed_data;

#[derive(Parser, Debug)]
#[command(name = "seed_db", about = "Load demo catalog data into the database")]
struct Args {
    /// Apply pending migrations before seeding.
    #[arg(long)]
    migrate: bool,

    /// Email for the demo account that owns the seeded artists.
    #[arg(long, default_value = "jon@user.com")]
    email: String,

    /// Plaintext password for the demo account.
    #[arg(long, default_value = "1234")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let email = args.email.trim().to_lowercase();

    if !email.contains('@') {
        writeln!(io::stderr(), "error: email must contain '@'")?;
        std::process::exit(1);
    }

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    if args.migrate {
        MIGRATOR.run(&pool).await?;
        log::info!("migrations applied");
    }

    let existing =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&pool)
            .await?;

    if existing > 0 {
        writeln!(
            io::stderr(),
            "error: a user with email '{email}' already exists."
        )?;
        std::process::exit(1);
    }

    let password_service = PasswordService::new()?;
    let password_hash = password_service.hash_password(&args.password)?;

    let mut tx = pool.begin().await?;

    let owner_id: i32 = sqlx::query_scalar(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await?;

    let mut genre_ids: HashMap<String, i32> = HashMap::new();
    for name in seed_data::seed_genres() {
        let id: i32 = sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
            .bind(&name)
            .fetch_one(&mut *tx)
            .await?;
        genre_ids.insert(name, id);
    }

    for artist in seed_data::seed_artists() {
        let genre_id = genre_ids.get(&artist.genre).copied();
        sqlx::query(
            r#"INSERT INTO artists (name, first_album, on_tour, genre_id, owner_id)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&artist.name)
        .bind(artist.first_album)
        .bind(artist.on_tour)
        .bind(genre_id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    println!(
        "seed data load complete: demo user '{email}' (id {owner_id}), {} genres, {} artists",
        genre_ids.len(),
        seed_data::seed_artists().len()
    );
    Ok(())
}
