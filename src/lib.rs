#[macro_use]
extern crate rocket;

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod request_logger;
pub mod routes;
pub mod seed_data;

use crate::auth::AuthState;
use crate::db::CatalogDb;
use crate::request_logger::RequestLogger;
use env_logger::Env;
use rocket::fairing::AdHoc;
use rocket::http::Method;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedOrigins, CorsOptions};
use rocket_db_pools::Database;
use rocket_okapi::{
    openapi_get_routes,
    swagger_ui::{SwaggerUIConfig, make_swagger_ui},
};
use std::sync::Once;

static LOGGER: Once = Once::new();

fn init_logger() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(
            Env::default().default_filter_or("info,rocket::server=warn,rocket::request=warn"),
        )
        .init();
    });
}

pub fn rocket() -> Rocket<Build> {
    init_logger();

    // Configure CORS
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Put, Method::Delete]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Error creating CORS");

    rocket::build()
        .attach(RequestLogger)
        .attach(CatalogDb::init())
        .attach(cors)
        // Run database migrations on startup
        .attach(AdHoc::try_on_ignite("Run Migrations", |rocket| async move {
            match CatalogDb::fetch(&rocket) {
                Some(db) => {
                    let pool = (**db).clone();
                    match db::MIGRATOR.run(&pool).await {
                        Ok(_) => {
                            log::info!("database migrations successful");
                            Ok(rocket)
                        }
                        Err(e) => {
                            log::error!("database migrations failed: {}", e);
                            Err(rocket)
                        }
                    }
                }
                None => {
                    log::error!("database pool not available for migrations");
                    Err(rocket)
                }
            }
        }))
        // Clone the pool into managed state and build the auth stack.
        // A missing signing secret aborts launch here.
        .attach(AdHoc::try_on_ignite(
            "Manage DB Pool and Auth State",
            |rocket| async move {
                match CatalogDb::fetch(&rocket) {
                    Some(db) => {
                        let pool = (**db).clone();
                        match AuthState::from_env(pool.clone()) {
                            Ok(auth_state) => Ok(rocket.manage(pool).manage(auth_state)),
                            Err(err) => {
                                log::error!("auth configuration failed: {}", err);
                                Err(rocket)
                            }
                        }
                    }
                    None => Err(rocket),
                }
            },
        ))
        .register("/", catchers![error::unauthorized, error::fallback])
        .mount(
            "/",
            openapi_get_routes![
                // Health routes
                routes::health::health_check,
                // Auth routes
                auth::routes::signup,
                auth::routes::signin,
                routes::probe::auth_probe,
                // Artist routes
                routes::artists::list_artists,
                routes::artists::get_artist,
                routes::artists::create_artist,
                routes::artists::update_artist,
                routes::artists::delete_artist,
                // Genre routes
                routes::genres::list_genres,
                routes::genres::create_genre,
            ],
        )
        .mount(
            "/docs/swagger/",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
}

#[cfg_attr(not(test), allow(dead_code))]
pub mod test_support {
    use rocket::config::LogLevel;
    use rocket::figment::Figment;
    use rocket::local::asynchronous::Client as AsyncClient;
    use rocket::local::blocking::Client;
    use rocket::{Build, Rocket, Route};
    use sqlx::PgPool;

    use crate::auth::{AuthConfig, AuthState, CredentialStore, JwtService, PasswordService};

    pub use database::{TestDatabase, TestDatabaseError};

    pub const TEST_JWT_SECRET: &str = "catalog-test-signing-secret";

    /// Build a fully wired [`AuthState`] over the given pool with a fixed
    /// test signing secret, bypassing the environment.
    pub fn auth_state(pool: PgPool) -> AuthState {
        let config = AuthConfig {
            jwt_secret: TEST_JWT_SECRET.into(),
        };
        let password_service = PasswordService::new().expect("password service");
        let jwt_service = JwtService::from_config(&config);
        let credential_store = CredentialStore::new(pool);
        AuthState::new(config, password_service, jwt_service, credential_store)
    }

    /// Convenience helpers for seeding catalog tables in tests.
    pub struct TestFixtures<'a> {
        pool: &'a PgPool,
    }

    impl<'a> TestFixtures<'a> {
        /// Create a fixture helper bound to the provided pool.
        pub fn new(pool: &'a PgPool) -> Self {
            Self { pool }
        }

        /// Insert a user row, returning the new user id.
        pub async fn insert_user(
            &self,
            email: &str,
            password_hash: &str,
        ) -> Result<i32, sqlx::Error> {
            sqlx::query_scalar(
                "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
            )
            .bind(email)
            .bind(password_hash)
            .fetch_one(self.pool)
            .await
        }

        /// Insert a genre row, returning the new genre id.
        pub async fn insert_genre(&self, name: &str) -> Result<i32, sqlx::Error> {
            sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(self.pool)
                .await
        }

        /// Insert an artist row, returning the new artist id.
        pub async fn insert_artist(
            &self,
            name: &str,
            first_album: i32,
            on_tour: bool,
            genre_id: i32,
            owner_id: i32,
        ) -> Result<i32, sqlx::Error> {
            sqlx::query_scalar(
                r#"INSERT INTO artists (name, first_album, on_tour, genre_id, owner_id)
                   VALUES ($1, $2, $3, $4, $5)
                   RETURNING id"#,
            )
            .bind(name)
            .bind(first_album)
            .bind(on_tour)
            .bind(genre_id)
            .bind(owner_id)
            .fetch_one(self.pool)
            .await
        }
    }

    pub mod database {
        use log::LevelFilter;
        use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
        use sqlx::{ConnectOptions, PgPool};
        use testcontainers_modules::postgres::Postgres;
        use testcontainers_modules::testcontainers::{
            ContainerAsync, core::error::TestcontainersError, runners::AsyncRunner,
        };
        use thiserror::Error;
        use uuid::Uuid;

        use crate::db::MIGRATOR;

        #[derive(Debug, Error)]
        pub enum TestDatabaseError {
            #[error("database error: {0}")]
            Sqlx(#[from] sqlx::Error),
            #[error("migration error: {0}")]
            Migration(#[from] sqlx::migrate::MigrateError),
            #[error("container error: {0}")]
            Container(#[from] TestcontainersError),
        }

        /// Ephemeral database factory for integration tests: a disposable
        /// Postgres container per instance, a uniquely named database
        /// inside it, migrations applied.
        pub struct TestDatabase {
            pool: PgPool,
            _container: ContainerAsync<Postgres>,
        }

        impl TestDatabase {
            pub async fn new() -> Result<Self, TestDatabaseError> {
                let container = Postgres::default().start().await?;

                let host = container.get_host().await?.to_string();
                let port = container.get_host_port_ipv4(5432).await?;
                let admin_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

                let admin_options: PgConnectOptions =
                    admin_url.parse().map_err(TestDatabaseError::Sqlx)?;
                let admin_options = admin_options.log_statements(LevelFilter::Off);

                let admin_pool = PgPoolOptions::new()
                    .max_connections(1)
                    .connect_with(admin_options.clone())
                    .await?;

                let database_name = format!("catalog_test_{}", Uuid::new_v4().simple());
                let create_sql = format!("CREATE DATABASE \"{}\"", database_name);
                sqlx::query(&create_sql).execute(&admin_pool).await?;
                admin_pool.close().await;

                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect_with(admin_options.database(&database_name))
                    .await?;

                MIGRATOR.run(&pool).await?;

                Ok(Self {
                    pool,
                    _container: container,
                })
            }

            /// Connection pool bound to the ephemeral database. The pool
            /// and the container are both dropped with the struct.
            pub fn pool(&self) -> &PgPool {
                &self.pool
            }

            /// Convenience method returning a clone of the pooled handle.
            pub fn pool_clone(&self) -> PgPool {
                self.pool.clone()
            }
        }
    }

    /// Builder for constructing Rocket instances tailored for integration
    /// tests. Crate catchers are always registered so rejected requests
    /// keep the production error body shape.
    #[derive(Default)]
    pub struct TestRocketBuilder {
        figment: Figment,
        mounts: Vec<(String, Vec<Route>)>,
        pg_pool: Option<PgPool>,
        auth_state: Option<AuthState>,
    }

    impl TestRocketBuilder {
        /// Start a builder with sensible defaults: random port, logging
        /// disabled.
        pub fn new() -> Self {
            let figment = rocket::Config::figment()
                .merge(("port", 0))
                .merge(("log_level", LogLevel::Off))
                .merge(("cli_colors", false));

            Self {
                figment,
                mounts: Vec::new(),
                pg_pool: None,
                auth_state: None,
            }
        }

        /// Mount routes at the API root.
        pub fn mount_routes(mut self, routes: Vec<Route>) -> Self {
            self.mounts.push(("/".to_string(), routes));
            self
        }

        /// Manage a `PgPool` instance for tests that exercise
        /// database-backed routes.
        pub fn manage_pg_pool(mut self, pool: PgPool) -> Self {
            self.pg_pool = Some(pool);
            self
        }

        /// Manage an `AuthState` for tests that exercise auth routes or
        /// guarded handlers.
        pub fn manage_auth_state(mut self, state: AuthState) -> Self {
            self.auth_state = Some(state);
            self
        }

        /// Finish building the Rocket instance.
        pub fn build(self) -> Rocket<Build> {
            let mut rocket = rocket::custom(self.figment)
                .register("/", catchers![crate::error::unauthorized, crate::error::fallback]);

            for (base, routes) in self.mounts {
                rocket = rocket.mount(base, routes);
            }

            if let Some(pool) = self.pg_pool {
                rocket = rocket.manage(pool);
            }

            if let Some(state) = self.auth_state {
                rocket = rocket.manage(state);
            }

            rocket
        }

        /// Convenience helper to produce a blocking local client.
        pub fn blocking_client(self) -> Client {
            Client::tracked(self.build()).expect("valid Rocket instance")
        }

        /// Convenience helper to produce an asynchronous local client.
        pub async fn async_client(self) -> AsyncClient {
            AsyncClient::tracked(self.build())
                .await
                .expect("valid Rocket instance")
        }
    }
}
