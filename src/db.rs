use rocket_db_pools::{Database, sqlx};

#[derive(Database)]
#[database("catalog_db")]
pub struct CatalogDb(sqlx::PgPool);

/// Embedded migrations, applied at ignition and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
