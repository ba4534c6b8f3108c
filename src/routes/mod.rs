//! HTTP route handlers grouped by resource domain.
//!
//! Each submodule corresponds to a logical area of the API and exposes
//! typed Rocket handlers annotated with `#[openapi]` so `rocket_okapi`
//! can derive an OpenAPI document automatically. Auth endpoints live in
//! `crate::auth::routes` next to the subsystem they orchestrate.

pub mod artists;
pub mod genres;
pub mod health;
pub mod probe;
