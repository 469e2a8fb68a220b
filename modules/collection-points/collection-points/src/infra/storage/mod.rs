//! Infrastructure storage layer - database persistence.
//!
//! All `SeaORM` specifics live here:
//! - `entity/` - entity definitions (`items`, `points`, `point_items`)
//! - `mapper.rs` - conversions from `SeaORM` models to SDK types
//! - `migrations/` - schema and item catalog seed

pub mod entity;
pub mod mapper;
pub mod migrations;

mod db;
mod items_sea_repo;
mod points_sea_repo;

pub use items_sea_repo::OrmItemsRepository;
pub use points_sea_repo::OrmPointsRepository;
