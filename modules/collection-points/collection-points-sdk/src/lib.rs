//! Collection Points SDK
//!
//! Transport-agnostic contract of the collection-points module: the
//! [`CollectionPointsApi`] trait, its models and errors, plus the helpers
//! clients use to build requests (item id lists, item selection state).

pub mod api;
pub mod error;
pub mod item_ids;
pub mod models;
pub mod selection;

pub use api::CollectionPointsApi;
pub use error::CollectionPointsError;
pub use item_ids::{ItemIdsError, format_item_ids, parse_item_ids};
pub use models::{Item, NewPoint, Point, PointDetails, PointFilter};
pub use selection::ItemSelection;
