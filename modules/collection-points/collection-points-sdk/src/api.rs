use async_trait::async_trait;

use crate::error::CollectionPointsError;
use crate::models::{Item, NewPoint, Point, PointDetails, PointFilter};

/// Operations the presentation surfaces (web form, mobile screens) rely on.
#[async_trait]
pub trait CollectionPointsApi: Send + Sync {
    /// Full item catalog, ordered by id.
    async fn list_items(&self) -> Result<Vec<Item>, CollectionPointsError>;

    async fn get_point(&self, id: i32) -> Result<PointDetails, CollectionPointsError>;

    async fn list_points(&self, filter: PointFilter) -> Result<Vec<Point>, CollectionPointsError>;

    /// Register a point and its item links atomically.
    async fn create_point(&self, point: NewPoint) -> Result<Point, CollectionPointsError>;
}
