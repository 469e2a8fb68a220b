use async_trait::async_trait;
use collection_points_sdk::{Item, NewPoint, Point, PointFilter};
use ecoleta_db::DbRunner;

use crate::domain::error::DomainError;

/// Read access to the item catalog.
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// All items ordered by id.
    async fn list<C: DbRunner>(&self, runner: &C) -> Result<Vec<Item>, DomainError>;

    /// Items linked to `point_id`, in link insertion order.
    async fn list_for_point<C: DbRunner>(
        &self,
        runner: &C,
        point_id: i32,
    ) -> Result<Vec<Item>, DomainError>;
}

/// Persistence of points and their item links.
#[async_trait]
pub trait PointsRepository: Send + Sync {
    async fn get<C: DbRunner>(&self, runner: &C, id: i32) -> Result<Option<Point>, DomainError>;

    /// Distinct points in the filter's city/state linked to any of its items.
    async fn list_filtered<C: DbRunner>(
        &self,
        runner: &C,
        filter: &PointFilter,
    ) -> Result<Vec<Point>, DomainError>;

    /// Insert the point row and return it with its generated id.
    async fn insert<C: DbRunner>(&self, runner: &C, point: &NewPoint)
    -> Result<Point, DomainError>;

    /// Insert one link row per item id.
    ///
    /// Fails with [`DomainError::UnknownItem`] when an id has no catalog row.
    async fn link_items<C: DbRunner>(
        &self,
        runner: &C,
        point_id: i32,
        item_ids: &[i32],
    ) -> Result<(), DomainError>;
}
