use std::sync::Arc;

use collection_points_sdk::{Item, NewPoint, Point, PointDetails, PointFilter};
use ecoleta_db::Db;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::{ItemsRepository, PointsRepository};

pub struct Service<P: PointsRepository, I: ItemsRepository> {
    db: Arc<Db>,
    points: Arc<P>,
    items: Arc<I>,
}

impl<P: PointsRepository + 'static, I: ItemsRepository> Service<P, I> {
    pub fn new(db: Arc<Db>, points: Arc<P>, items: Arc<I>) -> Self {
        Self { db, points, items }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.list(self.db.conn()).await?;
        debug!("Listed {} catalog items", items.len());
        Ok(items)
    }

    #[instrument(skip(self), fields(point_id = id))]
    pub async fn get_point(&self, id: i32) -> Result<PointDetails, DomainError> {
        let conn = self.db.conn();

        let point = self
            .points
            .get(conn, id)
            .await?
            .ok_or(DomainError::NotFound { id })?;
        let items = self.items.list_for_point(conn, id).await?;

        Ok(PointDetails { point, items })
    }

    #[instrument(skip(self, filter), fields(uf = %filter.uf, city = %filter.city))]
    pub async fn list_points(&self, filter: &PointFilter) -> Result<Vec<Point>, DomainError> {
        if filter.items.is_empty() {
            return Err(DomainError::validation(
                "items",
                "at least one item id is required",
            ));
        }

        let points = self.points.list_filtered(self.db.conn(), filter).await?;
        debug!("Found {} matching points", points.len());
        Ok(points)
    }

    /// Registration transaction: the point row and all of its item links
    /// commit together or not at all.
    #[instrument(skip(self, new_point), fields(name = %new_point.name, items = new_point.items.len()))]
    pub async fn create_point(&self, new_point: NewPoint) -> Result<Point, DomainError> {
        if new_point.items.is_empty() {
            return Err(DomainError::validation(
                "items",
                "at least one item id is required",
            ));
        }

        let repo = Arc::clone(&self.points);
        let point = self
            .db
            .in_transaction(move |tx| {
                Box::pin(async move {
                    let point = repo.insert(tx, &new_point).await?;
                    repo.link_items(tx, point.id, &new_point.items).await?;
                    Ok::<_, DomainError>(point)
                })
            })
            .await
            .map_err(|e| e.into_domain(DomainError::from))?;

        info!(point_id = point.id, "Collection point registered");
        Ok(point)
    }
}
