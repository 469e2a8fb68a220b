//! Local client implementing the `CollectionPointsApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use collection_points_sdk::{
    CollectionPointsApi, CollectionPointsError, Item, NewPoint, Point, PointDetails, PointFilter,
};

use crate::module::ConcreteService;

/// Delegates straight to the domain service.
pub struct CollectionPointsLocalClient {
    service: Arc<ConcreteService>,
}

impl CollectionPointsLocalClient {
    #[must_use]
    pub fn new(service: Arc<ConcreteService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CollectionPointsApi for CollectionPointsLocalClient {
    async fn list_items(&self) -> Result<Vec<Item>, CollectionPointsError> {
        self.service.list_items().await.map_err(Into::into)
    }

    async fn get_point(&self, id: i32) -> Result<PointDetails, CollectionPointsError> {
        self.service.get_point(id).await.map_err(Into::into)
    }

    async fn list_points(&self, filter: PointFilter) -> Result<Vec<Point>, CollectionPointsError> {
        self.service.list_points(&filter).await.map_err(Into::into)
    }

    async fn create_point(&self, new_point: NewPoint) -> Result<Point, CollectionPointsError> {
        self.service
            .create_point(new_point)
            .await
            .map_err(Into::into)
    }
}
