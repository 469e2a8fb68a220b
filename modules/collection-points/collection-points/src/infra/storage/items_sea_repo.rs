use async_trait::async_trait;
use collection_points_sdk::Item;
use ecoleta_db::DbRunner;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::domain::error::DomainError;
use crate::domain::repos::ItemsRepository;

use super::db::db_err;
use super::entity::{item, point_item};

pub struct OrmItemsRepository;

#[async_trait]
impl ItemsRepository for OrmItemsRepository {
    async fn list<C: DbRunner>(&self, runner: &C) -> Result<Vec<Item>, DomainError> {
        let rows = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(runner)
            .await
            .map_err(|e| db_err(&e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_point<C: DbRunner>(
        &self,
        runner: &C,
        point_id: i32,
    ) -> Result<Vec<Item>, DomainError> {
        let rows = item::Entity::find()
            .join(JoinType::InnerJoin, item::Relation::PointItems.def())
            .filter(point_item::Column::PointId.eq(point_id))
            .order_by_asc(point_item::Column::Id)
            .all(runner)
            .await
            .map_err(|e| db_err(&e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
