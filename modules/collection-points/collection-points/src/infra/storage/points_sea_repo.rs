use async_trait::async_trait;
use collection_points_sdk::{NewPoint, Point, PointFilter};
use ecoleta_db::DbRunner;
use sea_orm::{
    ActiveValue, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::domain::error::DomainError;
use crate::domain::repos::PointsRepository;

use super::db::{db_err, link_err};
use super::entity::{point, point_item};

pub struct OrmPointsRepository;

#[async_trait]
impl PointsRepository for OrmPointsRepository {
    async fn get<C: DbRunner>(&self, runner: &C, id: i32) -> Result<Option<Point>, DomainError> {
        let found = point::Entity::find_by_id(id)
            .one(runner)
            .await
            .map_err(|e| db_err(&e))?;

        Ok(found.map(Into::into))
    }

    async fn list_filtered<C: DbRunner>(
        &self,
        runner: &C,
        filter: &PointFilter,
    ) -> Result<Vec<Point>, DomainError> {
        let rows = point::Entity::find()
            .join(JoinType::InnerJoin, point::Relation::PointItems.def())
            .filter(point::Column::Uf.eq(filter.uf.as_str()))
            .filter(point::Column::City.eq(filter.city.as_str()))
            .filter(point_item::Column::ItemId.is_in(filter.items.iter().copied()))
            .distinct()
            .order_by_asc(point::Column::Id)
            .all(runner)
            .await
            .map_err(|e| db_err(&e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert<C: DbRunner>(
        &self,
        runner: &C,
        point: &NewPoint,
    ) -> Result<Point, DomainError> {
        let active_model = point::ActiveModel {
            id: ActiveValue::NotSet,
            image: ActiveValue::Set(point.image.clone()),
            name: ActiveValue::Set(point.name.clone()),
            email: ActiveValue::Set(point.email.clone()),
            whatsapp: ActiveValue::Set(point.whatsapp.clone()),
            latitude: ActiveValue::Set(point.latitude),
            longitude: ActiveValue::Set(point.longitude),
            city: ActiveValue::Set(point.city.clone()),
            uf: ActiveValue::Set(point.uf.clone()),
            number: ActiveValue::Set(point.number),
        };

        let inserted = point::Entity::insert(active_model)
            .exec(runner)
            .await
            .map_err(|e| db_err(&e))?;

        Ok(Point {
            id: inserted.last_insert_id,
            name: point.name.clone(),
            email: point.email.clone(),
            whatsapp: point.whatsapp.clone(),
            image: point.image.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city.clone(),
            uf: point.uf.clone(),
            number: point.number,
        })
    }

    async fn link_items<C: DbRunner>(
        &self,
        runner: &C,
        point_id: i32,
        item_ids: &[i32],
    ) -> Result<(), DomainError> {
        if item_ids.is_empty() {
            return Ok(());
        }

        let links = item_ids.iter().map(|&item_id| point_item::ActiveModel {
            id: ActiveValue::NotSet,
            point_id: ActiveValue::Set(point_id),
            item_id: ActiveValue::Set(item_id),
        });

        point_item::Entity::insert_many(links)
            .exec(runner)
            .await
            .map_err(|e| link_err(&e))?;

        Ok(())
    }
}
