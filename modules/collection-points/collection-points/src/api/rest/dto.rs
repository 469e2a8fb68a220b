use collection_points_sdk::{Item, Point, PointDetails};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::context::ApiContext;

/// Catalog item as returned by `GET /items`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

impl ItemDto {
    #[must_use]
    pub fn new(item: Item, ctx: &ApiContext) -> Self {
        Self {
            image_url: ctx.image_url(&item.image),
            id: item.id,
            title: item.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    /// Stored image file name
    pub image: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub number: i32,
}

impl PointDto {
    #[must_use]
    pub fn new(point: Point, ctx: &ApiContext) -> Self {
        Self {
            image_url: ctx.image_url(&point.image),
            id: point.id,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            image: point.image,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
            number: point.number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointItemDto {
    pub id: i32,
    pub title: String,
}

/// Response of `GET /points/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointDetailsDto {
    pub point: PointDto,
    /// Accepted items in the order they were linked
    pub items: Vec<PointItemDto>,
}

impl PointDetailsDto {
    #[must_use]
    pub fn new(details: PointDetails, ctx: &ApiContext) -> Self {
        Self {
            point: PointDto::new(details.point, ctx),
            items: details
                .items
                .into_iter()
                .map(|item| PointItemDto {
                    id: item.id,
                    title: item.title,
                })
                .collect(),
        }
    }
}

/// Query string of `GET /points`. All parameters are required; they are
/// optional here so that missing ones are reported as validation errors.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPointsQuery {
    /// Two-letter state code
    pub uf: Option<String>,
    pub city: Option<String>,
    /// Comma-separated item ids, e.g. `1,3`
    pub items: Option<String>,
}

/// Multipart body of `POST /points`.
#[derive(Debug, ToSchema)]
#[allow(dead_code)] // documents the request shape only
pub struct CreatePointForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub number: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    /// Comma-separated item ids, e.g. `1,3`
    pub items: String,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePointResponse {
    pub success: bool,
    pub id: i32,
}
