use ecoleta_errors::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{
    CreatePointForm, CreatePointResponse, ItemDto, PointDetailsDto, PointDto, PointItemDto,
};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Ecoleta API", description = "Recyclable waste collection points"),
    paths(
        handlers::list_items,
        handlers::list_points,
        handlers::get_point,
        handlers::create_point,
    ),
    components(schemas(
        ItemDto,
        PointDto,
        PointItemDto,
        PointDetailsDto,
        CreatePointForm,
        CreatePointResponse,
        Problem,
        ValidationViolation,
    )),
    tags(
        (name = "items", description = "Recyclable item catalog"),
        (name = "points", description = "Collection point registration and lookup")
    )
)]
pub struct ApiDoc;
