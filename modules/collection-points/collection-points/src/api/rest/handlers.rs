use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Multipart, Path, Query};
use axum::response::IntoResponse;
use ecoleta_errors::{ApiResult, Problem, bad_request, internal_error};
use http::StatusCode;
use tracing::{error, info};

use crate::domain::validation::{validate_filter, validate_point_form};

use super::context::ApiContext;
use super::dto::{
    CreatePointForm, CreatePointResponse, ItemDto, ListPointsQuery, PointDetailsDto, PointDto,
};
use super::error::domain_error_to_problem;
use super::multipart::read_point_form;

const POINTS_PATH: &str = "/points";

/// List the recyclable item catalog
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "Item catalog", body = Vec<ItemDto>),
        (status = 500, description = "Internal error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_items(
    Extension(ctx): Extension<Arc<ApiContext>>,
) -> ApiResult<Json<Vec<ItemDto>>> {
    let items = ctx
        .service
        .list_items()
        .await
        .map_err(|e| domain_error_to_problem(&e, "/items"))?;

    let body = items.into_iter().map(|i| ItemDto::new(i, &ctx));
    Ok(Json(body.collect()))
}

/// Find points in a city that accept at least one of the given items
#[utoipa::path(
    get,
    path = "/points",
    tag = "points",
    params(ListPointsQuery),
    responses(
        (status = 200, description = "Matching points ordered by id", body = Vec<PointDto>),
        (status = 400, description = "Missing or invalid query parameters", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_points(
    Extension(ctx): Extension<Arc<ApiContext>>,
    Query(query): Query<ListPointsQuery>,
) -> ApiResult<Json<Vec<PointDto>>> {
    let filter = validate_filter(
        query.uf.as_deref(),
        query.city.as_deref(),
        query.items.as_deref(),
    )
    .map_err(|e| domain_error_to_problem(&e, POINTS_PATH))?;

    let points = ctx
        .service
        .list_points(&filter)
        .await
        .map_err(|e| domain_error_to_problem(&e, POINTS_PATH))?;

    let body = points.into_iter().map(|p| PointDto::new(p, &ctx));
    Ok(Json(body.collect()))
}

/// Get a point and the items it accepts
#[utoipa::path(
    get,
    path = "/points/{id}",
    tag = "points",
    params(("id" = i32, Path, description = "Point id")),
    responses(
        (status = 200, description = "Point details", body = PointDetailsDto),
        (status = 400, description = "Id is not an integer", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No point with this id", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_point(
    Extension(ctx): Extension<Arc<ApiContext>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<PointDetailsDto>> {
    let instance = format!("{POINTS_PATH}/{raw_id}");
    let id: i32 = raw_id.trim().parse().map_err(|_| {
        bad_request(format!("Point id must be an integer, got '{raw_id}'"))
            .with_code("INVALID_POINT_ID")
            .with_instance(instance.clone())
    })?;

    let details = ctx
        .service
        .get_point(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, &instance))?;

    Ok(Json(PointDetailsDto::new(details, &ctx)))
}

/// Register a new collection point
#[utoipa::path(
    post,
    path = "/points",
    tag = "points",
    request_body(content = CreatePointForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Point registered", body = CreatePointResponse),
        (status = 400, description = "Invalid form", body = Problem, content_type = "application/problem+json"),
        (status = 413, description = "Body exceeds the upload limit", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Unknown item id", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_point(
    Extension(ctx): Extension<Arc<ApiContext>>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let received = read_point_form(&mut multipart).await?;
    let (draft, image) = validate_point_form(&received.fields, received.image)
        .map_err(|e| domain_error_to_problem(&e, POINTS_PATH))?;

    let stored = ctx
        .images
        .store(&image.file_name, &image.bytes)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store uploaded image");
            internal_error("Failed to store the uploaded image")
                .with_code("IMAGE_STORAGE")
                .with_instance(POINTS_PATH)
                .with_current_trace()
        })?;

    let new_point = draft.with_image(stored.clone());
    match ctx.service.create_point(new_point).await {
        Ok(point) => {
            info!(point_id = point.id, image = %stored, "Registration completed");
            Ok((
                StatusCode::CREATED,
                Json(CreatePointResponse {
                    success: true,
                    id: point.id,
                }),
            ))
        }
        Err(e) => {
            ctx.images.discard(&stored).await;
            Err(domain_error_to_problem(&e, POINTS_PATH))
        }
    }
}
