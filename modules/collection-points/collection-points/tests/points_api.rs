#![allow(clippy::unwrap_used, clippy::expect_used, clippy::non_ascii_literal)]

//! End-to-end tests of the REST surface against an in-memory database.

use axum::Router;
use axum::body::{Body, to_bytes};
use collection_points::domain::catalog::ITEM_CATALOG;
use collection_points::{CollectionPointsConfig, CollectionPointsModule};
use ecoleta_db::{Db, DbConfig};
use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "ecoleta-test-boundary";
const IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0 not really a jpeg";

struct TestApp {
    module: CollectionPointsModule,
    dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::connect(&DbConfig::in_memory()).await.unwrap();
        let config = CollectionPointsConfig {
            public_base_url: "http://test.local/".to_owned(),
            uploads_dir: dir.path().join("uploads"),
            max_image_size_mb: 1,
        };
        let module = CollectionPointsModule::init(db, config).await.unwrap();
        Self { module, dir }
    }

    fn router(&self) -> Router {
        self.module.router()
    }

    /// Uploaded images, ignoring the bundled item icons.
    fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(self.dir.path().join("uploads"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| !ITEM_CATALOG.iter().any(|entry| entry.image == name.as_str()))
            .collect()
    }

    async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let resp = self
            .router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_form(&self, body: Vec<u8>) -> (StatusCode, String, Value) {
        let req = Request::post("/points")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let resp = self.router().oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned())
            .unwrap_or_default();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, content_type, json)
    }

    async fn register(&self, name: &str, city: &str, uf: &str, items: &str) -> i64 {
        let fields = point_fields(name, city, uf, items);
        let (status, _, body) = self
            .post_form(form_body(&fields, Some(("photo.jpg", IMAGE_BYTES))))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

type Fields<'a> = Vec<(&'a str, &'a str)>;

fn point_fields<'a>(name: &'a str, city: &'a str, uf: &'a str, items: &'a str) -> Fields<'a> {
    vec![
        ("name", name),
        ("email", "contact@acme.com"),
        ("whatsapp", "11999999999"),
        ("number", "10"),
        ("latitude", "-23.5"),
        ("longitude", "-46.6"),
        ("city", city),
        ("uf", uf),
        ("items", items),
    ]
}

fn form_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        let part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        );
        body.extend_from_slice(part.as_bytes());
    }
    if let Some((file_name, bytes)) = image {
        let part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
             filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
        );
        body.extend_from_slice(part.as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn error_fields(problem: &Value) -> Vec<String> {
    problem["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn items_are_listed_with_public_image_urls() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/items").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["title"], "Lâmpadas");
    assert_eq!(
        items[0]["image_url"],
        "http://test.local/uploads/lampadas.svg"
    );
}

#[tokio::test]
async fn item_icons_are_served_from_uploads() {
    let app = TestApp::new().await;

    for entry in &ITEM_CATALOG {
        let (status, body) = app.get(&format!("/uploads/{}", entry.image)).await;
        assert_eq!(status, StatusCode::OK, "{}", entry.image);
        assert_eq!(body, entry.icon_svg.as_bytes());
    }
}

#[tokio::test]
async fn registered_point_can_be_fetched_with_items_and_image() {
    let app = TestApp::new().await;
    let mut fields = point_fields("Acme", "São Paulo", "SP", "1,3");
    // the misspelled longitude field is still accepted
    fields[5] = ("longetude", "-46.6");

    let (status, _, created) = app
        .post_form(form_body(&fields, Some(("my photo.jpg", IMAGE_BYTES))))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let (status, details) = app.get_json(&format!("/points/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let point = &details["point"];
    assert_eq!(point["name"], "Acme");
    assert_eq!(point["email"], "contact@acme.com");
    assert_eq!(point["whatsapp"], "11999999999");
    assert_eq!(point["number"], 10);
    assert_eq!(point["latitude"], -23.5);
    assert_eq!(point["longitude"], -46.6);
    assert_eq!(point["city"], "São Paulo");
    assert_eq!(point["uf"], "SP");

    let image = point["image"].as_str().unwrap();
    assert!(image.ends_with("-my_photo.jpg"), "{image}");
    assert_eq!(
        point["image_url"].as_str().unwrap(),
        format!("http://test.local/uploads/{image}")
    );

    let titles: Vec<_> = details["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Lâmpadas", "Papéis e Papelão"]);

    let (status, bytes) = app.get(&format!("/uploads/{image}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, IMAGE_BYTES);
}

#[tokio::test]
async fn incomplete_form_reports_every_missing_field() {
    let app = TestApp::new().await;
    let fields = vec![("email", "not-an-email"), ("uf", "SP"), ("items", "1")];

    let (status, content_type, problem) = app.post_form(form_body(&fields, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "application/problem+json");
    assert_eq!(problem["code"], "VALIDATION_ERROR");
    let fields = error_fields(&problem);
    for expected in [
        "name", "email", "whatsapp", "number", "latitude", "longitude", "city", "image",
    ] {
        assert!(
            fields.iter().any(|f| f == expected),
            "missing {expected} in {fields:?}"
        );
    }
    assert!(!fields.iter().any(|f| f == "uf"));
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn unknown_item_rolls_back_and_discards_the_image() {
    let app = TestApp::new().await;

    let (status, _, problem) = app
        .post_form(form_body(
            &point_fields("Ghost", "São Paulo", "SP", "1,999"),
            Some(("photo.jpg", IMAGE_BYTES)),
        ))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{problem}");
    assert_eq!(problem["code"], "UNKNOWN_ITEM");

    let (status, problem) = app.get_json("/points/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["status"], 404);
    assert_eq!(problem["instance"], "/points/1");

    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn listing_filters_by_city_state_and_items() {
    let app = TestApp::new().await;
    let first = app.register("First", "São Paulo", "SP", "1,2").await;
    app.register("Batteries only", "São Paulo", "SP", "3").await;
    let second = app.register("Second", "São Paulo", "SP", "2").await;
    app.register("Elsewhere", "Campinas", "SP", "1").await;

    let (status, body) = app
        .get_json("/points?uf=SP&city=S%C3%A3o%20Paulo&items=1,2")
        .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
    let image_url = body[0]["image_url"].as_str().unwrap();
    assert!(image_url.starts_with("http://test.local/uploads/"));
}

#[tokio::test]
async fn listing_without_parameters_is_rejected() {
    let app = TestApp::new().await;

    let (status, problem) = app.get_json("/points?uf=SP").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&problem), vec!["city", "items"]);
}

#[tokio::test]
async fn malformed_point_id_is_a_bad_request() {
    let app = TestApp::new().await;

    let (status, problem) = app.get_json("/points/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["code"], "INVALID_POINT_ID");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let app = TestApp::new().await;
    let big = vec![0_u8; 2 * 1024 * 1024];

    let (status, _, _) = app
        .post_form(form_body(
            &point_fields("Big", "São Paulo", "SP", "1"),
            Some(("big.jpg", &big)),
        ))
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, doc) = app.get_json("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/points/{id}"]["get"].is_object());
    assert!(doc["paths"]["/points"]["post"].is_object());
}

#[tokio::test]
async fn local_client_shares_the_same_storage() {
    let app = TestApp::new().await;
    let id = app.register("Acme", "Recife", "PE", "4").await;
    let client = app.module.client();

    assert_eq!(client.list_items().await.unwrap().len(), 6);

    let details = client.get_point(i32::try_from(id).unwrap()).await.unwrap();
    assert_eq!(details.point.city, "Recife");
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0].id, 4);

    let err = client.get_point(999).await.unwrap_err();
    assert_eq!(
        err,
        collection_points::CollectionPointsError::NotFound { id: 999 }
    );
}
