//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;
use tower_http::trace::TraceLayer;

use business_card_manager::infrastructure::driven_adapters::config::AppConfig;
use business_card_manager::infrastructure::driven_adapters::{database, ImagePhotoEncoder, PostgresBusinessCardRepository};
use business_card_manager::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Multipart boundary used by every form built in tests
pub const BOUNDARY: &str = "----business-card-test-boundary";

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = create_test_config(&format!("postgres://postgres:postgres@{host}:{port}/postgres"));

        // Create connection pool and run migrations
        let pool = database::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(PostgresBusinessCardRepository::new(pool.clone()));
        let photo_encoder = Arc::new(ImagePhotoEncoder::new(config.photo.clone()));
        let app_state = AppState::new(Arc::new(config), repository, photo_encoder);

        let router = api_rest::router(app_state).layer(TraceLayer::new_for_http());

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Clear all data from the database
    #[allow(dead_code)]
    pub async fn clear_database(&self) {
        sqlx::query("TRUNCATE TABLE business_cards RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .expect("Failed to truncate business_cards table");
    }

    /// Send a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond")
    }

    /// GET a path
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST a multipart form
    pub async fn post_form(&self, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }

    /// DELETE with a JSON body
    pub async fn delete_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Add a card through the API, asserting success
    #[allow(dead_code)]
    pub async fn add_card(&self, card: &CardForm<'_>) {
        let response = self
            .post_form("/api/BusinessCard/AddBusinessCard", &card.parts())
            .await;
        assert_eq!(response.status(), 200);
        let result: ResultResponse = json_body(response).await;
        assert!(result.succeeded, "add failed: {:?}", result.message);
    }

    /// Count stored rows
    #[allow(dead_code)]
    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM business_cards")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count business cards")
    }
}

/// Create a test configuration
fn create_test_config(database_url: &str) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0
max_upload_bytes = 5242880

[database]
url = "{database_url}"
max_connections = 5
min_connections = 1

[photo]
resize = true
max_width = 300
max_height = 300
jpeg_quality = 80
"#
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// One part of a multipart form
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Encode parts as a `multipart/form-data` body delimited by [`BOUNDARY`]
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Add-card form values
#[derive(Debug, Clone)]
pub struct CardForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub gender: &'a str,
    pub date_of_birth: &'a str,
    pub address: &'a str,
}

impl Default for CardForm<'_> {
    fn default() -> Self {
        Self {
            name: "John Doe",
            email: "john@example.com",
            phone: "123456789",
            gender: "Male",
            date_of_birth: "1993-01-01",
            address: "123 Main St",
        }
    }
}

impl<'a> CardForm<'a> {
    pub fn parts(&self) -> Vec<Part<'a>> {
        vec![
            Part::Text("Name", self.name),
            Part::Text("Email", self.email),
            Part::Text("Phone", self.phone),
            Part::Text("Gender", self.gender),
            Part::Text("DateOfBirth", self.date_of_birth),
            Part::Text("Address", self.address),
        ]
    }
}

/// Read and deserialize a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read a response body as text
#[allow(dead_code)]
pub async fn text_body(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Business card response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CardResponse {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: String,
    pub address: Option<String>,
}

/// Operation result structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ResultResponse {
    pub succeeded: bool,
    pub message: Option<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
