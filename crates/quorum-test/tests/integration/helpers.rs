#![allow(clippy::unused_async, clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service with a fresh in-memory store
//! - Making HTTP requests with acting-user headers
//! - Asserting on responses
//!
//! ## Isolation
//! Each test builds its own service via `create_test_service()`, so bookings
//! created in one test are never visible to another and tests run in
//! parallel without contention.

use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};

use quorum_test::component::config::{
    ConfigHandler, LoggingConfig, ResourceConfig, ServerConfig, Settings,
};
use quorum_test::component::model::resource::Resource;
use quorum_test::component::store::provider::StoreProviderHandler;
use quorum_test::component::store::{MemoryBookingStore, StaticResourceCatalog};
use quorum_test::component::types::{ResourceCategory, Role};

pub use quorum_test::app::api::{BOOKINGS_ROUTE_PREFIX, RESOURCES_ROUTE_PREFIX};
pub use tracing;

/// Fixed IDs for the seeded catalog so tests can reference resources
/// without a lookup round trip.
pub const STUDY_ROOM_ID: uuid::Uuid = uuid::Uuid::from_u128(0x101);
pub const MAIN_HALL_ID: uuid::Uuid = uuid::Uuid::from_u128(0x102);
pub const CHEMISTRY_LAB_ID: uuid::Uuid = uuid::Uuid::from_u128(0x103);

/// Resources seeded into every test catalog.
fn seed_resources() -> Vec<ResourceConfig> {
    vec![
        ResourceConfig {
            id: STUDY_ROOM_ID,
            name: "Library Study Room 3".to_string(),
            category: ResourceCategory::Room,
            capacity: 6,
        },
        ResourceConfig {
            id: MAIN_HALL_ID,
            name: "Main Hall".to_string(),
            category: ResourceCategory::Hall,
            capacity: 300,
        },
        ResourceConfig {
            id: CHEMISTRY_LAB_ID,
            name: "Chemistry Lab B".to_string(),
            category: ResourceCategory::Lab,
            capacity: 24,
        },
    ]
}

/// Test configuration - static struct instead of loading from file.
fn test_config() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        resources: seed_resources(),
    }
}

/// Creates a test Salvo service instance for integration testing.
///
/// ## Summary
/// Returns a fresh service with all API routes, an empty in-memory booking
/// store and the seeded resource catalog. Created per test for isolation.
///
/// ## Panics
/// Panics if the service cannot be created.
#[expect(clippy::expect_used, reason = "Service creation failure is fatal")]
#[must_use]
pub fn create_test_service() -> Service {
    let config = test_config();

    let store = std::sync::Arc::new(MemoryBookingStore::new());
    let catalog = std::sync::Arc::new(StaticResourceCatalog::new(config.resources.iter().map(
        |resource| Resource {
            id: resource.id,
            name: resource.name.clone(),
            category: resource.category,
            capacity: resource.capacity,
        },
    )));

    let router = Router::new()
        .hoop(StoreProviderHandler { store, catalog })
        .hoop(ConfigHandler { settings: config })
        .push(quorum_test::app::api::routes().expect("API routes should be valid"));

    Service::new(router)
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new POST request.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a new PATCH request.
    #[must_use]
    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the acting-user identity headers.
    #[must_use]
    pub fn acting(self, role: Role, email: &str) -> Self {
        self.header("x-acting-role", role.as_str())
            .header("x-acting-email", email)
    }

    /// Sets a JSON request body.
    ///
    /// ## Panics
    /// Panics if the value cannot be serialized.
    #[must_use]
    pub fn json_body(mut self, value: &serde_json::Value) -> Self {
        self.body = Some(serde_json::to_vec(value).expect("Failed to serialize test body"));
        self.header("Content-Type", "application/json; charset=utf-8")
    }

    /// Sends the request to the test service and returns the response.
    ///
    /// ## Panics
    /// Panics if the request cannot be sent or the response cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "PATCH" => TestClient::patch(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {} with body:\n{}",
            self.status,
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    /// Asserts that the error payload carries the expected machine kind.
    #[must_use]
    pub fn assert_error_kind(self, expected: &str) -> Self {
        let value = self.json();
        assert_eq!(
            value["kind"].as_str(),
            Some(expected),
            "Expected error kind '{expected}' in:\n{value}"
        );
        self
    }

    /// Parses the response body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response body is not valid JSON ({e}):\n{}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Builds a create-booking payload with sensible defaults for one requester.
#[must_use]
pub fn booking_payload(resource_id: uuid::Uuid, role: Role, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "resource_id": resource_id,
        "date": "2026-09-14",
        "start_time": "14:00:00",
        "end_time": "16:00:00",
        "purpose": "Study group session",
        "department": "Computer Science",
        "attendees": 4,
        "special_requirements": null,
        "requester": {
            "name": name,
            "role": role.as_str(),
            "email": email,
        },
    })
}

/// Creates a booking through the API and returns the booking JSON.
///
/// ## Panics
/// Panics if the create request does not return 201.
pub async fn create_booking(service: &Service, payload: &serde_json::Value) -> serde_json::Value {
    let response = TestRequest::post(BOOKINGS_ROUTE_PREFIX)
        .json_body(payload)
        .send(service)
        .await
        .assert_status(StatusCode::CREATED);
    response.json()["booking"].clone()
}

/// Extracts the booking ID from a booking JSON value.
///
/// ## Panics
/// Panics if the value has no parsable `id` field.
#[must_use]
pub fn booking_id(booking: &serde_json::Value) -> uuid::Uuid {
    booking["id"]
        .as_str()
        .and_then(|raw| uuid::Uuid::parse_str(raw).ok())
        .expect("Booking JSON should carry an id")
}

/// Builds the approval path for a booking.
#[must_use]
pub fn approval_path(id: uuid::Uuid) -> String {
    format!("{BOOKINGS_ROUTE_PREFIX}/{id}/approval")
}

/// Builds the item path for a booking.
#[must_use]
pub fn booking_path(id: uuid::Uuid) -> String {
    format!("{BOOKINGS_ROUTE_PREFIX}/{id}")
}
