#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use contacts_api::config::ServerConfig;
use contacts_api::router::build_app_router;
use contacts_api::state::AppState;
use contacts_core::contact::{Contact, CreateContact};
use contacts_core::error::CoreError;
use contacts_core::service::ContactService;
use contacts_core::store::ContactStore;
use contacts_core::types::DbId;
use contacts_db::InMemoryContactStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: None,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app(store: Arc<dyn ContactStore>) -> Router {
    let state = AppState {
        contacts: ContactService::new(store),
    };
    build_app_router(state, &test_config())
}

/// Router over a fresh, empty in-memory store.
pub fn empty_app() -> Router {
    build_test_app(Arc::new(InMemoryContactStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PATCH, uri, body).await
}

pub async fn patch_text(app: Router, uri: &str, body: &str) -> Response<Body> {
    patch_with_content_type(app, uri, "text/plain", body).await
}

/// PATCH with an explicit `Content-Type` header value.
pub async fn patch_with_content_type(
    app: Router,
    uri: &str,
    content_type: &str,
    body: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Call-counting store
// ---------------------------------------------------------------------------

/// Wraps an [`InMemoryContactStore`] and counts every storage call.
#[derive(Default)]
pub struct CountingStore {
    inner: InMemoryContactStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactStore for CountingStore {
    async fn fetch_all(&self) -> Result<Vec<Contact>, CoreError> {
        self.hit();
        self.inner.fetch_all().await
    }

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.fetch_by_id(id).await
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.fetch_by_email(email).await
    }

    async fn fetch_by_phone(&self, phone: &str) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.fetch_by_phone(phone).await
    }

    async fn insert(&self, input: CreateContact) -> Result<Contact, CoreError> {
        self.hit();
        self.inner.insert(input).await
    }

    async fn replace(&self, contact: Contact) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.replace(contact).await
    }

    async fn update_email(&self, id: DbId, email: &str) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.update_email(id, email).await
    }

    async fn update_phone(&self, id: DbId, phone: &str) -> Result<Option<Contact>, CoreError> {
        self.hit();
        self.inner.update_phone(id, phone).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        self.hit();
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.inner.ping().await
    }
}

// ---------------------------------------------------------------------------
// Unreachable store
// ---------------------------------------------------------------------------

/// A store whose backend is down: every call fails.
pub struct UnavailableStore;

fn down() -> CoreError {
    CoreError::Internal("connection refused".into())
}

#[async_trait]
impl ContactStore for UnavailableStore {
    async fn fetch_all(&self) -> Result<Vec<Contact>, CoreError> {
        Err(down())
    }

    async fn fetch_by_id(&self, _id: DbId) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn fetch_by_email(&self, _email: &str) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn fetch_by_phone(&self, _phone: &str) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn insert(&self, _input: CreateContact) -> Result<Contact, CoreError> {
        Err(down())
    }

    async fn replace(&self, _contact: Contact) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn update_email(&self, _id: DbId, _email: &str) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn update_phone(&self, _id: DbId, _phone: &str) -> Result<Option<Contact>, CoreError> {
        Err(down())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<bool, CoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Err(down())
    }
}
