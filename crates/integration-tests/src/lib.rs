//! Integration tests for the Sari-Sari storefront.
//!
//! The suite drives the real router in process with [`MemoryStore`]
//! substituted for the file-backed cart store, so no running server,
//! database, or filesystem state is required.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart operations end to end: add, update, remove,
//!   clear, checkout, badge, and notifications
//! - `pages` - Page rendering and navigation highlighting

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use sari_sari_core::MemoryStore;
use sari_sari_storefront::config::StorefrontConfig;
use sari_sari_storefront::routes;
use sari_sari_storefront::state::AppState;

/// An in-process storefront with an in-memory cart store.
pub struct TestContext {
    app: Router,
    /// Shared state, for asserting directly against the store.
    pub state: AppState,
}

impl TestContext {
    /// Build the storefront router around a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            data_dir: PathBuf::from("unused-in-tests"),
            notice_hide_secs: 3,
        };
        let state = AppState::new(config, Box::new(MemoryStore::new()));
        let app = Router::new()
            .merge(routes::routes())
            .with_state(state.clone());
        Self { app, state }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn get(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.app.clone().oneshot(request).await.expect("request routes")
    }

    /// Send a POST with an `application/x-www-form-urlencoded` body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn post_form(&self, path: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_owned()))
            .expect("request builds");
        self.app.clone().oneshot(request).await.expect("request routes")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect a response body into a string.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
