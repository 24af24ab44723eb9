//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (shelf with add-to-cart forms)
//! GET  /health          - Health check (wired in main)
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! POST /cart/add        - Add item (returns cart_count fragment, triggers cart-updated)
//! POST /cart/update     - Set quantity (returns cart_items fragment)
//! POST /cart/remove     - Remove item (returns cart_items fragment)
//! POST /cart/clear      - Clear the cart (returns cart_items fragment)
//! POST /cart/checkout   - Checkout with explicit confirmation (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//! GET  /cart/notice     - Popup notification region (fragment)
//!
//! # Checkout
//! GET  /checkout        - Redirect to the cart page, where the confirmation lives
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
        .route("/count", get(cart::count))
        .route("/notice", get(cart::notice))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(cart::checkout_redirect))
}
