//! Page rendering: shelf, empty cart state, navigation highlighting, and
//! the checkout redirect.

use axum::http::{StatusCode, header};

use sari_sari_integration_tests::{TestContext, body_string};

#[tokio::test]
async fn home_page_lists_the_shelf_with_formatted_prices() {
    let ctx = TestContext::new();
    let response = ctx.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("Dried Mangoes"));
    assert!(page.contains("\u{20b1}185.00"));
    assert!(page.contains("hx-post=\"/cart/add\""));
}

#[tokio::test]
async fn home_page_marks_the_home_link_active() {
    let ctx = TestContext::new();
    let page = body_string(ctx.get("/").await).await;
    assert!(page.contains("<a href=\"/\" class=\"active\">Home</a>"));
    assert!(page.contains("<a href=\"/cart\">Cart</a>"));
}

#[tokio::test]
async fn cart_page_marks_the_cart_link_active() {
    let ctx = TestContext::new();
    let page = body_string(ctx.get("/cart").await).await;
    assert!(page.contains("<a href=\"/cart\" class=\"active\">Cart</a>"));
    assert!(page.contains("<a href=\"/\">Home</a>"));
}

#[tokio::test]
async fn empty_cart_page_shows_the_placeholder_and_no_total() {
    let ctx = TestContext::new();
    let page = body_string(ctx.get("/cart").await).await;
    assert!(page.contains("Your cart is empty."));
    assert!(!page.contains("Total:"));
}

#[tokio::test]
async fn checkout_path_redirects_to_the_cart_page() {
    let ctx = TestContext::new();
    let response = ctx.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/cart")
    );
}

#[tokio::test]
async fn badge_fragment_renders_zero_for_a_fresh_store() {
    let ctx = TestContext::new();
    let badge = body_string(ctx.get("/cart/count").await).await;
    assert!(badge.contains(">0<"));
}
