//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutating handler performs load, transform, and save while holding
//! the store lock, then re-renders its fragment in the same response, so the
//! positional indices baked into the markup always refer to the list that
//! produced them. A stale index degrades to a logged no-op.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{OriginalUri, State},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use sari_sari_core::{Cart, CartError};

use crate::error::Result;
use crate::filters;
use crate::nav::{self, NavLink};
use crate::state::AppState;

/// HTMX trigger appended to every fragment that changed the cart, so the
/// badge and notice regions refresh themselves.
const CART_UPDATED: [(&str, &str); 1] = [("HX-Trigger", "cart-updated")];

/// Cart item display data for templates.
///
/// `index` is the entry's position at render time; the quantity and remove
/// controls post it back.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub index: usize,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: Decimal,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| CartItemView {
                    index,
                    name: entry.name().to_owned(),
                    image: entry.image().to_owned(),
                    price: entry.price(),
                    quantity: entry.quantity(),
                })
                .collect(),
            total: cart.total(),
            item_count: cart.unit_count(),
        }
    }
}

// =============================================================================
// Form Data
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

/// Update quantity form data. The quantity arrives as raw text so that
/// non-numeric input can be treated as a request for 1 instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub quantity: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Checkout form data. The blocking confirmation prompt of a browser cart
/// becomes an explicit confirmation result carried by the request.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub confirmed: bool,
}

/// Interpret raw quantity input, treating anything non-numeric as 1.
/// Sub-1 values are clamped later by the cart itself.
fn requested_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(1)
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: Vec<NavLink>,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Popup notification fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub notice: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    let cart = state.store().lock().await.load();
    CartShowTemplate {
        nav: nav::nav_links(uri.path()),
        cart: CartView::from(&cart),
    }
}

/// Add one unit of an item to the cart (HTMX).
///
/// Increments the quantity of an existing entry with the same name, or
/// appends a new entry. Returns the refreshed badge fragment and notifies.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let mut store = state.store().lock().await;
    let mut cart = store.load();
    cart.add(&form.name, form.price, &form.image)?;
    store.save(&cart)?;
    drop(store);

    state
        .notifier()
        .notify(format!("Added \"{}\" to cart", form.name.trim()))
        .await;

    Ok((
        AppendHeaders(CART_UPDATED),
        CartCountTemplate {
            count: cart.unit_count(),
        },
    )
        .into_response())
}

/// Update a cart entry's quantity (HTMX).
///
/// Non-numeric input counts as 1 and sub-1 requests are clamped to 1. An
/// out-of-range index is a no-op; the fragment re-renders unchanged.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let requested = requested_quantity(&form.quantity);

    let mut store = state.store().lock().await;
    let mut cart = store.load();
    match cart.set_quantity(form.index, requested) {
        Ok(()) => store.save(&cart)?,
        Err(err @ CartError::IndexOutOfRange { .. }) => {
            tracing::warn!(error = %err, "ignoring cart update");
        }
        Err(err) => return Err(err.into()),
    }
    drop(store);

    Ok((
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a cart entry (HTMX).
///
/// Entries after the removed one shift one position earlier. An
/// out-of-range index is a no-op; the fragment re-renders unchanged.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut store = state.store().lock().await;
    let mut cart = store.load();
    match cart.remove(form.index) {
        Ok(removed) => {
            store.save(&cart)?;
            tracing::debug!(name = removed.name(), "removed cart entry");
        }
        Err(err @ CartError::IndexOutOfRange { .. }) => {
            tracing::warn!(error = %err, "ignoring cart removal");
        }
        Err(err) => return Err(err.into()),
    }
    drop(store);

    Ok((
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Clear the cart (HTMX).
///
/// Removes the persistence key entirely and notifies.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Response> {
    state.store().lock().await.clear()?;
    state.notifier().notify("Cart cleared").await;

    Ok((
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::empty(),
        },
    )
        .into_response())
}

/// Check out the cart (HTMX).
///
/// An empty cart only raises the empty-cart notification. A request
/// without an explicit confirmation leaves the cart untouched. A confirmed
/// checkout removes the persistence key and thanks the shopper.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let mut store = state.store().lock().await;
    let cart = store.load();

    if cart.is_empty() {
        drop(store);
        state.notifier().notify("Your cart is empty").await;
        return Ok((
            AppendHeaders(CART_UPDATED),
            CartItemsTemplate {
                cart: CartView::empty(),
            },
        )
            .into_response());
    }

    if !form.confirmed {
        drop(store);
        return Ok(CartItemsTemplate {
            cart: CartView::from(&cart),
        }
        .into_response());
    }

    store.clear()?;
    drop(store);

    state.notifier().notify("Thank you for your order!").await;
    Ok((
        AppendHeaders(CART_UPDATED),
        CartItemsTemplate {
            cart: CartView::empty(),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.store().lock().await.load();
    CartCountTemplate {
        count: cart.unit_count(),
    }
}

/// Get the popup notification region (HTMX).
#[instrument(skip(state))]
pub async fn notice(State(state): State<AppState>) -> impl IntoResponse {
    NoticeTemplate {
        notice: state.notifier().current().await,
    }
}

/// Redirect `/checkout` to the cart page, where the confirmation form lives.
#[instrument]
pub async fn checkout_redirect() -> Redirect {
    Redirect::to("/cart")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_quantity_parses_numbers() {
        assert_eq!(requested_quantity("7"), 7);
        assert_eq!(requested_quantity(" 4 "), 4);
        assert_eq!(requested_quantity("-5"), -5);
        assert_eq!(requested_quantity("0"), 0);
    }

    #[test]
    fn requested_quantity_treats_non_numeric_as_one() {
        assert_eq!(requested_quantity("abc"), 1);
        assert_eq!(requested_quantity(""), 1);
        assert_eq!(requested_quantity("2.5"), 1);
    }

    #[test]
    fn cart_view_carries_render_time_indices() {
        let mut cart = Cart::new();
        cart.add("Calamansi Concentrate", Decimal::new(9500, 2), "/img/calamansi.png")
            .expect("add");
        cart.add("Banana Ketchup", Decimal::new(7550, 2), "/img/ketchup.png")
            .expect("add");
        cart.add("Calamansi Concentrate", Decimal::new(9500, 2), "/img/calamansi.png")
            .expect("add");

        let view = CartView::from(&cart);
        let indices: Vec<usize> = view.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, [0, 1]);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, Decimal::new(26550, 2));
    }

    #[test]
    fn empty_view_matches_an_empty_cart() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, CartView::empty().item_count);
        assert_eq!(view.total, CartView::empty().total);
    }
}
