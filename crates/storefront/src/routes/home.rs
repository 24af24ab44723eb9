//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::Uri, response::IntoResponse};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::filters;
use crate::nav::{self, NavLink};

/// Shelf item display data for templates.
///
/// The add-to-cart form posts the name, price, and image back verbatim;
/// the cart itself never consults a catalog.
#[derive(Debug, Clone)]
pub struct ShelfItemView {
    pub name: &'static str,
    pub price: Decimal,
    pub image: &'static str,
    pub blurb: &'static str,
}

/// Static shelf for the landing page (can be replaced with dynamic data later).
fn get_shelf_items() -> Vec<ShelfItemView> {
    vec![
        ShelfItemView {
            name: "Calamansi Concentrate",
            price: Decimal::new(9500, 2),
            image: "/static/images/calamansi.png",
            blurb: "Cold-pressed citrus for juice, marinades, and everything in between.",
        },
        ShelfItemView {
            name: "Pandesal (Half Dozen)",
            price: Decimal::new(3500, 2),
            image: "/static/images/pandesal.png",
            blurb: "Baked every morning. Best eaten while the bag is still warm.",
        },
        ShelfItemView {
            name: "Banana Ketchup",
            price: Decimal::new(7550, 2),
            image: "/static/images/ketchup.png",
            blurb: "Sweet, tangy, and better on silog than the tomato kind.",
        },
        ShelfItemView {
            name: "Ube Halaya Jar",
            price: Decimal::new(16000, 2),
            image: "/static/images/ube.png",
            blurb: "Slow-stirred purple yam jam, straight from the province.",
        },
        ShelfItemView {
            name: "Sampaguita Soap",
            price: Decimal::new(4500, 2),
            image: "/static/images/soap.png",
            blurb: "Hand-milled with the national flower. Smells like Sunday.",
        },
        ShelfItemView {
            name: "Dried Mangoes",
            price: Decimal::new(18500, 2),
            image: "/static/images/mangoes.png",
            blurb: "Cebu-style, chewy and bright. The bag never survives the week.",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavLink>,
    pub shelf: Vec<ShelfItemView>,
}

/// Display the home page.
#[instrument]
pub async fn home(uri: Uri) -> impl IntoResponse {
    HomeTemplate {
        nav: nav::nav_links(uri.path()),
        shelf: get_shelf_items(),
    }
}
