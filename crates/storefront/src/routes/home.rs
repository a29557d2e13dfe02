//! Catalog listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use tracing::instrument;

use greengrocer_core::Product;

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

/// Format a raw price string for display.
fn format_price(price: &str) -> String {
    price.parse::<Decimal>().map_or_else(
        |_| format!("${price}"),
        |amount| format!("${amount:.2}"),
    )
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(&product.price),
            category: product.category.clone(),
        }
    }
}

/// Home page template: the product grid.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
}

/// Display the catalog listing.
///
/// One list request per render; on failure the error is logged and the page
/// renders with an empty catalog. No retry, no polling.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.catalog().list_products().await.map_or_else(
        |e| {
            tracing::error!("Error fetching products: {e}");
            Vec::new()
        },
        |products| products.iter().map(ProductView::from).collect(),
    );

    HomeTemplate { products }
}
