//! Product management route handlers.
//!
//! Editing works on drafts: a copy of the product (or a blank form) whose
//! fields all flow through [`ProductDraft::set_field`], so the price minimum
//! is applied on every change. Saves and creates that succeed redirect back
//! to the listing, which refetches the catalog; failures are logged and the
//! form re-renders with the draft intact, so nothing the operator typed is
//! lost.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use greengrocer_core::{Product, ProductDraft, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product display data for the listing.
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

/// Product form data, shared by the edit and create flows.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
}

/// Run every form field through the draft's field handler.
fn draft_from_form(form: ProductForm) -> ProductDraft {
    let mut draft = ProductDraft::default();
    draft.set_field("name", form.name);
    draft.set_field("price", form.price);
    draft.set_field("description", form.description);
    draft.set_field("category", form.category);
    draft
}

/// Product list page template, including the new-product form.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    /// The new-product draft; repopulated when a create attempt fails.
    pub draft: ProductDraft,
}

/// Edit form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub id: i32,
    pub draft: ProductDraft,
}

// =============================================================================
// Handlers
// =============================================================================

/// Fetch the listing, degrading to an empty one on failure (logged only).
async fn listing(state: &AppState) -> Vec<ProductView> {
    state.catalog().list_products().await.map_or_else(
        |e| {
            tracing::error!("Error fetching products: {e}");
            Vec::new()
        },
        |products| products.iter().map(ProductView::from).collect(),
    )
}

/// Product list page. One list request per render.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    ProductsIndexTemplate {
        products: listing(&state).await,
        draft: ProductDraft::default(),
    }
}

/// Edit form: copy the product into an editable draft.
///
/// An id the catalog does not know is a 404, not a blank form.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ProductEditTemplate> {
    let products = state.catalog().list_products().await?;

    let id = ProductId::new(id);
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductEditTemplate {
        id: id.as_i32(),
        draft: ProductDraft::from(product),
    })
}

/// Save the edited draft: PUT the full product upstream.
///
/// Success redirects to the listing, which refetches everything. Failure is
/// logged and the form re-renders with the draft still open; the operator
/// sees no error, only an unsaved form.
#[instrument(skip(state, form))]
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Response {
    let draft = draft_from_form(form);
    let product = draft.clone().into_product(ProductId::new(id));

    match state.catalog().update_product(&product).await {
        Ok(()) => {
            tracing::info!("Product {id} updated successfully");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update product {id}: {e}");
            ProductEditTemplate { id, draft }.into_response()
        }
    }
}

/// Delete a product.
///
/// Success drops the entry from the listing the redirect renders; failure is
/// logged and the listing is unchanged.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    match state.catalog().delete_product(ProductId::new(id)).await {
        Ok(()) => tracing::info!("Product {id} deleted successfully"),
        Err(e) => tracing::error!("Failed to delete product {id}: {e}"),
    }

    Redirect::to("/")
}

/// Create a product from the new-product form.
///
/// The price minimum is checked again here even though the field handler
/// already clamps it; a draft that fails the check is re-rendered without
/// sending anything upstream.
#[instrument(skip(state, form))]
pub async fn create(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Response {
    let draft = draft_from_form(form);

    if !draft.price_meets_minimum() {
        tracing::error!("Price must be at least 1");
        return ProductsIndexTemplate {
            products: listing(&state).await,
            draft,
        }
        .into_response();
    }

    match state
        .catalog()
        .create_product(&draft.clone().into_new_product())
        .await
    {
        Ok(()) => {
            tracing::info!("Product created successfully");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            ProductsIndexTemplate {
                products: listing(&state).await,
                draft,
            }
            .into_response()
        }
    }
}
