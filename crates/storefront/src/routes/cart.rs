//! Cart route handlers.
//!
//! The cart lives in the shopper's session and is reshaped into view data on
//! every render; the total is always derived, never stored.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use greengrocer_core::{Cart, CartItem, ProductId, clamp_quantity};

use crate::filters;
use crate::state::AppState;

/// Session key under which the cart is stored.
pub const CART_KEY: &str = "greengrocer.cart";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format!("${:.2}", cart.total()),
            empty: cart.is_empty(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id.as_i32(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            price: format!("${:.2}", item.product.price_amount()),
            line_total: format!("${:.2}", item.line_total()),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session. A missing or unreadable cart is empty.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(CART_KEY).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Failed to load cart from session: {e}");
            Cart::default()
        }
    }
}

/// Store the cart back into the session.
pub async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(CART_KEY, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data. The quantity arrives as the raw input string so
/// invalid values can be clamped instead of rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template. Also rendered by the order placement handler, which
/// sets the banner flags.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub address: String,
    pub address_error: bool,
    pub order_success: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
        address: String::new(),
        address_error: false,
        order_success: false,
    }
}

/// Add one unit of a product to the cart.
///
/// The product is resolved by id against a fresh catalog fetch. A repeated
/// add increments the existing entry instead of duplicating it. An unknown id
/// or a failed fetch is logged and ignored.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Redirect {
    let products = match state.catalog().list_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Error fetching products: {e}");
            return Redirect::to("/");
        }
    };

    let id = ProductId::new(form.product_id);
    let Some(product) = products.into_iter().find(|p| p.id == id) else {
        tracing::warn!("Add to cart for unknown product id {id}");
        return Redirect::to("/");
    };

    let mut cart = load_cart(&session).await;
    cart.add(product);
    save_cart(&session, &cart).await;

    Redirect::to("/")
}

/// Change an entry's quantity. Values below 1 and unparsable input become 1.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Redirect {
    let mut cart = load_cart(&session).await;
    cart.set_quantity(ProductId::new(form.product_id), clamp_quantity(&form.quantity));
    save_cart(&session, &cart).await;

    Redirect::to("/cart")
}

/// Remove an entry from the cart entirely.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Redirect {
    let mut cart = load_cart(&session).await;
    cart.remove(ProductId::new(form.product_id));
    save_cart(&session, &cart).await;

    Redirect::to("/cart")
}
