//! Catalog API client.
//!
//! The catalog API is a fixed-origin JSON service that owns products and
//! orders. The storefront only needs the read side plus order submission;
//! product mutations live in the admin binary's client.
//!
//! No caching, no retry, no authentication headers: every page render
//! refetches, and a failed request is reported to the caller who decides
//! whether it is worth telling the shopper about (usually it is not).

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use greengrocer_core::{OrderRequest, Product};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed (connection refused, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Catalog API returned {0}")]
    Status(StatusCode),

    /// The response body was not the JSON we expected.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the catalog API.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client for the given API base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// unparsable body.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint("/")?;
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status. The
    /// response body is not inspected; a success status is the whole
    /// contract.
    #[instrument(skip(self, order), fields(lines = order.products.len()))]
    pub async fn place_order(&self, order: &OrderRequest) -> Result<(), CatalogError> {
        let url = self.endpoint("/order")?;
        let response = self.inner.client.post(url).json(order).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Failed to place order");
            return Err(CatalogError::Status(status));
        }

        Ok(())
    }
}
