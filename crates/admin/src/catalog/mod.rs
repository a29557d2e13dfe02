//! Catalog API client, admin side.
//!
//! The admin binary holds the write half of the catalog API: create, update,
//! and delete, plus the same list read the storefront uses. No caching and no
//! retry; a failed mutation is reported to the handler, which logs it and
//! leaves the page as it was.

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use greengrocer_core::{NewProduct, Product, ProductId};

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

    fn check_status(status: StatusCode) -> Result<(), CatalogError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(CatalogError::Status(status))
        }
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

    /// Update an existing product with the full edited draft.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update_product(&self, product: &Product) -> Result<(), CatalogError> {
        let url = self.endpoint("/admin/update")?;
        let response = self.inner.client.put(url).json(product).send().await?;
        Self::check_status(response.status())
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let url = self.endpoint("/admin/delete")?;
        let response = self
            .inner
            .client
            .delete(url)
            .query(&[("id", id.as_i32())])
            .send()
            .await?;
        Self::check_status(response.status())
    }

    /// Create a product from a new-product draft. The backend assigns the id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), CatalogError> {
        let url = self.endpoint("/admin/create")?;
        let response = self.inner.client.post(url).json(product).send().await?;
        Self::check_status(response.status())
    }
}
