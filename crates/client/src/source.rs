//! Catalog source: where products and categories come from.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use foodie_catalog::Product;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const CATEGORIES_PATH: &str = "/api/categories";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Backend that serves the catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Category names, without the synthetic "All" entry.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// Both halves of a successful catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Fetch products and categories concurrently.
///
/// Both requests must succeed; the first failure resolves the whole fetch.
pub async fn fetch_catalog<S>(source: &S) -> Result<FetchedCatalog, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let (products, categories) =
        tokio::try_join!(source.fetch_products(), source.fetch_categories())?;

    Ok(FetchedCatalog {
        products,
        categories,
    })
}

/// REST catalog backend (`GET /api/products`, `GET /api/categories`).
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self), fields(base_url = %self.base_url), err)]
    async fn get_json<T>(&self, path: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Api(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(PRODUCTS_PATH).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(CATEGORIES_PATH).await
    }
}
