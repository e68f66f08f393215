//! Storefront API client implementation using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rocket_core::{
    Money, Product, ProductCatalogClient, ProductId, ServiceResult, Stock, StockOracle,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the storefront catalog and stock endpoints.
#[derive(Debug, Clone)]
pub struct HttpStorefrontClient {
    base_url: Url,
    client: Client,
}

impl HttpStorefrontClient {
    /// Creates a client for the configured base URL.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(HttpStorefrontClient { base_url, client })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, collection: &str, id: ProductId) -> ApiResult<Url> {
        self.base_url
            .join(&format!("{}/{}", collection, id))
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: &str,
        resource: &'static str,
        id: ProductId,
    ) -> ApiResult<T> {
        let url = self.endpoint(collection, id)?;
        debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource,
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Fetches a product description.
    pub async fn fetch_product(&self, id: ProductId) -> ApiResult<Product> {
        let dto: ProductDto = self.fetch("products", "Product", id).await?;
        Ok(dto.into())
    }

    /// Fetches the stock record for a product.
    pub async fn fetch_stock(&self, id: ProductId) -> ApiResult<Stock> {
        self.fetch("stock", "Stock", id).await
    }
}

/// Catalog wire format. Prices are decimal numbers on the wire.
#[derive(Debug, Deserialize)]
struct ProductDto {
    id: ProductId,
    title: String,
    price: f64,
    image: String,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            title: dto.title,
            price: Money::from_decimal(dto.price),
            image: dto.image,
        }
    }
}

#[async_trait]
impl ProductCatalogClient for HttpStorefrontClient {
    async fn get_product(&self, id: ProductId) -> ServiceResult<Product> {
        Ok(self.fetch_product(id).await?)
    }
}

#[async_trait]
impl StockOracle for HttpStorefrontClient {
    async fn get_stock(&self, id: ProductId) -> ServiceResult<Stock> {
        Ok(self.fetch_stock(id).await?)
    }
}
