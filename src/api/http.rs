use products_api::{ApiError, DropPrediction, NewProduct, PriceAnalysis, Product, ProductsClient};
use tracing::debug;

use crate::api::traits::ProductApi;
use crate::config::Config;
use crate::errors::{TrackerError, TrackerResult};

/// `ProductApi` backed by the HTTP client of the `products_api` crate
pub struct HttpProductApi {
    client: ProductsClient,
}

impl HttpProductApi {
    pub fn new(config: &Config) -> TrackerResult<Self> {
        let client = ProductsClient::with_timeout(config.api_url.as_str(), config.request_timeout)?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url().as_str()
    }
}

impl ProductApi for HttpProductApi {
    fn list(&self) -> TrackerResult<Vec<Product>> {
        debug!(url = self.base_url(), "listing products");
        Ok(self.client.list_products()?)
    }

    fn create(&self, product: &NewProduct) -> TrackerResult<Option<Product>> {
        debug!(url = self.base_url(), name = %product.name, "creating product");
        let body = self.client.create_product(product)?;
        Ok(products_api::created_product(&body))
    }

    fn get(&self, id: i64) -> TrackerResult<Product> {
        self.client.get_product(id).map_err(|e| not_found_as(e, id))
    }

    fn analyze(&self, id: i64) -> TrackerResult<PriceAnalysis> {
        self.client.analyze_product(id).map_err(|e| not_found_as(e, id))
    }

    fn predict_drop(&self, url: &str) -> TrackerResult<DropPrediction> {
        Ok(self.client.predict_drop(url)?)
    }
}

fn not_found_as(err: ApiError, id: i64) -> TrackerError {
    match err {
        ApiError::NotFound(_) => TrackerError::ProductNotFound(id),
        other => other.into(),
    }
}
