use products_api::{DropPrediction, NewProduct, PriceAnalysis, Product};

use crate::errors::TrackerResult;

/// The remote product collection
#[cfg_attr(test, mockall::automock)]
pub trait ProductApi: Send + Sync {
    fn list(&self) -> TrackerResult<Vec<Product>>;
    /// Returns the product echoed back by the backend, when it sends one
    fn create(&self, product: &NewProduct) -> TrackerResult<Option<Product>>;
    fn get(&self, id: i64) -> TrackerResult<Product>;
    fn analyze(&self, id: i64) -> TrackerResult<PriceAnalysis>;
    fn predict_drop(&self, url: &str) -> TrackerResult<DropPrediction>;
}
