use products_api::{DropPrediction, PriceAnalysis, Product};

use crate::api::ProductApi;
use crate::errors::{TrackerError, TrackerResult};

/// Read-only lookups on single products
pub struct InsightService<'a, A: ProductApi> {
    api: &'a A,
}

impl<'a, A: ProductApi> InsightService<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub fn product(&self, id: i64) -> TrackerResult<Product> {
        self.api.get(id)
    }

    pub fn analysis(&self, id: i64) -> TrackerResult<PriceAnalysis> {
        self.api.analyze(id)
    }

    /// Predict a price drop for a product page. The URL must be non-empty.
    pub fn predict(&self, url: &str) -> TrackerResult<DropPrediction> {
        let url = url.trim();
        if url.is_empty() {
            return Err(TrackerError::InvalidInput("product URL is required".to_string()));
        }
        self.api.predict_drop(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::traits::MockProductApi;
    use mockall::predicate::eq;

    #[test]
    fn test_predict_trims_url() {
        let mut api = MockProductApi::new();
        api.expect_predict_drop()
            .with(eq("https://shop.example/p/1"))
            .times(1)
            .returning(|_| {
                Ok(DropPrediction {
                    current_price: 1000.0,
                    predicted_drop_probability: 30.0,
                    prediction_comment: "Moderate chance".to_string(),
                })
            });

        let service = InsightService::new(&api);
        let prediction = service.predict("  https://shop.example/p/1 ").unwrap();
        assert_eq!(prediction.predicted_drop_probability, 30.0);
    }

    #[test]
    fn test_predict_requires_url() {
        let mut api = MockProductApi::new();
        api.expect_predict_drop().never();

        let service = InsightService::new(&api);
        assert!(matches!(
            service.predict("   "),
            Err(TrackerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_product_passes_through() {
        let mut api = MockProductApi::new();
        api.expect_get()
            .with(eq(9))
            .returning(|id| Err(TrackerError::ProductNotFound(id)));

        let service = InsightService::new(&api);
        assert!(matches!(
            service.product(9),
            Err(TrackerError::ProductNotFound(9))
        ));
    }
}
