use products_api::NewProduct;

use crate::errors::{TrackerError, TrackerResult};

/// Raw, unvalidated field values as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub url: String,
    pub price: String,
}

impl ProductForm {
    pub fn new(name: impl Into<String>, url: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            price: price.into(),
        }
    }

    /// Check the fields and build the create payload.
    /// Name and URL are trimmed; the price must be a finite number.
    pub fn validate(&self) -> TrackerResult<NewProduct> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation("name is required".to_string()));
        }

        let url = self.url.trim();
        if url.is_empty() {
            return Err(TrackerError::Validation("url is required".to_string()));
        }

        let current_price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| {
                TrackerError::Validation(format!("price is not a number: '{}'", self.price))
            })?;

        Ok(NewProduct {
            name: name.to_string(),
            url: url.to_string(),
            current_price,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.price.is_empty()
    }
}
