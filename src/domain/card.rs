use std::time::Duration;

use products_api::Product;

/// Gap between the reveal of consecutive cards
pub const REVEAL_STEP: Duration = Duration::from_millis(200);

/// What a single product looks like in the list
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub index: usize,
    pub name: String,
    pub url: String,
    pub current_price: f64,
    pub reveal_delay: Duration,
}

impl ProductCard {
    pub fn from_product(index: usize, product: &Product) -> Self {
        Self {
            index,
            name: product.name.clone(),
            url: product.url.clone(),
            current_price: product.current_price,
            reveal_delay: REVEAL_STEP * index as u32,
        }
    }

    /// Format: "{currency}{price}", price in its shortest form (20 not 20.0)
    pub fn price_label(&self, currency: &str) -> String {
        format!("{}{}", currency, self.current_price)
    }
}
