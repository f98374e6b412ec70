use products_api::Product;

use super::ProductCard;

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products tracked yet.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Is backend running?";

/// Everything the product list can show
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Empty,
    Error(String),
    Loaded(Vec<ProductCard>),
}

impl ListState {
    /// Cards in the order the products were received; an empty collection is `Empty`
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return ListState::Empty;
        }

        ListState::Loaded(
            products
                .iter()
                .enumerate()
                .map(|(index, product)| ProductCard::from_product(index, product))
                .collect(),
        )
    }

    pub fn load_failed() -> Self {
        ListState::Error(LOAD_FAILED_MESSAGE.to_string())
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ListState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    /// The single line shown instead of cards, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ListState::Loading => Some(LOADING_MESSAGE),
            ListState::Empty => Some(EMPTY_MESSAGE),
            ListState::Error(message) => Some(message),
            ListState::Loaded(_) => None,
        }
    }
}
