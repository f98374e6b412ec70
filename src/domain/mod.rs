pub mod card;
pub mod list_state;
pub mod product_form;

pub use card::{ProductCard, REVEAL_STEP};
pub use list_state::{ListState, EMPTY_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_MESSAGE};
pub use product_form::ProductForm;
