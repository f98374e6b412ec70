pub mod insight_service;
pub mod list_loader;
pub mod product_creator;

pub use insight_service::InsightService;
pub use list_loader::ListLoader;
pub use product_creator::{ProductCreator, SubmitOutcome, ADD_FAILED_MESSAGE, INVALID_FORM_MESSAGE};
