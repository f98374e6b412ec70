pub mod http;
pub mod traits;

pub use http::HttpProductApi;
pub use traits::ProductApi;
