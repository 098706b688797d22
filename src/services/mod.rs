pub mod api_client;
pub mod session;

pub use api_client::{with_keywords, ApiClient};
