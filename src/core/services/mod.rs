pub mod activity_api;
pub mod endpoints;
pub mod http;

pub use activity_api::*;
pub use endpoints::*;
pub use http::*;
