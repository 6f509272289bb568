pub mod handlers;
pub mod routes;
pub mod templates;

pub use handlers::{index_handler, result_handler};
pub use routes::create_http_routes;
