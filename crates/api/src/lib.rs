//! dns-edge HTTP layer: route dispatcher and response assembler.
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use handlers::CACHE_STATUS_HEADER;
pub use routes::create_api_routes;
pub use state::AppState;
