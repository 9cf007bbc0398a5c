//! API Module
//!
//! HTTP handlers and routing for the items REST API.
//!
//! # Endpoints
//! - `GET /health` - Store and cache health
//! - `GET /items` - List all items
//! - `GET /items/:id` - Get one item
//! - `POST /items` - Create an item

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
