//! Gateway Module
//!
//! Public-facing proxy in front of the items backend.
//!
//! # Endpoints
//! - `GET /health` - Gateway liveness
//! - `GET /api/health` - Gateway plus backend health
//! - `GET /api/items` - Proxied list
//! - `POST /api/items` - Proxied create
//! - `GET /api/items/:id` - Proxied get

pub mod client;
pub mod handlers;
pub mod routes;

pub use client::{BackendClient, BackendResponse};
pub use handlers::GatewayState;
pub use routes::create_gateway_router;
