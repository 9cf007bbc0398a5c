//! Request and Response models for the items API
//!
//! This module defines the domain records and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{Item, NewItem, Source, Sourced};
pub use requests::CreateItemRequest;
pub use responses::{
    BackendHealthResponse, CreateItemResponse, ErrorResponse, GatewayHealthResponse,
    HealthResponse, ItemListResponse, ItemResponse,
};
