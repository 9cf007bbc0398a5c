//! Request DTOs for the items API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::NewItem;

/// Longest item name the `items` table accepts.
pub const MAX_NAME_LENGTH: usize = 255;

/// Request body for item creation (POST /items)
///
/// # Fields
/// - `name`: Display name, required and non-empty
/// - `description`: Optional free text
/// - `price`: Required JSON number
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl CreateItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if !self.price.is_finite() {
            return Some("Price must be a finite number".to_string());
        }
        None
    }

    pub fn into_new_item(self) -> NewItem {
        NewItem {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}
