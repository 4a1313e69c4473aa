// Atomic API modules
pub mod blocks;
pub mod client;
pub mod database;
pub mod error;
pub mod plans;
pub mod properties;

// Re-export commonly used functions
pub use blocks::{list_block_children, load_page_content, normalize_block};
pub use client::api_call;
pub use database::query_plan_database;
pub use error::ApiError;
pub use plans::load_plans;
pub use properties::{property_value, PropertyValue};
