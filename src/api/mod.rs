//! API Gateway
//!
//! URL resolution, the shared request/normalization template, and one
//! function per backend operation.

pub mod client;
pub mod config;
pub mod error;

pub use client::{
    add_list, create_product, create_user, delete_list, delete_product, fetch_lists,
    fetch_products, login, LoginOutcome,
};
pub use error::ApiError;
