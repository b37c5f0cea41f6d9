//! Core types for Bramble.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod credential;
pub mod id;
pub mod product;
pub mod quantity;
pub mod slot;

pub use account::{Profile, Role, RoleParseError, SignupRequest};
pub use credential::AccessToken;
pub use id::ProductId;
pub use product::{CATEGORIES, Product, ProductDraft};
pub use quantity::Quantity;
pub use slot::Slot;
