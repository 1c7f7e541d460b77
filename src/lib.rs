//! Embedded state store for the Boutique storefront and its admin console.
//!
//! The store holds the product catalog, contact-form messages, the favorite
//! set, and the current session in memory, mirroring each collection
//! synchronously to a durable key-value backend. Presentation code calls
//! the mutation operations and reads the collections; it never touches
//! storage directly.

pub mod config;
pub mod dto;
pub mod error;
mod ids;
pub mod models;
pub mod query;
pub mod seed;
pub mod storage;
pub mod store;
pub mod subscriptions;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::Store;
pub use subscriptions::{Change, SubscriptionId};
