//! `quickbill-core` — domain building blocks shared by the invoice crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::DomainError;
pub use id::{InvoiceId, LineItemId};
pub use money::Money;
pub use value_object::ValueObject;
