//! `keel-core` — shared-kernel building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure, no
//! time concerns): guard clauses, entity/value-object equality semantics,
//! and small sequence helpers.

pub mod entity;
pub mod error;
pub mod ext;
pub mod guard;
pub mod value_object;

pub use entity::{DomainEvent, Entity};
pub use error::{DomainError, DomainResult};
pub use ext::{IntoSingleton, NullSafe};
pub use value_object::{StructuralHasher, ValueObject};
