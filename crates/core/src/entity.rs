//! Entity base: identity + continuity across state changes.
//!
//! An entity is equal to another entity exactly when their identifiers are
//! equal; the rest of the state never participates. Concrete entities embed
//! [`Entity`] and delegate identity to it.

use std::hash::{Hash, Hasher};

use crate::error::{DomainError, DomainResult};

/// A fact recorded by an entity and awaiting dispatch.
///
/// The entity appends events but never interprets or clears them; draining
/// is the job of an external collaborator such as a repository.
pub trait DomainEvent: core::fmt::Debug + Send + Sync {
    /// Stable event name (e.g. "customer.renamed").
    fn name(&self) -> &'static str;
}

/// Generic entity base keyed on an identifier.
///
/// The id type's `Default` value (zero for integers, nil for UUIDs) marks an
/// unidentified entity and is rejected at construction.
#[derive(Debug)]
pub struct Entity<Id> {
    id: Id,
    events: Vec<Box<dyn DomainEvent>>,
}

impl<Id> Entity<Id>
where
    Id: Clone + Default + Eq + Hash + core::fmt::Debug,
{
    /// Create an entity with the given identifier.
    ///
    /// Fails with `InvalidArgument` when `id` is the type's default value.
    pub fn new(id: Id) -> DomainResult<Self> {
        if id == Id::default() {
            return Err(DomainError::invalid_argument(
                Some("id"),
                "entity id cannot be the default value for its type",
            ));
        }
        Ok(Self {
            id,
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Append a pending domain event, preserving insertion order.
    pub fn record(&mut self, event: impl DomainEvent + 'static) {
        self.events.push(Box::new(event));
    }

    /// The pending events, oldest first.
    pub fn events(&self) -> &[Box<dyn DomainEvent>] {
        &self.events
    }

    /// Drain the pending events for dispatch.
    ///
    /// Intended for the owning collaborator (repository, dispatcher), not
    /// for the entity's own logic.
    pub fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.events)
    }
}

impl<Id: Eq> PartialEq for Entity<Id> {
    fn eq(&self, other: &Self) -> bool {
        // Same-allocation fast path, then identity comparison.
        std::ptr::eq(self, other) || self.id == other.id
    }
}

impl<Id: Eq> Eq for Entity<Id> {}

impl<Id: Hash> Hash for Entity<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
