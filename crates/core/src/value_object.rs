//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are
//! defined entirely by their attribute values. Two value objects with the
//! same values are considered equal.
//!
//! Rather than a base class, value semantics here are a capability trait:
//! implementors supply the two core operations (`equals_core`,
//! `hash_core`) and [`impl_value_semantics!`] derives the standard
//! `PartialEq`/`Eq`/`Hash` machinery on top of them.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Capability trait for value objects.
///
/// Value objects should be **immutable** - to "modify" one, build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (same field values means equal)
/// - **Entity**: has identity (same id means the same entity)
///
/// ## Contract
///
/// `equals_core` must compare exactly the fields that `hash_core` mixes, so
/// equal objects always produce equal hashes. Cross-type comparison is ruled
/// out by the `Self`-typed signature.
pub trait ValueObject: core::fmt::Debug {
    /// Field-by-field structural comparison.
    fn equals_core(&self, other: &Self) -> bool;

    /// Deterministic combination of all significant fields, in declared
    /// field order. Use [`StructuralHasher`].
    fn hash_core(&self) -> u64;
}

const SEED: u64 = 521;
const MULTIPLIER: u64 = 467;

/// Stable multiplicative field mixer backing [`ValueObject::hash_core`].
///
/// `state = state * MULTIPLIER ^ hash(field)` per field, wrapping. The field
/// hash comes from the standard `DefaultHasher`, which is deterministic.
#[derive(Debug)]
pub struct StructuralHasher {
    state: u64,
}

impl StructuralHasher {
    pub fn new() -> Self {
        Self { state: SEED }
    }

    /// Mix one field into the running state.
    pub fn field<T: Hash>(mut self, value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        self.state = self.state.wrapping_mul(MULTIPLIER) ^ hasher.finish();
        self
    }

    pub fn finish(self) -> u64 {
        self.state
    }
}

impl Default for StructuralHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive `PartialEq`, `Eq`, and `Hash` for a [`ValueObject`] from its two
/// core operations.
#[macro_export]
macro_rules! impl_value_semantics {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::value_object::ValueObject::equals_core(self, other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::value_object::ValueObject::hash_core(self));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Money {
        amount: i64,
        currency: String,
    }

    impl ValueObject for Money {
        fn equals_core(&self, other: &Self) -> bool {
            self.amount == other.amount && self.currency == other.currency
        }

        fn hash_core(&self) -> u64 {
            StructuralHasher::new()
                .field(&self.amount)
                .field(&self.currency)
                .finish()
        }
    }

    impl_value_semantics!(Money);

    fn usd(amount: i64) -> Money {
        Money {
            amount,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn equal_fields_compare_equal() {
        assert_eq!(usd(100), usd(100));
    }

    #[test]
    fn differing_amount_compares_unequal() {
        assert_ne!(usd(100), usd(101));
    }

    #[test]
    fn differing_currency_compares_unequal() {
        let eur = Money {
            amount: 100,
            currency: "EUR".to_string(),
        };
        assert_ne!(usd(100), eur);
    }

    #[test]
    fn equal_fields_hash_identically() {
        assert_eq!(usd(100).hash_core(), usd(100).hash_core());
    }

    #[test]
    fn differing_fields_hash_differently() {
        assert_ne!(usd(100).hash_core(), usd(101).hash_core());
    }

    #[test]
    fn field_order_matters_to_the_mixer() {
        let ab = StructuralHasher::new().field(&1u8).field(&2u8).finish();
        let ba = StructuralHasher::new().field(&2u8).field(&1u8).finish();
        assert_ne!(ab, ba);
    }

    proptest! {
        #[test]
        fn equality_and_hash_stay_consistent(amount in any::<i64>(), other in any::<i64>()) {
            let a = usd(amount);
            let b = usd(amount);
            let c = usd(other);

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.hash_core(), b.hash_core());
            prop_assert_eq!(a == c, amount == other);
        }
    }
}
