//! Small sequence helpers.

use std::iter;

/// Treat an optional sequence as a possibly-empty one.
pub trait NullSafe {
    type Iter: Iterator;

    /// The inner sequence unchanged when present, otherwise an empty
    /// sequence of the same element type.
    fn as_null_safe(self) -> Self::Iter;
}

impl<I: IntoIterator> NullSafe for Option<I> {
    type Iter = iter::Flatten<std::option::IntoIter<I>>;

    fn as_null_safe(self) -> Self::Iter {
        self.into_iter().flatten()
    }
}

/// Wrap a single value into a one-element sequence.
pub trait IntoSingleton: Sized {
    fn into_singleton(self) -> iter::Once<Self> {
        iter::once(self)
    }
}

impl<T> IntoSingleton for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_null_safe_passes_a_present_sequence_through() {
        let items: Vec<i32> = Some(vec![1, 2, 3]).as_null_safe().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn as_null_safe_turns_absence_into_an_empty_sequence() {
        let items: Vec<i32> = None::<Vec<i32>>.as_null_safe().collect();
        assert!(items.is_empty());
    }

    #[test]
    fn into_singleton_yields_exactly_one_element() {
        let items: Vec<&str> = "only".into_singleton().collect();
        assert_eq!(items, vec!["only"]);
    }
}
