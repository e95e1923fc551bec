// gradnet-data/src/datasets/traits.rs

use gradnet_core::GradnetError;

/// Indexed, read-only collection of items.
///
/// Trainers and evaluators only read from a dataset; it is never mutated
/// while a model consumes it.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `GradnetError::IndexOutOfBounds` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, GradnetError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + 'static> Dataset for [T] {
    type Item = T;

    fn get(&self, index: usize) -> Result<T, GradnetError> {
        <[T]>::get(self, index)
            .cloned()
            .ok_or(GradnetError::IndexOutOfBounds {
                index,
                len: <[T]>::len(self),
            })
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Clone + Send + 'static> Dataset for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<T, GradnetError> {
        Dataset::get(self.as_slice(), index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
