//! Test utilities and reference models for Silo development.
//!
//! Provides a `Vec`-backed [`ModelArena`] with the same swap-delete
//! semantics as `BucketArena`, an [`ArenaOp`] script type for model-based
//! tests, and the fixtures in [`fixtures`].
//!
//! This crate deliberately depends on nothing else in the workspace so the
//! storage crates can use it as a dev-dependency.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{index_sequence, Payload};

/// One step of a scripted arena workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaOp<T> {
    Push(T),
    /// Delete the element at this raw index. Scripts may produce indices
    /// past the end to exercise the out-of-bounds path.
    Delete(usize),
    Pop,
    Prune,
}

/// Reference implementation of the arena contract on top of `Vec`.
///
/// `delete` uses `Vec::swap_remove`, which has exactly the reordering
/// behaviour of the bucketed arena. Removal on bad input returns `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelArena<T> {
    items: Vec<T>,
}

impl<T> ModelArena<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn delete(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.swap_remove(index))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Live elements in logical index order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_delete_moves_last_into_hole() {
        let mut model = ModelArena::new();
        for v in 0..5 {
            model.push(v);
        }
        assert_eq!(model.delete(1), Some(1));
        assert_eq!(model.as_slice(), &[0, 4, 2, 3]);
    }

    #[test]
    fn model_rejects_bad_indices() {
        let mut model: ModelArena<u8> = ModelArena::new();
        assert_eq!(model.delete(0), None);
        assert_eq!(model.pop(), None);
        assert!(model.is_empty());
    }
}
