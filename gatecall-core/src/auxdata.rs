//! The typed auxiliary-data accumulator.
//!
//! [`AuxData`] is the per-invocation accumulator shared by the auxiliary
//! step chain and the terminal handler. Entries are keyed by type, so a
//! step contributes data by defining a type for it; later contributions of
//! the same type overwrite earlier ones (last-write-wins), and entries are
//! never removed. The accumulator is single-owner and never crosses an
//! invocation boundary, so no synchronization is involved.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// The accumulated auxiliary data of one invocation.
///
/// Starts empty; each step's [`AuxUpdate`] is merged in before the next
/// step runs.
#[derive(Default)]
pub struct AuxData {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AuxData {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value of the same type if one
    /// was present.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    /// Get a reference to the value of type `T`, if contributed.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Whether a value of type `T` has been contributed.
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of distinct entry types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no step has contributed anything yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_boxed(&mut self, id: TypeId, value: Box<dyn Any + Send + Sync>) {
        self.entries.insert(id, value);
    }
}

impl std::fmt::Debug for AuxData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuxData").field("len", &self.len()).finish()
    }
}

/// The partial update a step may contribute.
///
/// Entries are applied to [`AuxData`] in insertion order once the step has
/// fully completed, so a later entry of the same type wins even within one
/// update.
#[derive(Default)]
pub struct AuxUpdate {
    entries: Vec<(TypeId, Box<dyn Any + Send + Sync>)>,
}

impl AuxUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder-style.
    pub fn with<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Add a value.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) {
        self.entries.push((TypeId::of::<T>(), Box::new(value)));
    }

    /// Number of entries in this update.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this update contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge this update into the accumulator, overwriting entries of the
    /// same type.
    pub fn apply(self, aux: &mut AuxData) {
        for (id, value) in self.entries {
            aux.insert_boxed(id, value);
        }
    }
}

impl std::fmt::Debug for AuxUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuxUpdate")
            .field("len", &self.len())
            .finish()
    }
}
