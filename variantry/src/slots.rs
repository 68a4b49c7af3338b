// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot-keyed maps.
//!
//! Multi-slot composers key every fragment by slot name: the base, each
//! variant value's fragment, each compound fragment, per-invocation
//! overrides, and the result itself are all [`SlotMap`]s. Configuration-side
//! maps are partial (absent slots contribute nothing); result maps always
//! carry every declared slot, in declared order.

use alloc::borrow::Cow;
use alloc::vec::Vec;

/// An insertion-ordered slot-name→value map.
///
/// ```rust
/// use variantry::SlotMap;
///
/// let base: SlotMap<&str> = SlotMap::new().slot("root", "btn").slot("icon", "btn-icon");
/// assert_eq!(base.get("root"), Some(&"btn"));
/// assert_eq!(base.get("label"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotMap<T> {
    entries: Vec<(Cow<'static, str>, T)>,
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> SlotMap<T> {
    /// Creates an empty slot map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a slot, consuming and returning the map.
    #[must_use]
    pub fn slot(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<T>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the value for a slot, replacing any existing value.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<T>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(slot, _)| *slot == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value for a slot, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the slot is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns `true` if this map has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over `(slot, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries
            .iter()
            .map(|(slot, value)| (slot.as_ref(), value))
    }

    /// Returns an iterator over slot names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(slot, _)| slot.as_ref())
    }
}

impl<K, V, T, const N: usize> From<[(K, V); N]> for SlotMap<T>
where
    K: Into<Cow<'static, str>>,
    V: Into<T>,
{
    fn from(entries: [(K, V); N]) -> Self {
        let mut map = Self::new();
        for (name, value) in entries {
            map.insert(name, value);
        }
        map
    }
}
