// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style maps.
//!
//! [`StyleMap`] is the style-composer payload: a CSS property→value map with
//! shallow-overwrite merge semantics (the `Object.assign` analog). Values are
//! stored in a vector sorted by property name for binary-search lookup.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A CSS property value: a string or a bare number.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A textual value (`"14px"`, `"bold"`, `"var(--accent)"`).
    Str(Cow<'static, str>),
    /// A unitless numeric value (`opacity`, `z-index`, `flex-grow`).
    Num(f64),
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for StyleValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

/// An inline-style property map.
///
/// Properties are stored sorted by name, so lookup is O(log n) and iteration
/// order is name order. [`StyleMap::merge_from`] overwrites identically-named
/// properties and accumulates the rest; the source map is never mutated.
///
/// ```rust
/// use variantry::StyleMap;
///
/// let mut style = StyleMap::from([("color", "black"), ("font-size", "14px")]);
/// style.merge_from(&StyleMap::from([("color", "white")]));
///
/// assert_eq!(style.get("color").map(ToString::to_string), Some("white".into()));
/// assert_eq!(style.get("font-size").map(ToString::to_string), Some("14px".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    /// Sorted by property name for binary search lookup.
    entries: Vec<(Cow<'static, str>, StyleValue)>,
}

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this map has no properties.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value for a property, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .binary_search_by(|(name, _)| name.as_ref().cmp(property))
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Sets a property value, replacing any existing value.
    pub fn insert(&mut self, property: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) {
        let property = property.into();
        let value = value.into();
        match self
            .entries
            .binary_search_by(|(name, _)| name.as_ref().cmp(property.as_ref()))
        {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (property, value)),
        }
    }

    /// Sets a property value, consuming and returning the map.
    ///
    /// Chainable construction in the builder idiom:
    ///
    /// ```rust
    /// use variantry::StyleMap;
    ///
    /// let style = StyleMap::new().with("color", "black").with("opacity", 0.5);
    /// assert_eq!(style.len(), 2);
    /// ```
    #[must_use]
    pub fn with(
        mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.insert(property, value);
        self
    }

    /// Shallow-overwrite merge: copies every property of `other` into `self`.
    ///
    /// Identically-named properties take `other`'s value; the rest accumulate.
    pub fn merge_from(&mut self, other: &Self) {
        for (property, value) in &other.entries {
            self.insert(property.clone(), value.clone());
        }
    }

    /// Returns an iterator over `(property, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleMap
where
    K: Into<Cow<'static, str>>,
    V: Into<StyleValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<Cow<'static, str>>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}
