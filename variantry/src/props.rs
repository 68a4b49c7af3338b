// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis values and per-invocation props.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// One selected value on a variant axis.
///
/// Axis values are keyed by string. Boolean axes key their configuration by
/// the literal names `"true"` and `"false"`; the `From<bool>` conversion here
/// is the single place that stringification happens, so callers pass native
/// booleans and lookups still hit the string-keyed tables.
///
/// ```rust
/// use variantry::AxisValue;
///
/// assert_eq!(AxisValue::from("lg").as_str(), "lg");
/// assert_eq!(AxisValue::from(true).as_str(), "true");
/// assert_eq!(AxisValue::from(false).as_str(), "false");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisValue(Cow<'static, str>);

impl AxisValue {
    /// Returns the value as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for AxisValue {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for AxisValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self(value)
    }
}

impl From<bool> for AxisValue {
    fn from(value: bool) -> Self {
        Self(Cow::Borrowed(if value { "true" } else { "false" }))
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Axis selections for one composer invocation.
///
/// `Props` is an insertion-ordered axis→value map with JS-object assignment
/// semantics: setting an axis that is already present overwrites its value in
/// place (keeping its position), setting a new axis appends. Iteration order
/// is observable — the style composers apply variant fragments in this order,
/// so a later axis wins property conflicts over an earlier one.
///
/// ```rust
/// use variantry::Props;
///
/// let props = Props::new().set("color", "primary").set("disabled", true);
/// assert_eq!(props.get("color").map(|v| v.as_str()), Some("primary"));
/// assert_eq!(props.get("disabled").map(|v| v.as_str()), Some("true"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props {
    entries: Vec<(Cow<'static, str>, AxisValue)>,
}

impl Props {
    /// Creates an empty set of props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a value for an axis.
    #[must_use]
    pub fn set(mut self, axis: impl Into<Cow<'static, str>>, value: impl Into<AxisValue>) -> Self {
        self.insert(axis.into(), value.into());
        self
    }

    /// Selects a value for an axis, ignoring `None`.
    ///
    /// An explicitly absent value never masks a configured default — this is
    /// the `undefined`-tolerant merge of the original props objects.
    ///
    /// ```rust
    /// use variantry::Props;
    ///
    /// let props = Props::new().set_opt("size", Option::<&str>::None);
    /// assert!(props.get("size").is_none());
    /// ```
    #[must_use]
    pub fn set_opt<V: Into<AxisValue>>(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value {
            self.insert(axis.into(), value.into());
        }
        self
    }

    fn insert(&mut self, axis: Cow<'static, str>, value: AxisValue) {
        match self.entries.iter_mut().find(|(name, _)| *name == axis) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((axis, value)),
        }
    }

    /// Returns the selected value for an axis, if any.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&AxisValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }

    /// Returns `true` if no axis is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of selected axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over `(axis, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisValue)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_ref(), value))
    }

    /// Merges caller props over defaults.
    ///
    /// Defaults come first in their declared order; caller values overwrite
    /// in place or append, reproducing `{ ...defaults, ...compact(props) }`
    /// key order.
    pub(crate) fn merge_defined(defaults: &Self, props: &Self) -> Self {
        let mut merged = defaults.clone();
        for (axis, value) in &props.entries {
            merged.insert(axis.clone(), value.clone());
        }
        merged
    }
}
