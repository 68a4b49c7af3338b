// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound-variant selectors.
//!
//! A [`CompoundSelector`] is a conjunction of per-axis requirements tested
//! against the resolved props of one invocation. All composers share this
//! matching rule; every matching rule applies its fragment (cumulative, not
//! first-match-wins).

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::props::{AxisValue, Props};

/// The requirement a selector places on one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueMatch {
    /// The axis must resolve to exactly this value.
    One(AxisValue),
    /// The axis must resolve to one of these values.
    ///
    /// An empty list matches no value at all, so a selector carrying one can
    /// never fire.
    AnyOf(Vec<AxisValue>),
}

impl ValueMatch {
    fn matches(&self, value: &AxisValue) -> bool {
        match self {
            Self::One(required) => required == value,
            Self::AnyOf(required) => required.contains(value),
        }
    }
}

/// A conjunction of axis requirements for a compound variant.
///
/// A selector with no requirements matches every invocation. An axis that is
/// absent from the resolved props satisfies no requirement.
///
/// ```rust
/// use variantry::{CompoundSelector, Props};
///
/// let selector = CompoundSelector::new()
///     .when("color", "primary")
///     .when_any("size", ["md", "lg"]);
///
/// let props = Props::new().set("color", "primary").set("size", "lg");
/// assert!(selector.matches(&props));
///
/// let props = Props::new().set("color", "primary").set("size", "sm");
/// assert!(!selector.matches(&props));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    entries: Vec<(Cow<'static, str>, ValueMatch)>,
}

impl CompoundSelector {
    /// Creates a selector with no requirements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an axis to resolve to exactly `value`.
    #[must_use]
    pub fn when(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
    ) -> Self {
        self.entries
            .push((axis.into(), ValueMatch::One(value.into())));
        self
    }

    /// Requires an axis to resolve to one of `values`.
    #[must_use]
    pub fn when_any<V: Into<AxisValue>>(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.entries.push((
            axis.into(),
            ValueMatch::AnyOf(values.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Returns `true` if this selector has no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of axis requirements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every requirement is satisfied by `props`.
    #[must_use]
    pub fn matches(&self, props: &Props) -> bool {
        self.entries.iter().all(|(axis, required)| {
            props
                .get(axis)
                .is_some_and(|value| required.matches(value))
        })
    }
}
