// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variantry Class: class-list values and flattening.
//!
//! This crate provides [`ClassValue`], a tree of class-list fragments
//! (strings, numbers, nested lists, and conditional dictionaries), and
//! [`flatten`], which collapses any number of fragments into one normalized,
//! space-separated class string.
//!
//! [`flatten`] is the default merge policy for the composers in the
//! `variantry` crate. Embedders that need a custom policy (deduplication,
//! utility-class conflict resolution, etc.) can implement [`ClassResolver`]
//! and inject it at composer construction time.
//!
//! ```rust
//! use variantry_class::{ClassValue, flatten};
//!
//! let values = [
//!     ClassValue::from("btn"),
//!     ClassValue::from(["px-4", "py-2"]),
//!     ClassValue::dict([("active", true), ("disabled", false)]),
//! ];
//! assert_eq!(flatten(&values), "btn px-4 py-2 active");
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// One fragment of a class list.
///
/// This mirrors the shapes accepted by `clsx`-style helpers: plain strings,
/// numbers (stringified), arbitrarily nested lists, and dictionaries whose
/// enabled entries contribute their key. [`ClassValue::Null`] contributes
/// nothing and is the conversion target for values that class lists ignore
/// (`None`, bare booleans).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    Null,
    /// A class string; may contain several whitespace-separated classes.
    Str(Cow<'static, str>),
    /// A number, stringified on flattening.
    Num(i64),
    /// A nested list of fragments, flattened recursively.
    List(Vec<ClassValue>),
    /// Class names paired with an enabled flag; only enabled entries
    /// contribute.
    Dict(Vec<(Cow<'static, str>, bool)>),
}

impl ClassValue {
    /// Constructs a dictionary fragment from `(class, enabled)` pairs.
    ///
    /// ```rust
    /// use variantry_class::{ClassValue, flatten};
    ///
    /// let value = ClassValue::dict([("foo", true), ("bar", false)]);
    /// assert_eq!(flatten(&[value]), "foo");
    /// ```
    #[must_use]
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(name, enabled)| (name.into(), enabled))
                .collect(),
        )
    }

    /// Returns `true` if flattening this fragment yields no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.trim().is_empty(),
            Self::Num(_) => false,
            Self::List(items) => items.iter().all(Self::is_empty),
            Self::Dict(entries) => entries
                .iter()
                .all(|(name, enabled)| !enabled || name.trim().is_empty()),
        }
    }
}

impl From<&'static str> for ClassValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for ClassValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        Self::Num(i64::from(value))
    }
}

/// Bare booleans contribute nothing, matching `clsx` semantics where they
/// appear as byproducts of `cond && "class"` expressions.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        Self::Null
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<ClassValue>> for ClassValue {
    fn from(value: Vec<ClassValue>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&flatten(core::slice::from_ref(self)))
    }
}

/// Flattens fragments into one space-separated class string.
///
/// Fragments are visited in order; lists recurse, dictionaries contribute
/// their enabled keys, and everything else stringifies. Each fragment is
/// whitespace-normalized (leading/trailing whitespace trimmed, internal runs
/// collapsed to single spaces) and empty fragments are dropped.
///
/// ```rust
/// use variantry_class::{ClassValue, flatten};
///
/// let values = [
///     ClassValue::from("  foo  bar "),
///     ClassValue::Null,
///     ClassValue::from(7),
/// ];
/// assert_eq!(flatten(&values), "foo bar 7");
/// ```
#[must_use]
pub fn flatten(values: &[ClassValue]) -> String {
    let mut out = String::new();
    for value in values {
        push_value(value, &mut out);
    }
    out
}

fn push_value(value: &ClassValue, out: &mut String) {
    match value {
        ClassValue::Null => {}
        ClassValue::Str(s) => push_fragment(s, out),
        ClassValue::Num(n) => push_fragment(&n.to_string(), out),
        ClassValue::List(items) => {
            for item in items {
                push_value(item, out);
            }
        }
        ClassValue::Dict(entries) => {
            for (name, enabled) in entries {
                if *enabled {
                    push_fragment(name, out);
                }
            }
        }
    }
}

fn push_fragment(fragment: &str, out: &mut String) {
    for word in fragment.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
}

/// The injectable "merge class fragments into one string" capability.
///
/// Composers in the `variantry` crate accept a `ClassResolver` at
/// construction time and route every resolved fragment list through it. The
/// default is [`Flattener`]. Closures with the matching signature implement
/// this trait, so ad-hoc policies need no wrapper type:
///
/// ```rust
/// use variantry_class::{ClassResolver, ClassValue, flatten};
///
/// let shouty = |values: &[ClassValue]| flatten(values).to_uppercase();
/// assert_eq!(shouty.resolve(&[ClassValue::from("btn")]), "BTN");
/// ```
pub trait ClassResolver {
    /// Merges class fragments into a single class string.
    fn resolve(&self, values: &[ClassValue]) -> String;
}

/// The default [`ClassResolver`]: plain [`flatten`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Flattener;

impl ClassResolver for Flattener {
    fn resolve(&self, values: &[ClassValue]) -> String {
        flatten(values)
    }
}

impl<F> ClassResolver for F
where
    F: Fn(&[ClassValue]) -> String,
{
    fn resolve(&self, values: &[ClassValue]) -> String {
        self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(flatten(&[]), "");
    }

    #[test]
    fn ignored_values_yield_empty_string() {
        let values = [
            ClassValue::Null,
            ClassValue::from(false),
            ClassValue::from(true),
            ClassValue::from(""),
            ClassValue::from(Option::<&str>::None),
        ];
        assert_eq!(flatten(&values), "");
    }

    #[test]
    fn strings_join_with_single_spaces() {
        assert_eq!(flatten(&[ClassValue::from("foo")]), "foo");
        let values = [ClassValue::from("foo"), ClassValue::from("bar")];
        assert_eq!(flatten(&values), "foo bar");
    }

    #[test]
    fn numbers_stringify() {
        let values = [ClassValue::from(1), ClassValue::from(2_i64)];
        assert_eq!(flatten(&values), "1 2");
    }

    #[test]
    fn lists_flatten_recursively() {
        let values = [ClassValue::from(["foo", "bar"])];
        assert_eq!(flatten(&values), "foo bar");

        let nested = ClassValue::List(vec![
            ClassValue::from("foo"),
            ClassValue::List(vec![ClassValue::from("bar")]),
        ]);
        assert_eq!(flatten(&[nested]), "foo bar");
    }

    #[test]
    fn dicts_contribute_enabled_keys() {
        let value = ClassValue::dict([("foo", true), ("bar", false)]);
        assert_eq!(flatten(&[value]), "foo");

        let value = ClassValue::dict([("foo", true), ("bar", true)]);
        assert_eq!(flatten(&[value]), "foo bar");

        let value = ClassValue::dict([("foo-bar", true)]);
        assert_eq!(flatten(&[value]), "foo-bar");
    }

    #[test]
    fn mixed_inputs() {
        let values = [
            ClassValue::from("foo"),
            ClassValue::dict([("bar", true)]),
            ClassValue::from(["baz"]),
        ];
        assert_eq!(flatten(&values), "foo bar baz");

        let values = [
            ClassValue::from("foo"),
            ClassValue::dict([("bar", false)]),
            ClassValue::List(vec![ClassValue::from("baz"), ClassValue::Null]),
        ];
        assert_eq!(flatten(&values), "foo baz");
    }

    #[test]
    fn whitespace_is_normalized() {
        let values = [ClassValue::from("  foo   bar "), ClassValue::from("\tbaz\n")];
        assert_eq!(flatten(&values), "foo bar baz");
    }

    #[test]
    fn is_empty_matches_flatten_output() {
        assert!(ClassValue::Null.is_empty());
        assert!(ClassValue::from("   ").is_empty());
        assert!(ClassValue::List(vec![ClassValue::Null]).is_empty());
        assert!(ClassValue::dict([("foo", false)]).is_empty());
        assert!(!ClassValue::from("foo").is_empty());
        assert!(!ClassValue::from(0).is_empty());
        assert!(!ClassValue::dict([("foo", true)]).is_empty());
    }

    #[test]
    fn display_flattens_a_single_value() {
        let value = ClassValue::from(["foo", " bar "]);
        assert_eq!(value.to_string(), "foo bar");
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |values: &[ClassValue]| flatten(values).to_uppercase();
        assert_eq!(resolver.resolve(&[ClassValue::from("btn")]), "BTN");
        assert_eq!(Flattener.resolve(&[ClassValue::from("btn")]), "btn");
    }
}
