// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-slot class composition.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use variantry_class::{ClassResolver, ClassValue, Flattener};

use crate::compound::CompoundSelector;
use crate::props::{AxisValue, Props};
use crate::slots::SlotMap;

type SlotAccumulator = Vec<(Cow<'static, str>, SmallVec<[ClassValue; 8]>)>;

struct SlotClassVariantsData {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<ClassValue>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<ClassValue>>>,
    compounds: Vec<(CompoundSelector, SlotMap<ClassValue>)>,
    defaults: Props,
    resolver: Rc<dyn ClassResolver>,
}

/// A multi-slot class composer.
///
/// Each fragment — base, per-value, compound, override — is a partial
/// [`SlotMap`] of class values; each declared slot accumulates its own
/// fragments through the same four stages as
/// [`ClassVariants`](crate::ClassVariants) and flattens independently.
/// Fragments naming an undeclared slot are ignored, and every declared slot
/// appears in the result (empty string when nothing targets it).
///
/// ```rust
/// use variantry::{Props, SlotClassVariants, SlotMap};
///
/// let button = SlotClassVariants::builder(["root", "icon"])
///     .base(SlotMap::from([("root", "btn"), ("icon", "btn-icon")]))
///     .variant("size", "sm", SlotMap::from([("root", "btn-sm"), ("icon", "icon-sm")]))
///     .variant("size", "lg", SlotMap::from([("root", "btn-lg"), ("icon", "icon-lg")]))
///     .default_variant("size", "sm")
///     .build();
///
/// let classes = button.resolve(&Props::new().set("size", "lg"));
/// assert_eq!(classes.get("root").map(String::as_str), Some("btn btn-lg"));
/// assert_eq!(classes.get("icon").map(String::as_str), Some("btn-icon icon-lg"));
/// ```
#[derive(Clone)]
pub struct SlotClassVariants {
    inner: Rc<SlotClassVariantsData>,
}

impl fmt::Debug for SlotClassVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotClassVariants")
            .field("slots", &self.inner.slots)
            .field("base", &self.inner.base)
            .field("variants", &self.inner.variants)
            .field("compounds", &self.inner.compounds)
            .field("defaults", &self.inner.defaults)
            .finish_non_exhaustive()
    }
}

impl SlotClassVariants {
    /// Starts building a composer over the given ordered slot names.
    #[must_use]
    pub fn builder<I>(slots: I) -> SlotClassVariantsBuilder
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        SlotClassVariantsBuilder::new(slots)
    }

    /// Resolves every declared slot's class string for the given props.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> SlotMap<String> {
        self.resolve_with(props, &SlotMap::new())
    }

    /// Resolves with per-slot caller overrides appended last.
    ///
    /// Overrides never participate in matching; an override naming an
    /// undeclared slot is ignored.
    #[must_use]
    pub fn resolve_with(
        &self,
        props: &Props,
        class_names: &SlotMap<ClassValue>,
    ) -> SlotMap<String> {
        let data = &*self.inner;
        let merged = Props::merge_defined(&data.defaults, props);

        let mut acc: SlotAccumulator = data
            .slots
            .iter()
            .map(|slot| (slot.clone(), SmallVec::new()))
            .collect();

        push_fragments(&mut acc, &data.base);

        for (axis, value) in merged.iter() {
            let fragment = data
                .variants
                .get(axis)
                .and_then(|by_value| by_value.get(value));
            if let Some(fragment) = fragment {
                push_fragments(&mut acc, fragment);
            }
        }

        for (selector, fragment) in &data.compounds {
            if selector.matches(&merged) {
                push_fragments(&mut acc, fragment);
            }
        }

        push_fragments(&mut acc, class_names);

        let mut result = SlotMap::new();
        for (slot, values) in acc {
            result.insert(slot, data.resolver.resolve(&values));
        }
        result
    }
}

fn push_fragments(acc: &mut SlotAccumulator, fragment: &SlotMap<ClassValue>) {
    for (slot, value) in fragment.iter() {
        // Undeclared slots have no accumulator and are skipped.
        if let Some((_, values)) = acc.iter_mut().find(|(name, _)| name.as_ref() == slot) {
            values.push(value.clone());
        }
    }
}

/// Builder for [`SlotClassVariants`].
pub struct SlotClassVariantsBuilder {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<ClassValue>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<ClassValue>>>,
    compounds: Vec<(CompoundSelector, SlotMap<ClassValue>)>,
    defaults: Props,
    resolver: Rc<dyn ClassResolver>,
}

impl fmt::Debug for SlotClassVariantsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotClassVariantsBuilder")
            .field("slots", &self.slots)
            .field("base", &self.base)
            .field("variants", &self.variants)
            .field("compounds", &self.compounds)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl SlotClassVariantsBuilder {
    /// Creates a builder over the given ordered slot names.
    #[must_use]
    pub fn new<I>(slots: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
            base: SlotMap::new(),
            variants: HashMap::new(),
            compounds: Vec::new(),
            defaults: Props::new(),
            resolver: Rc::new(Flattener),
        }
    }

    /// Sets the per-slot base classes applied before any variant.
    #[must_use]
    pub fn base(mut self, base: SlotMap<ClassValue>) -> Self {
        self.base = base;
        self
    }

    /// Registers the per-slot classes contributed when `axis` resolves to
    /// `value`.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
        fragment: SlotMap<ClassValue>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), fragment);
        self
    }

    /// Adds a compound rule; all matching rules apply, in declared order.
    #[must_use]
    pub fn compound(mut self, selector: CompoundSelector, fragment: SlotMap<ClassValue>) -> Self {
        self.compounds.push((selector, fragment));
        self
    }

    /// Sets the value used for `axis` when the caller does not supply one.
    #[must_use]
    pub fn default_variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
    ) -> Self {
        self.defaults = self.defaults.set(axis, value);
        self
    }

    /// Replaces the default flattening resolver with a custom merge policy.
    #[must_use]
    pub fn class_resolver(mut self, resolver: impl ClassResolver + 'static) -> Self {
        self.resolver = Rc::new(resolver);
        self
    }

    /// Builds the composer.
    #[must_use]
    pub fn build(self) -> SlotClassVariants {
        SlotClassVariants {
            inner: Rc::new(SlotClassVariantsData {
                slots: self.slots,
                base: self.base,
                variants: self.variants,
                compounds: self.compounds,
                defaults: self.defaults,
                resolver: self.resolver,
            }),
        }
    }
}
