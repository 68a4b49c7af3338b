// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-slot style composition.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::compound::CompoundSelector;
use crate::props::{AxisValue, Props};
use crate::slots::SlotMap;
use crate::style_map::StyleMap;

#[derive(Debug)]
struct SlotStyleVariantsData {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<StyleMap>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<StyleMap>>>,
    compounds: Vec<(CompoundSelector, SlotMap<StyleMap>)>,
    defaults: Props,
}

/// A multi-slot style composer.
///
/// The slot fan-out of [`SlotClassVariants`](crate::SlotClassVariants)
/// combined with the shallow-overwrite merge of
/// [`StyleVariants`](crate::StyleVariants): each declared slot runs the
/// four-stage resolution independently, and every declared slot appears in
/// the result (an empty map when nothing targets it).
///
/// ```rust
/// use variantry::{Props, SlotMap, SlotStyleVariants, StyleMap};
///
/// let button = SlotStyleVariants::builder(["root", "icon"])
///     .base(SlotMap::from([
///         ("root", StyleMap::from([("padding", "8px")])),
///         ("icon", StyleMap::from([("width", "16px")])),
///     ]))
///     .variant(
///         "size",
///         "lg",
///         SlotMap::from([
///             ("root", StyleMap::from([("padding", "12px")])),
///             ("icon", StyleMap::from([("width", "20px")])),
///         ]),
///     )
///     .build();
///
/// let styles = button.resolve(&Props::new().set("size", "lg"));
/// assert_eq!(styles.get("root"), Some(&StyleMap::from([("padding", "12px")])));
/// assert_eq!(styles.get("icon"), Some(&StyleMap::from([("width", "20px")])));
/// ```
#[derive(Clone, Debug)]
pub struct SlotStyleVariants {
    inner: Rc<SlotStyleVariantsData>,
}

impl SlotStyleVariants {
    /// Starts building a composer over the given ordered slot names.
    #[must_use]
    pub fn builder<I>(slots: I) -> SlotStyleVariantsBuilder
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        SlotStyleVariantsBuilder::new(slots)
    }

    /// Resolves every declared slot's style map for the given props.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> SlotMap<StyleMap> {
        self.resolve_with(props, &SlotMap::new())
    }

    /// Resolves with per-slot caller overrides merged last.
    ///
    /// Overrides never participate in matching; an override naming an
    /// undeclared slot is ignored.
    #[must_use]
    pub fn resolve_with(&self, props: &Props, styles: &SlotMap<StyleMap>) -> SlotMap<StyleMap> {
        let data = &*self.inner;

        let mut acc: Vec<(Cow<'static, str>, StyleMap)> = data
            .slots
            .iter()
            .map(|slot| {
                let base = data.base.get(slot).cloned().unwrap_or_default();
                (slot.clone(), base)
            })
            .collect();

        // No variant axes: only the base and the override can contribute.
        if !data.variants.is_empty() {
            let merged = Props::merge_defined(&data.defaults, props);

            for (axis, value) in merged.iter() {
                let fragment = data
                    .variants
                    .get(axis)
                    .and_then(|by_value| by_value.get(value));
                if let Some(fragment) = fragment {
                    merge_fragments(&mut acc, fragment);
                }
            }

            for (selector, fragment) in &data.compounds {
                if selector.matches(&merged) {
                    merge_fragments(&mut acc, fragment);
                }
            }
        }

        merge_fragments(&mut acc, styles);

        let mut result = SlotMap::new();
        for (slot, style) in acc {
            result.insert(slot, style);
        }
        result
    }
}

fn merge_fragments(acc: &mut [(Cow<'static, str>, StyleMap)], fragment: &SlotMap<StyleMap>) {
    for (slot, style) in acc.iter_mut() {
        if let Some(addition) = fragment.get(slot) {
            style.merge_from(addition);
        }
    }
}

/// Builder for [`SlotStyleVariants`].
#[derive(Debug)]
pub struct SlotStyleVariantsBuilder {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<StyleMap>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<StyleMap>>>,
    compounds: Vec<(CompoundSelector, SlotMap<StyleMap>)>,
    defaults: Props,
}

impl SlotStyleVariantsBuilder {
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
        }
    }

    /// Sets the per-slot base properties applied before any variant.
    #[must_use]
    pub fn base(mut self, base: SlotMap<StyleMap>) -> Self {
        self.base = base;
        self
    }

    /// Registers the per-slot properties contributed when `axis` resolves to
    /// `value`.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
        fragment: SlotMap<StyleMap>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), fragment);
        self
    }

    /// Adds a compound rule; all matching rules apply, in declared order.
    #[must_use]
    pub fn compound(mut self, selector: CompoundSelector, fragment: SlotMap<StyleMap>) -> Self {
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

    /// Builds the composer.
    #[must_use]
    pub fn build(self) -> SlotStyleVariants {
        SlotStyleVariants {
            inner: Rc::new(SlotStyleVariantsData {
                slots: self.slots,
                base: self.base,
                variants: self.variants,
                compounds: self.compounds,
                defaults: self.defaults,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_slot_appears_as_an_empty_map() {
        let composer = SlotStyleVariants::builder(["root", "icon"]).build();
        let styles = composer.resolve(&Props::new());
        assert_eq!(styles.get("root"), Some(&StyleMap::new()));
        assert_eq!(styles.get("icon"), Some(&StyleMap::new()));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn per_slot_overwrite_semantics() {
        let composer = SlotStyleVariants::builder(["root"])
            .base(SlotMap::from([(
                "root",
                StyleMap::from([("color", "black"), ("padding", "4px")]),
            )]))
            .variant(
                "tone",
                "inverted",
                SlotMap::from([("root", StyleMap::from([("color", "white")]))]),
            )
            .build();

        let styles = composer.resolve(&Props::new().set("tone", "inverted"));
        assert_eq!(
            styles.get("root"),
            Some(&StyleMap::from([("color", "white"), ("padding", "4px")]))
        );
    }

    #[test]
    fn fragments_touch_only_their_slots() {
        let composer = SlotStyleVariants::builder(["root", "icon"])
            .variant(
                "size",
                "lg",
                SlotMap::from([("root", StyleMap::from([("padding", "12px")]))]),
            )
            .build();

        let styles = composer.resolve(&Props::new().set("size", "lg"));
        assert_eq!(
            styles.get("root"),
            Some(&StyleMap::from([("padding", "12px")]))
        );
        assert_eq!(styles.get("icon"), Some(&StyleMap::new()));
    }

    #[test]
    fn no_variants_short_circuit_merges_base_and_override() {
        let composer = SlotStyleVariants::builder(["root", "icon"])
            .base(SlotMap::from([(
                "root",
                StyleMap::from([("padding", "8px")]),
            )]))
            .build();

        let styles = composer.resolve_with(
            &Props::new(),
            &SlotMap::from([
                ("root", StyleMap::from([("padding", "0")])),
                ("ghost", StyleMap::from([("display", "none")])),
            ]),
        );
        assert_eq!(styles.get("root"), Some(&StyleMap::from([("padding", "0")])));
        assert_eq!(styles.get("icon"), Some(&StyleMap::new()));
        // Overrides for undeclared slots are dropped.
        assert_eq!(styles.get("ghost"), None);
    }

    #[test]
    fn compounds_merge_after_variants() {
        let composer = SlotStyleVariants::builder(["root"])
            .variant(
                "size",
                "lg",
                SlotMap::from([("root", StyleMap::from([("font-size", "24px")]))]),
            )
            .compound(
                CompoundSelector::new().when("size", "lg"),
                SlotMap::from([(
                    "root",
                    StyleMap::from([("font-size", "26px"), ("font-weight", "bold")]),
                )]),
            )
            .default_variant("size", "lg")
            .build();

        let styles = composer.resolve(&Props::new());
        assert_eq!(
            styles.get("root"),
            Some(&StyleMap::from([
                ("font-size", "26px"),
                ("font-weight", "bold"),
            ]))
        );
    }

    #[test]
    fn base_maps_are_never_mutated() {
        let composer = SlotStyleVariants::builder(["root"])
            .base(SlotMap::from([(
                "root",
                StyleMap::from([("color", "black")]),
            )]))
            .variant(
                "tone",
                "inverted",
                SlotMap::from([("root", StyleMap::from([("color", "white")]))]),
            )
            .build();

        let _ = composer.resolve(&Props::new().set("tone", "inverted"));
        let styles = composer.resolve(&Props::new());
        assert_eq!(
            styles.get("root"),
            Some(&StyleMap::from([("color", "black")]))
        );
    }
}
