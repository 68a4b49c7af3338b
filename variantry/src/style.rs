// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-target style composition.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::compound::CompoundSelector;
use crate::props::{AxisValue, Props};
use crate::style_map::StyleMap;

#[derive(Debug)]
struct StyleVariantsData {
    base: StyleMap,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, StyleMap>>,
    compounds: Vec<(CompoundSelector, StyleMap)>,
    defaults: Props,
}

/// A single-target style composer.
///
/// The same four-stage resolution as [`ClassVariants`](crate::ClassVariants)
/// — base → matched variants → matched compounds → override — but the payload
/// is a [`StyleMap`] and merging is shallow overwrite rather than
/// concatenation: each later stage overwrites identically-named properties
/// and accumulates the rest. Because of that, variant application order is
/// observable: a later axis wins a property conflict over an earlier one.
///
/// Every merge copies; neither the configuration nor caller-supplied maps
/// are ever mutated.
///
/// ```rust
/// use variantry::{Props, StyleMap, StyleVariants};
///
/// let text = StyleVariants::builder()
///     .base(StyleMap::from([("color", "black"), ("font-size", "14px")]))
///     .variant("tone", "inverted", StyleMap::from([("color", "white")]))
///     .build();
///
/// let style = text.resolve(&Props::new().set("tone", "inverted"));
/// assert_eq!(style, StyleMap::from([("color", "white"), ("font-size", "14px")]));
/// ```
#[derive(Clone, Debug)]
pub struct StyleVariants {
    inner: Rc<StyleVariantsData>,
}

impl StyleVariants {
    /// Starts building a composer.
    #[must_use]
    pub fn builder() -> StyleVariantsBuilder {
        StyleVariantsBuilder::new()
    }

    /// Resolves the style map for the given props.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> StyleMap {
        self.resolve_with(props, &StyleMap::new())
    }

    /// Resolves the style map with a caller override merged last.
    ///
    /// The override never participates in variant or compound matching.
    #[must_use]
    pub fn resolve_with(&self, props: &Props, style: &StyleMap) -> StyleMap {
        let data = &*self.inner;

        let mut result = data.base.clone();

        // No variant axes: nothing can match, skip the props merge entirely.
        if data.variants.is_empty() {
            result.merge_from(style);
            return result;
        }

        let merged = Props::merge_defined(&data.defaults, props);

        for (axis, value) in merged.iter() {
            let fragment = data
                .variants
                .get(axis)
                .and_then(|by_value| by_value.get(value));
            if let Some(fragment) = fragment {
                result.merge_from(fragment);
            }
        }

        for (selector, fragment) in &data.compounds {
            if selector.matches(&merged) {
                result.merge_from(fragment);
            }
        }

        result.merge_from(style);
        result
    }
}

/// Builder for [`StyleVariants`].
#[derive(Debug, Default)]
pub struct StyleVariantsBuilder {
    base: StyleMap,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, StyleMap>>,
    compounds: Vec<(CompoundSelector, StyleMap)>,
    defaults: Props,
}

impl StyleVariantsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base properties applied before any variant.
    #[must_use]
    pub fn base(mut self, style: StyleMap) -> Self {
        self.base = style;
        self
    }

    /// Registers the properties contributed when `axis` resolves to `value`.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
        style: StyleMap,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), style);
        self
    }

    /// Adds a compound rule; all matching rules apply, in declared order.
    #[must_use]
    pub fn compound(mut self, selector: CompoundSelector, style: StyleMap) -> Self {
        self.compounds.push((selector, style));
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
    pub fn build(self) -> StyleVariants {
        StyleVariants {
            inner: Rc::new(StyleVariantsData {
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
    fn empty_configuration_yields_empty_map() {
        let composer = StyleVariants::builder().build();
        assert_eq!(composer.resolve(&Props::new()), StyleMap::new());
    }

    #[test]
    fn base_only() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "red"), ("font-size", "14px")]))
            .build();

        assert_eq!(
            composer.resolve(&Props::new()),
            StyleMap::from([("color", "red"), ("font-size", "14px")])
        );
    }

    #[test]
    fn later_stage_overwrites_conflicting_properties() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black"), ("font-size", "14px")]))
            .variant("tone", "inverted", StyleMap::from([("color", "white")]))
            .build();

        let style = composer.resolve(&Props::new().set("tone", "inverted"));
        assert_eq!(
            style,
            StyleMap::from([("color", "white"), ("font-size", "14px")])
        );
    }

    #[test]
    fn later_axis_wins_property_conflicts() {
        let composer = StyleVariants::builder()
            .variant("a", "on", StyleMap::from([("color", "red"), ("margin", "1px")]))
            .variant("b", "on", StyleMap::from([("color", "blue")]))
            .build();

        // `a` is set first, so `b`'s color lands on top.
        let style = composer.resolve(&Props::new().set("a", "on").set("b", "on"));
        assert_eq!(
            style,
            StyleMap::from([("color", "blue"), ("margin", "1px")])
        );

        // Reversed prop order reverses the winner.
        let style = composer.resolve(&Props::new().set("b", "on").set("a", "on"));
        assert_eq!(style, StyleMap::from([("color", "red"), ("margin", "1px")]));
    }

    #[test]
    fn compounds_layer_after_variants() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black")]))
            .variant("size", "lg", StyleMap::from([("font-size", "24px")]))
            .compound(
                CompoundSelector::new().when("size", "lg"),
                StyleMap::from([("font-weight", "bold")]),
            )
            .default_variant("size", "lg")
            .build();

        assert_eq!(
            composer.resolve(&Props::new()),
            StyleMap::from([
                ("color", "black"),
                ("font-size", "24px"),
                ("font-weight", "bold"),
            ])
        );
    }

    #[test]
    fn override_merges_last() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black"), ("padding", "4px")]))
            .variant("tone", "inverted", StyleMap::from([("color", "white")]))
            .build();

        let over = StyleMap::from([("color", "hotpink")]);
        let style = composer.resolve_with(&Props::new().set("tone", "inverted"), &over);
        assert_eq!(
            style,
            StyleMap::from([("color", "hotpink"), ("padding", "4px")])
        );
        // Caller's override map is untouched.
        assert_eq!(over, StyleMap::from([("color", "hotpink")]));
    }

    #[test]
    fn no_variants_short_circuit_still_applies_override() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black")]))
            .build();

        let style = composer.resolve_with(&Props::new(), &StyleMap::from([("margin", "0")]));
        assert_eq!(
            style,
            StyleMap::from([("color", "black"), ("margin", "0")])
        );
    }

    #[test]
    fn unknown_values_contribute_nothing() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black")]))
            .variant("size", "sm", StyleMap::from([("font-size", "12px")]))
            .build();

        assert_eq!(
            composer.resolve(&Props::new().set("size", "xl")),
            StyleMap::from([("color", "black")])
        );
    }

    #[test]
    fn base_is_never_mutated() {
        let composer = StyleVariants::builder()
            .base(StyleMap::from([("color", "black")]))
            .variant("tone", "inverted", StyleMap::from([("color", "white")]))
            .build();

        let _ = composer.resolve(&Props::new().set("tone", "inverted"));
        // A second resolve with no props sees the original base.
        assert_eq!(
            composer.resolve(&Props::new()),
            StyleMap::from([("color", "black")])
        );
    }
}
