// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Combined class + style slot composition.
//!
//! [`SlotVariants`] resolves both payload kinds in one pass: every fragment
//! carries an optional class part and an optional style part, class parts
//! concatenate and style parts shallow-overwrite, per slot. This is the
//! composer to reach for when a component wants classes and inline styles
//! from one configuration.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use variantry_class::{ClassValue, flatten};

use crate::compound::CompoundSelector;
use crate::props::{AxisValue, Props};
use crate::slots::SlotMap;
use crate::style_map::StyleMap;

/// One fragment contributing to a [`SlotVariants`] stage: classes, styles,
/// or both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssFragment {
    /// The class part, concatenated into the slot's class string.
    pub class: ClassValue,
    /// The style part, shallow-merged into the slot's style map.
    pub style: StyleMap,
}

impl CssFragment {
    /// Creates a fragment carrying both parts.
    #[must_use]
    pub fn new(class: impl Into<ClassValue>, style: StyleMap) -> Self {
        Self {
            class: class.into(),
            style,
        }
    }
}

impl From<&'static str> for CssFragment {
    fn from(class: &'static str) -> Self {
        Self {
            class: ClassValue::from(class),
            style: StyleMap::new(),
        }
    }
}

impl From<ClassValue> for CssFragment {
    fn from(class: ClassValue) -> Self {
        Self {
            class,
            style: StyleMap::new(),
        }
    }
}

impl From<StyleMap> for CssFragment {
    fn from(style: StyleMap) -> Self {
        Self {
            class: ClassValue::Null,
            style,
        }
    }
}

/// The resolved output for one slot: a flattened class string plus a style
/// map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Css {
    /// The slot's flattened class string.
    pub class_name: String,
    /// The slot's resolved style map.
    pub style: StyleMap,
}

/// A finishing hook applied to the fully resolved output.
pub type DoneHook = dyn Fn(SlotMap<Css>) -> SlotMap<Css>;

struct SlotVariantsData {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<CssFragment>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<CssFragment>>>,
    compounds: Vec<(CompoundSelector, SlotMap<CssFragment>)>,
    defaults: Props,
    on_done: Option<Rc<DoneHook>>,
}

/// A multi-slot composer resolving classes and styles together.
///
/// Stage order matches every other composer (base → matched variants →
/// matched compounds → overrides); within a fragment the class part
/// concatenates and the style part shallow-overwrites. Class overrides and
/// style overrides are separate per-invocation maps, mirroring the split
/// `classNames`/`styles` fields of the per-payload composers.
///
/// ```rust
/// use variantry::{CssFragment, Props, SlotMap, SlotVariants, StyleMap};
///
/// let alert = SlotVariants::builder(["root", "title"])
///     .base(SlotMap::from([(
///         "root",
///         CssFragment::new("alert", StyleMap::from([("padding", "8px")])),
///     )]))
///     .variant(
///         "tone",
///         "danger",
///         SlotMap::from([
///             ("root", CssFragment::from("alert-danger")),
///             ("title", CssFragment::from(StyleMap::from([("color", "red")]))),
///         ]),
///     )
///     .build();
///
/// let css = alert.resolve(&Props::new().set("tone", "danger"));
/// let root = css.get("root").unwrap();
/// assert_eq!(root.class_name, "alert alert-danger");
/// assert_eq!(root.style, StyleMap::from([("padding", "8px")]));
/// assert_eq!(css.get("title").unwrap().style, StyleMap::from([("color", "red")]));
/// ```
#[derive(Clone)]
pub struct SlotVariants {
    inner: Rc<SlotVariantsData>,
}

impl fmt::Debug for SlotVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotVariants")
            .field("slots", &self.inner.slots)
            .field("base", &self.inner.base)
            .field("variants", &self.inner.variants)
            .field("compounds", &self.inner.compounds)
            .field("defaults", &self.inner.defaults)
            .finish_non_exhaustive()
    }
}

impl SlotVariants {
    /// Starts building a composer over the given ordered slot names.
    #[must_use]
    pub fn builder<I>(slots: I) -> SlotVariantsBuilder
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        SlotVariantsBuilder::new(slots)
    }

    /// Resolves every declared slot's classes and styles for the given props.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> SlotMap<Css> {
        self.resolve_with(props, &SlotMap::new(), &SlotMap::new())
    }

    /// Resolves with per-slot class and style overrides applied last.
    ///
    /// Overrides never participate in matching; overrides naming an
    /// undeclared slot are ignored.
    #[must_use]
    pub fn resolve_with(
        &self,
        props: &Props,
        class_names: &SlotMap<ClassValue>,
        styles: &SlotMap<StyleMap>,
    ) -> SlotMap<Css> {
        let data = &*self.inner;
        let merged = Props::merge_defined(&data.defaults, props);

        let mut acc: Vec<(Cow<'static, str>, SmallVec<[ClassValue; 8]>, StyleMap)> = data
            .slots
            .iter()
            .map(|slot| (slot.clone(), SmallVec::new(), StyleMap::new()))
            .collect();

        merge_stage(&mut acc, &data.base);

        for (axis, value) in merged.iter() {
            let fragment = data
                .variants
                .get(axis)
                .and_then(|by_value| by_value.get(value));
            if let Some(fragment) = fragment {
                merge_stage(&mut acc, fragment);
            }
        }

        for (selector, fragment) in &data.compounds {
            if selector.matches(&merged) {
                merge_stage(&mut acc, fragment);
            }
        }

        for (slot, classes, style) in &mut acc {
            if let Some(class) = class_names.get(slot) {
                classes.push(class.clone());
            }
            if let Some(addition) = styles.get(slot) {
                style.merge_from(addition);
            }
        }

        let mut result = SlotMap::new();
        for (slot, classes, style) in acc {
            result.insert(
                slot,
                Css {
                    class_name: flatten(&classes),
                    style,
                },
            );
        }

        match &data.on_done {
            Some(hook) => hook(result),
            None => result,
        }
    }
}

fn merge_stage(
    acc: &mut [(Cow<'static, str>, SmallVec<[ClassValue; 8]>, StyleMap)],
    fragment: &SlotMap<CssFragment>,
) {
    for (slot, classes, style) in acc.iter_mut() {
        if let Some(part) = fragment.get(slot) {
            if !part.class.is_empty() {
                classes.push(part.class.clone());
            }
            style.merge_from(&part.style);
        }
    }
}

/// Builder for [`SlotVariants`].
pub struct SlotVariantsBuilder {
    slots: Vec<Cow<'static, str>>,
    base: SlotMap<CssFragment>,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, SlotMap<CssFragment>>>,
    compounds: Vec<(CompoundSelector, SlotMap<CssFragment>)>,
    defaults: Props,
    on_done: Option<Rc<DoneHook>>,
}

impl fmt::Debug for SlotVariantsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotVariantsBuilder")
            .field("slots", &self.slots)
            .field("base", &self.base)
            .field("variants", &self.variants)
            .field("compounds", &self.compounds)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl SlotVariantsBuilder {
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
            on_done: None,
        }
    }

    /// Sets the per-slot base fragment applied before any variant.
    #[must_use]
    pub fn base(mut self, base: SlotMap<CssFragment>) -> Self {
        self.base = base;
        self
    }

    /// Registers the per-slot fragment contributed when `axis` resolves to
    /// `value`.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
        fragment: SlotMap<CssFragment>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), fragment);
        self
    }

    /// Adds a compound rule; all matching rules apply, in declared order.
    #[must_use]
    pub fn compound(mut self, selector: CompoundSelector, fragment: SlotMap<CssFragment>) -> Self {
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

    /// Installs a finishing hook applied to every fully resolved output.
    #[must_use]
    pub fn on_done(mut self, hook: impl Fn(SlotMap<Css>) -> SlotMap<Css> + 'static) -> Self {
        self.on_done = Some(Rc::new(hook));
        self
    }

    /// Builds the composer.
    #[must_use]
    pub fn build(self) -> SlotVariants {
        SlotVariants {
            inner: Rc::new(SlotVariantsData {
                slots: self.slots,
                base: self.base,
                variants: self.variants,
                compounds: self.compounds,
                defaults: self.defaults,
                on_done: self.on_done,
            }),
        }
    }
}
