// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-target class composition.

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

struct ClassVariantsData {
    base: ClassValue,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, ClassValue>>,
    compounds: Vec<(CompoundSelector, ClassValue)>,
    defaults: Props,
    resolver: Rc<dyn ClassResolver>,
}

/// A single-target class composer.
///
/// Built once from a variant configuration and immutable thereafter; each
/// [`resolve`](Self::resolve) call is a pure function of the configuration
/// and the given props. Cloning is cheap (`Rc`).
///
/// Resolution order is always base → matched variants (in resolved-prop
/// order) → matched compound variants (in declared order, all matches apply)
/// → override, joined through the configured [`ClassResolver`]. Unknown axes
/// and values contribute nothing.
///
/// ```rust
/// use variantry::{ClassVariants, CompoundSelector, Props};
///
/// let button = ClassVariants::builder()
///     .base("btn")
///     .variant("color", "primary", "btn-primary")
///     .variant("color", "danger", "btn-danger")
///     .variant("size", "sm", "btn-sm")
///     .variant("size", "lg", "btn-lg")
///     .compound(
///         CompoundSelector::new().when("color", "danger").when("size", "lg"),
///         "btn-danger-lg",
///     )
///     .default_variant("color", "primary")
///     .default_variant("size", "sm")
///     .build();
///
/// assert_eq!(button.resolve(&Props::new()), "btn btn-primary btn-sm");
/// assert_eq!(
///     button.resolve(&Props::new().set("color", "danger").set("size", "lg")),
///     "btn btn-danger btn-lg btn-danger-lg"
/// );
/// ```
#[derive(Clone)]
pub struct ClassVariants {
    inner: Rc<ClassVariantsData>,
}

impl fmt::Debug for ClassVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassVariants")
            .field("base", &self.inner.base)
            .field("variants", &self.inner.variants)
            .field("compounds", &self.inner.compounds)
            .field("defaults", &self.inner.defaults)
            .finish_non_exhaustive()
    }
}

impl ClassVariants {
    /// Starts building a composer.
    #[must_use]
    pub fn builder() -> ClassVariantsBuilder {
        ClassVariantsBuilder::new()
    }

    /// Resolves the class string for the given props.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> String {
        self.resolve_with(props, &ClassValue::Null)
    }

    /// Resolves the class string with a caller override appended last.
    ///
    /// The override never participates in variant or compound matching.
    #[must_use]
    pub fn resolve_with(&self, props: &Props, class_name: &ClassValue) -> String {
        let data = &*self.inner;

        // No variant axes: nothing can match, skip the props merge entirely.
        if data.variants.is_empty() {
            let values = [data.base.clone(), class_name.clone()];
            return data.resolver.resolve(&values);
        }

        let merged = Props::merge_defined(&data.defaults, props);

        let mut values: SmallVec<[ClassValue; 8]> = SmallVec::new();
        values.push(data.base.clone());

        for (axis, value) in merged.iter() {
            let fragment = data
                .variants
                .get(axis)
                .and_then(|by_value| by_value.get(value));
            if let Some(fragment) = fragment
                && !fragment.is_empty()
            {
                values.push(fragment.clone());
            }
        }

        for (selector, fragment) in &data.compounds {
            if selector.matches(&merged) {
                values.push(fragment.clone());
            }
        }

        values.push(class_name.clone());
        data.resolver.resolve(&values)
    }
}

/// Builder for [`ClassVariants`].
pub struct ClassVariantsBuilder {
    base: ClassValue,
    variants: HashMap<Cow<'static, str>, HashMap<AxisValue, ClassValue>>,
    compounds: Vec<(CompoundSelector, ClassValue)>,
    defaults: Props,
    resolver: Rc<dyn ClassResolver>,
}

impl fmt::Debug for ClassVariantsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassVariantsBuilder")
            .field("base", &self.base)
            .field("variants", &self.variants)
            .field("compounds", &self.compounds)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Default for ClassVariantsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassVariantsBuilder {
    /// Creates an empty builder with the default flattening resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: ClassValue::Null,
            variants: HashMap::new(),
            compounds: Vec::new(),
            defaults: Props::new(),
            resolver: Rc::new(Flattener),
        }
    }

    /// Sets the base classes applied before any variant.
    #[must_use]
    pub fn base(mut self, class: impl Into<ClassValue>) -> Self {
        self.base = class.into();
        self
    }

    /// Registers the classes contributed when `axis` resolves to `value`.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<Cow<'static, str>>,
        value: impl Into<AxisValue>,
        class: impl Into<ClassValue>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), class.into());
        self
    }

    /// Adds a compound rule; all matching rules apply, in declared order.
    #[must_use]
    pub fn compound(mut self, selector: CompoundSelector, class: impl Into<ClassValue>) -> Self {
        self.compounds.push((selector, class.into()));
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
    pub fn build(self) -> ClassVariants {
        ClassVariants {
            inner: Rc::new(ClassVariantsData {
                base: self.base,
                variants: self.variants,
                compounds: self.compounds,
                defaults: self.defaults,
                resolver: self.resolver,
            }),
        }
    }
}
