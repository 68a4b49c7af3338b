// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variantry: declarative class-list and style-map variant composition.
//!
//! A component declares its styling once — base fragments, named variant
//! axes, compound rules, defaults — and gets back an immutable composer.
//! Each invocation resolves caller props against that configuration through
//! a fixed four-stage merge:
//!
//! **Base → matched variants → matched compound variants → caller override**
//!
//! One resolution algorithm drives five composers across two payload kinds
//! and two cardinalities:
//!
//! | | Class lists | Style maps | Both |
//! |---|---|---|---|
//! | Single target | [`ClassVariants`] | [`StyleVariants`] | |
//! | Named slots | [`SlotClassVariants`] | [`SlotStyleVariants`] | [`SlotVariants`] |
//!
//! Class payloads concatenate (via the `variantry_class` flattener, or an
//! injected [`ClassResolver`]); style payloads shallow-overwrite, so later
//! stages win property conflicts.
//!
//! ## Example
//!
//! ```rust
//! use variantry::{ClassVariants, CompoundSelector, Props};
//!
//! let button = ClassVariants::builder()
//!     .base("px-4 py-2 rounded")
//!     .variant("color", "primary", "bg-blue-500 text-white")
//!     .variant("color", "secondary", "bg-gray-500 text-white")
//!     .variant("size", "sm", "text-sm")
//!     .variant("size", "lg", "text-lg")
//!     .compound(
//!         CompoundSelector::new()
//!             .when("color", "primary")
//!             .when("size", "lg"),
//!         "uppercase",
//!     )
//!     .default_variant("color", "primary")
//!     .default_variant("size", "sm")
//!     .build();
//!
//! assert_eq!(
//!     button.resolve(&Props::new()),
//!     "px-4 py-2 rounded bg-blue-500 text-white text-sm"
//! );
//! assert_eq!(
//!     button.resolve(&Props::new().set("size", "lg")),
//!     "px-4 py-2 rounded bg-blue-500 text-white text-lg uppercase"
//! );
//! ```
//!
//! ## Tolerance policy
//!
//! Resolution never fails. An unknown axis, an unknown value, a default for
//! an axis that has no variants, an override for an undeclared slot — each
//! contributes nothing and resolution proceeds. Configurations are immutable
//! after `build()` and no caller-supplied value is ever mutated, so sharing
//! one composer across call sites (or threads of a host embedding) is safe
//! by construction.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod class;
mod compound;
mod props;
mod slot_class;
mod slot_css;
mod slot_style;
mod slots;
mod style;
mod style_map;

pub use class::{ClassVariants, ClassVariantsBuilder};
pub use compound::{CompoundSelector, ValueMatch};
pub use props::{AxisValue, Props};
pub use slot_class::{SlotClassVariants, SlotClassVariantsBuilder};
pub use slot_css::{Css, CssFragment, DoneHook, SlotVariants, SlotVariantsBuilder};
pub use slot_style::{SlotStyleVariants, SlotStyleVariantsBuilder};
pub use slots::SlotMap;
pub use style::{StyleVariants, StyleVariantsBuilder};
pub use style_map::{StyleMap, StyleValue};

pub use variantry_class::{ClassResolver, ClassValue, Flattener, flatten};
