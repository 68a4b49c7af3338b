// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for multi-slot composition.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use variantry::{
    CompoundSelector, CssFragment, Props, SlotClassVariants, SlotMap, SlotStyleVariants,
    SlotVariants, StyleMap,
};

fn bench_slot_class(c: &mut Criterion) {
    let composer = SlotClassVariants::builder(["root", "icon", "label"])
        .base(SlotMap::from([
            ("root", "btn"),
            ("icon", "btn-icon"),
            ("label", "btn-label"),
        ]))
        .variant(
            "size",
            "sm",
            SlotMap::from([("root", "btn-sm"), ("icon", "icon-sm")]),
        )
        .variant(
            "size",
            "lg",
            SlotMap::from([("root", "btn-lg"), ("icon", "icon-lg")]),
        )
        .variant("color", "primary", SlotMap::from([("root", "btn-primary")]))
        .compound(
            CompoundSelector::new().when("size", "lg").when("color", "primary"),
            SlotMap::from([("label", "label-strong")]),
        )
        .default_variant("size", "sm")
        .default_variant("color", "primary")
        .build();

    c.bench_function("slot_class/defaults_only", |b| {
        b.iter(|| composer.resolve(black_box(&Props::new())));
    });

    let props = Props::new().set("size", "lg");
    c.bench_function("slot_class/variants_and_compound", |b| {
        b.iter(|| composer.resolve(black_box(&props)));
    });
}

fn bench_slot_style(c: &mut Criterion) {
    let composer = SlotStyleVariants::builder(["root", "icon"])
        .base(SlotMap::from([
            ("root", StyleMap::from([("padding", "8px")])),
            ("icon", StyleMap::from([("width", "16px")])),
        ]))
        .variant(
            "size",
            "lg",
            SlotMap::from([
                ("root", StyleMap::from([("padding", "12px")])),
                ("icon", StyleMap::from([("width", "20px")])),
            ]),
        )
        .default_variant("size", "lg")
        .build();

    c.bench_function("slot_style/defaults_only", |b| {
        b.iter(|| composer.resolve(black_box(&Props::new())));
    });
}

fn bench_slot_css(c: &mut Criterion) {
    let composer = SlotVariants::builder(["root", "title"])
        .base(SlotMap::from([(
            "root",
            CssFragment::new("alert", StyleMap::from([("padding", "8px")])),
        )]))
        .variant(
            "tone",
            "danger",
            SlotMap::from([
                ("root", CssFragment::from("alert-danger")),
                (
                    "title",
                    CssFragment::from(StyleMap::from([("color", "red")])),
                ),
            ]),
        )
        .default_variant("tone", "danger")
        .build();

    c.bench_function("slot_css/defaults_only", |b| {
        b.iter(|| composer.resolve(black_box(&Props::new())));
    });
}

criterion_group!(benches, bench_slot_class, bench_slot_style, bench_slot_css);
criterion_main!(benches);
