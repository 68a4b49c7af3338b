// Copyright 2025 the Variantry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for single-target composition and the flattening primitive.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use variantry::{ClassVariants, CompoundSelector, Props, StyleMap, StyleVariants};
use variantry_class::{ClassValue, flatten};

fn bench_flatten(c: &mut Criterion) {
    let values = [
        ClassValue::from("px-4 py-2 rounded"),
        ClassValue::from(["bg-blue-500", "text-white"]),
        ClassValue::dict([("active", true), ("disabled", false), ("focus", true)]),
        ClassValue::Null,
        ClassValue::from(7),
    ];

    c.bench_function("flatten/mixed", |b| {
        b.iter(|| flatten(black_box(&values)));
    });
}

fn button_composer() -> ClassVariants {
    ClassVariants::builder()
        .base("px-4 py-2 rounded")
        .variant("color", "primary", "bg-blue-500 text-white")
        .variant("color", "secondary", "bg-gray-500 text-white")
        .variant("color", "danger", "bg-red-500 text-white")
        .variant("size", "sm", "text-sm")
        .variant("size", "md", "text-base")
        .variant("size", "lg", "text-lg")
        .compound(
            CompoundSelector::new()
                .when_any("color", ["primary", "danger"])
                .when("size", "lg"),
            "uppercase tracking-wide",
        )
        .default_variant("color", "primary")
        .default_variant("size", "md")
        .build()
}

fn bench_class_variants(c: &mut Criterion) {
    let base_only = ClassVariants::builder().base("px-4 py-2 rounded").build();
    c.bench_function("class/no_variants", |b| {
        b.iter(|| base_only.resolve(black_box(&Props::new())));
    });

    let composer = button_composer();

    c.bench_function("class/defaults_only", |b| {
        b.iter(|| composer.resolve(black_box(&Props::new())));
    });

    let props = Props::new().set("color", "danger").set("size", "lg");
    c.bench_function("class/variants_and_compound", |b| {
        b.iter(|| composer.resolve(black_box(&props)));
    });

    let over = ClassValue::from("shadow-lg");
    c.bench_function("class/with_override", |b| {
        b.iter(|| composer.resolve_with(black_box(&props), black_box(&over)));
    });
}

fn bench_style_variants(c: &mut Criterion) {
    let composer = StyleVariants::builder()
        .base(StyleMap::from([
            ("color", "black"),
            ("font-size", "14px"),
            ("padding", "8px"),
        ]))
        .variant("tone", "inverted", StyleMap::from([("color", "white")]))
        .variant("size", "lg", StyleMap::from([("font-size", "24px")]))
        .compound(
            CompoundSelector::new().when("size", "lg"),
            StyleMap::from([("font-weight", "bold")]),
        )
        .default_variant("tone", "inverted")
        .default_variant("size", "lg")
        .build();

    c.bench_function("style/defaults_only", |b| {
        b.iter(|| composer.resolve(black_box(&Props::new())));
    });
}

criterion_group!(
    benches,
    bench_flatten,
    bench_class_variants,
    bench_style_variants
);
criterion_main!(benches);
