use std::hint::black_box;

use bridgit::catalog::{filter_topics, BRIDGE_TOPICS, CATEGORIES};
use bridgit::{OnboardingState, Profile};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// State with the language and profile steps done
fn profiled_state() -> OnboardingState {
    let mut state = OnboardingState::new();
    state.confirm_language("English");
    state.commit_profile(Profile {
        name: "Bench".to_string(),
        ..Profile::default()
    });
    state
}

/// Benchmark screen resolution at each stage of the flow
fn bench_resolve_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_screen");

    let fresh = OnboardingState::new();
    group.bench_function("language_select", |b| b.iter(|| black_box(&fresh).resolve_screen()));

    let profiled = profiled_state();
    group.bench_function("profile", |b| b.iter(|| black_box(&profiled).resolve_screen()));

    let mut done = profiled_state();
    done.toggle_category(CATEGORIES[0]);
    done.confirm_personalization();
    group.bench_function("home", |b| b.iter(|| black_box(&done).resolve_screen()));

    group.finish();
}

/// Benchmark toggling categories, including refusals past the cap
fn bench_toggle_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_category");

    group.bench_function("add_remove", |b| {
        let mut state = profiled_state();
        b.iter(|| {
            state.toggle_category(black_box("Banking"));
            state.toggle_category(black_box("Banking"));
        });
    });

    group.bench_function("over_cap", |b| {
        let mut state = profiled_state();
        for category in &CATEGORIES[..3] {
            state.toggle_category(category);
        }
        b.iter(|| state.toggle_category(black_box("Healthcare")));
    });

    group.bench_function("unknown", |b| {
        let mut state = profiled_state();
        b.iter(|| state.toggle_category(black_box("Gardening")));
    });

    group.finish();
}

/// Benchmark home search filtering for queries of increasing length
fn bench_filter_topics(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_topics");

    for query in ["", "h", "ho", "housing", "nothing matches"] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{query:?}")), query, |b, q| {
            b.iter(|| filter_topics(black_box(&BRIDGE_TOPICS), black_box(q)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_screen,
    bench_toggle_category,
    bench_filter_topics
);
criterion_main!(benches);
