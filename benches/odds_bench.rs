//! Odds Engine Benchmarks — Combinatorial Hot-Path Scaling
//!
//! The place pool enumerates size-3 combinations over the whole outcome
//! set, so its cost grows cubically with the field size. These benches pin
//! that scaling at the standard 18-entrant field and the configured
//! 40-entrant ceiling.
//!
//! Run with: cargo bench --bench odds_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parimutuel_odds::domain::odds::{self, PayoutRates, Votes};
use parimutuel_odds::domain::wager::{outcome_keys, WagerType};

/// Deterministic full-field votes: every key backed, counts spread out.
fn full_field_votes(wager: WagerType, entrants: u32) -> Votes {
    outcome_keys(wager, entrants)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, (i as u64 * 7 + 3) % 500))
        .collect()
}

fn bench_win_odds(c: &mut Criterion) {
    let rates = PayoutRates::default();
    let votes = full_field_votes(WagerType::Win, 18);

    c.bench_function("win_odds_18", |b| {
        b.iter(|| odds::win_odds(black_box(&votes), &rates));
    });
}

fn bench_place_odds_standard_field(c: &mut Criterion) {
    let rates = PayoutRates::default();
    let votes = full_field_votes(WagerType::Place, 18);

    c.bench_function("place_odds_18", |b| {
        b.iter(|| odds::place_odds(black_box(&votes), &rates));
    });
}

fn bench_place_odds_max_field(c: &mut Criterion) {
    let rates = PayoutRates::default();
    let votes = full_field_votes(WagerType::Place, 40);

    c.bench_function("place_odds_40", |b| {
        b.iter(|| odds::place_odds(black_box(&votes), &rates));
    });
}

fn bench_trifecta_odds(c: &mut Criterion) {
    let rates = PayoutRates::default();
    let votes = full_field_votes(WagerType::Trifecta, 18);

    c.bench_function("trifecta_odds_18", |b| {
        b.iter(|| odds::trifecta_odds(black_box(&votes), &rates));
    });
}

fn bench_trifecta_key_space(c: &mut Criterion) {
    c.bench_function("trifecta_keys_18", |b| {
        b.iter(|| outcome_keys(black_box(WagerType::Trifecta), black_box(18)));
    });
}

criterion_group!(
    benches,
    bench_win_odds,
    bench_place_odds_standard_field,
    bench_place_odds_max_field,
    bench_trifecta_odds,
    bench_trifecta_key_space,
);
criterion_main!(benches);
