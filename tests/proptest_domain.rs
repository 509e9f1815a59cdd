//! Property-Based Tests — Odds Engine Invariants
//!
//! Uses `proptest` to verify that the pool odds functions maintain their
//! invariants across random vote distributions.

use proptest::prelude::*;

use parimutuel_odds::domain::odds::{
    self, truncate1, OddsRange, PayoutRates, Votes,
};

/// Votes over outcomes keyed "1".."n" with random counts (zeros included).
fn votes_strategy(max_outcomes: usize) -> impl Strategy<Value = Votes> {
    prop::collection::vec(0u64..10_000, 1..=max_outcomes).prop_map(|counts| {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| ((i + 1).to_string(), c))
            .collect()
    })
}

// ── Truncation Properties ───────────────────────────────────

proptest! {
    /// Truncation never rounds up: every win quote is at most the raw
    /// formula value and within a tenth below it.
    #[test]
    fn win_quote_truncates_down(votes in votes_strategy(12)) {
        let rates = PayoutRates::default();
        let total: u64 = votes.values().sum();
        let table = odds::win_odds(&votes, &rates);
        for (key, &count) in &votes {
            if count == 0 {
                continue;
            }
            let raw = total as f64 * rates.win / count as f64;
            let quote = table[key];
            prop_assert_eq!(quote, truncate1(raw));
            prop_assert!(quote <= raw, "quote {quote} exceeds raw {raw}");
            prop_assert!(
                raw - quote < 0.1 + 1e-9,
                "quote {quote} more than a tenth below raw {raw}"
            );
        }
    }

    /// Quotes land on tenths: ten times any quote is integral.
    #[test]
    fn quotes_have_one_decimal(votes in votes_strategy(12)) {
        let table = odds::trio_odds(&votes, &PayoutRates::default());
        for &quote in table.values() {
            let scaled = quote * 10.0;
            prop_assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "quote {quote} is not truncated to one decimal"
            );
        }
    }
}

// ── Zero Sentinel Properties ────────────────────────────────

proptest! {
    /// Outcomes nobody bet on quote the zero sentinel in every pool type.
    #[test]
    fn zero_vote_outcomes_quote_zero(mut votes in votes_strategy(10)) {
        votes.insert("1".to_string(), 0);
        let rates = PayoutRates::default();

        prop_assert_eq!(odds::win_odds(&votes, &rates)["1"], 0.0);
        prop_assert_eq!(odds::quinella_odds(&votes, &rates)["1"], 0.0);
        prop_assert_eq!(odds::trifecta_odds(&votes, &rates)["1"], 0.0);
        prop_assert_eq!(
            odds::quinella_place_odds(&votes, &rates)["1"],
            OddsRange::ZERO
        );
        prop_assert_eq!(odds::place_odds(&votes, &rates)["1"], OddsRange::ZERO);
    }

    /// An empty pool (all counts zero) never raises and quotes all zeros.
    #[test]
    fn empty_pool_is_all_zero(n in 1usize..10) {
        let votes: Votes = (1..=n).map(|i| (i.to_string(), 0)).collect();
        let rates = PayoutRates::default();
        prop_assert!(odds::win_odds(&votes, &rates).values().all(|&o| o == 0.0));
        prop_assert!(
            odds::place_odds(&votes, &rates)
                .values()
                .all(|&r| r == OddsRange::ZERO)
        );
    }
}

// ── Structural Properties ───────────────────────────────────

proptest! {
    /// Calling an engine function twice with the same mapping yields
    /// identical output and leaves the input untouched.
    #[test]
    fn engine_is_idempotent(votes in votes_strategy(10)) {
        let rates = PayoutRates::default();
        let before = votes.clone();
        let first = odds::place_odds(&votes, &rates);
        let second = odds::place_odds(&votes, &rates);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&votes, &before);
    }

    /// Exacta is the quinella formula under its own rate: with equal rates
    /// the two pools quote identically.
    #[test]
    fn exacta_shares_the_pair_formula(votes in votes_strategy(10)) {
        let mut rates = PayoutRates::default();
        rates.exacta = rates.quinella;
        prop_assert_eq!(
            odds::exacta_odds(&votes, &rates),
            odds::quinella_odds(&votes, &rates)
        );
    }

    /// Wide quotes: both sides computed independently from their own split
    /// formula, matched here expression-for-expression.
    #[test]
    fn wide_sides_match_their_formulas(votes in votes_strategy(10)) {
        let rates = PayoutRates::default();
        let total: u64 = votes.values().sum();
        let table = odds::quinella_place_odds(&votes, &rates);
        for (key, &count) in &votes {
            if count == 0 {
                continue;
            }
            let pair = truncate1(
                (count as f64 + (total - count) as f64 / 2.0) * rates.quinella_place
                    / count as f64,
            );
            let triple = truncate1(
                (count as f64 + (total - count) as f64 / 3.0) * rates.quinella_place
                    / count as f64,
            );
            prop_assert_eq!(table[key], OddsRange(pair, triple));
        }
    }

    /// Place ranges are ordered: worst case never exceeds best case, and
    /// fields of fewer than three outcomes quote `[0, 0]` everywhere.
    #[test]
    fn place_range_is_ordered(votes in votes_strategy(8)) {
        let table = odds::place_odds(&votes, &PayoutRates::default());
        for (key, range) in &table {
            prop_assert!(
                range.low() <= range.high(),
                "outcome {key} quotes low {} above high {}",
                range.low(),
                range.high()
            );
            if votes.len() < 3 {
                prop_assert_eq!(*range, OddsRange::ZERO);
            }
        }
    }
}
