//! Parimutuel pool odds engine.
//!
//! Computes payout odds for the eight wager pool types from accumulated vote
//! counts. Every function here is pure and total: zero votes, an empty pool,
//! or too few outcomes all resolve to defined zero sentinels, never errors.
//!
//! Arithmetic is plain `f64` with truncation toward zero at the tenths place
//! (`truncate1`). Quotes are always truncated, never rounded to nearest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::combinat::combinations;
use super::wager::WagerType;

/// Textual identifier of a bettable outcome, e.g. `"7"` or `"3-7"`.
pub type OutcomeKey = String;

/// Accumulated vote counts per outcome.
pub type Votes = BTreeMap<OutcomeKey, u64>;

/// Single-figure odds per outcome.
pub type OddsTable = BTreeMap<OutcomeKey, f64>;

/// Two-sided odds per outcome.
pub type RangeTable = BTreeMap<OutcomeKey, OddsRange>;

/// Two-sided quote `[high, low]`: best-case payout first, worst-case second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsRange(pub f64, pub f64);

impl OddsRange {
    /// Sentinel for outcomes nobody bet on.
    pub const ZERO: OddsRange = OddsRange(0.0, 0.0);

    pub fn high(self) -> f64 {
        self.0
    }

    pub fn low(self) -> f64 {
        self.1
    }
}

/// A computed odds figure: single quote or `[high, low]` range depending on
/// the pool type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OddsValue {
    Single(f64),
    Range(OddsRange),
}

/// Payout rates per pool type: the fraction of the pool returned to winners.
///
/// Each rate must sit strictly between 0 and 1, fixed once loaded. Defaults
/// are the standard takeout schedule of the original pools.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutRates {
    pub win: f64,
    pub place: f64,
    pub quinella: f64,
    pub bracket_quinella: f64,
    pub quinella_place: f64,
    pub exacta: f64,
    pub trio: f64,
    pub trifecta: f64,
}

impl Default for PayoutRates {
    fn default() -> Self {
        Self {
            win: 0.80,
            place: 0.80,
            quinella: 0.775,
            bracket_quinella: 0.775,
            quinella_place: 0.775,
            exacta: 0.75,
            trio: 0.75,
            trifecta: 0.725,
        }
    }
}

impl PayoutRates {
    /// Rate for the given pool type.
    pub fn rate(&self, wager: WagerType) -> f64 {
        match wager {
            WagerType::Win => self.win,
            WagerType::Place => self.place,
            WagerType::Quinella => self.quinella,
            WagerType::BracketQuinella => self.bracket_quinella,
            WagerType::Exacta => self.exacta,
            WagerType::QuinellaPlace => self.quinella_place,
            WagerType::Trio => self.trio,
            WagerType::Trifecta => self.trifecta,
        }
    }
}

/// Truncate toward zero at the tenths place: `floor(x * 10) / 10`.
///
/// Never rounds up. `truncate1(1.2599) == 1.2`, not 1.3.
pub fn truncate1(x: f64) -> f64 {
    (x * 10.0).floor() / 10.0
}

fn pool_total(votes: &Votes) -> u64 {
    votes.values().sum()
}

/// Win odds: `truncate1(T * r / V)` per outcome, 0 when the outcome has no
/// votes.
pub fn win_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    let total = pool_total(votes);
    votes
        .iter()
        .map(|(key, &count)| {
            let odds = if count == 0 {
                0.0
            } else {
                truncate1(total as f64 * rates.win / count as f64)
            };
            (key.clone(), odds)
        })
        .collect()
}

/// Shared pool-split formula: the winner takes its own votes plus an equal
/// share of the rest, split `ways` ways.
fn split_share(count: u64, total: u64, rate: f64, ways: f64) -> f64 {
    truncate1((count as f64 + (total - count) as f64 / ways) * rate / count as f64)
}

fn split_pool_odds(votes: &Votes, rate: f64, ways: f64) -> OddsTable {
    let total = pool_total(votes);
    votes
        .iter()
        .map(|(key, &count)| {
            let odds = if count == 0 {
                0.0
            } else {
                split_share(count, total, rate, ways)
            };
            (key.clone(), odds)
        })
        .collect()
}

/// Quinella odds: two winning tickets split the remainder of the pool.
pub fn quinella_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    split_pool_odds(votes, rates.quinella, 2.0)
}

/// Bracket-quinella odds. Same pair formula as the quinella pool; the key
/// space differs (fixed 8 brackets, same-bracket pairs allowed).
pub fn bracket_quinella_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    split_pool_odds(votes, rates.bracket_quinella, 2.0)
}

/// Exacta odds. Ordered key space, but the payout shape is the quinella
/// formula: the outcome finished in the top set, rewarded proportionally.
pub fn exacta_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    split_pool_odds(votes, rates.exacta, 2.0)
}

/// Trio odds: three winning tickets split the remainder.
pub fn trio_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    split_pool_odds(votes, rates.trio, 3.0)
}

/// Trifecta odds. Ordered key space, same triple-split formula as trio.
pub fn trifecta_odds(votes: &Votes, rates: &PayoutRates) -> OddsTable {
    split_pool_odds(votes, rates.trifecta, 3.0)
}

/// Quinella-place (wide) odds range per outcome.
///
/// High side assumes the pool splits across two winning combinations, low
/// side across three. Both sides are computed independently; the two-way
/// split is never below the three-way split for the same outcome.
pub fn quinella_place_odds(votes: &Votes, rates: &PayoutRates) -> RangeTable {
    let total = pool_total(votes);
    votes
        .iter()
        .map(|(key, &count)| {
            let range = if count == 0 {
                OddsRange::ZERO
            } else {
                OddsRange(
                    split_share(count, total, rates.quinella_place, 2.0),
                    split_share(count, total, rates.quinella_place, 3.0),
                )
            };
            (key.clone(), range)
        })
        .collect()
}

/// Place odds range per outcome.
///
/// For each outcome `h`, enumerate every size-3 combination of distinct
/// outcomes drawn from the whole mapping. Each triple containing `h` yields
/// one quote: `h` keeps its own votes plus a third of whatever the triple
/// left on the table. The reported range is `[max, min]` over those quotes.
/// With fewer than 3 outcomes no triple exists and the range is `[0, 0]`.
pub fn place_odds(votes: &Votes, rates: &PayoutRates) -> RangeTable {
    let total = pool_total(votes);
    let entries: Vec<(&OutcomeKey, u64)> = votes.iter().map(|(k, &v)| (k, v)).collect();
    let triples = combinations(entries.len(), 3);

    let mut table = RangeTable::new();
    for (pos, (key, count)) in entries.iter().enumerate() {
        let mut quotes = Vec::new();
        for triple in triples.iter().filter(|t| t.contains(&pos)) {
            if *count == 0 {
                quotes.push(0.0);
            } else {
                let in_triple: u64 = triple.iter().map(|&i| entries[i].1).sum();
                quotes.push(truncate1(
                    (*count as f64 + (total - in_triple) as f64 / 3.0) * rates.place
                        / *count as f64,
                ));
            }
        }
        let range = if quotes.is_empty() {
            OddsRange::ZERO
        } else {
            let high = quotes.iter().copied().fold(f64::MIN, f64::max);
            let low = quotes.iter().copied().fold(f64::MAX, f64::min);
            OddsRange(high, low)
        };
        table.insert((*key).clone(), range);
    }
    table
}

/// Compute a uniform odds table for any pool type.
pub fn compute(
    wager: WagerType,
    votes: &Votes,
    rates: &PayoutRates,
) -> BTreeMap<OutcomeKey, OddsValue> {
    let single = |table: OddsTable| {
        table
            .into_iter()
            .map(|(k, v)| (k, OddsValue::Single(v)))
            .collect()
    };
    let range = |table: RangeTable| {
        table
            .into_iter()
            .map(|(k, v)| (k, OddsValue::Range(v)))
            .collect()
    };
    match wager {
        WagerType::Win => single(win_odds(votes, rates)),
        WagerType::Place => range(place_odds(votes, rates)),
        WagerType::Quinella => single(quinella_odds(votes, rates)),
        WagerType::BracketQuinella => single(bracket_quinella_odds(votes, rates)),
        WagerType::Exacta => single(exacta_odds(votes, rates)),
        WagerType::QuinellaPlace => range(quinella_place_odds(votes, rates)),
        WagerType::Trio => single(trio_odds(votes, rates)),
        WagerType::Trifecta => single(trifecta_odds(votes, rates)),
    }
}
