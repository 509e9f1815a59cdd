//! Wager types and outcome key spaces.
//!
//! Each of the eight pool types has its own bettable key space, enumerated
//! from the entrant count alone — never inferred from which keys happen to
//! carry votes. Keys are entrant numbers joined by `-`, components ordered
//! as generated (ascending for unordered pools, finish order for ordered
//! ones).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::combinat::{arrangements, combinations};

/// Bracket draws are fixed at 8 regardless of field size, so the
/// bracket-quinella key space never depends on the entrant count.
pub const BRACKET_COUNT: u32 = 8;

/// The eight supported wager pool types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WagerType {
    /// 単勝 — first place finish of a single entrant.
    Win,
    /// 複勝 — top-three finish of a single entrant.
    Place,
    /// 馬連 — first two finishers, order irrelevant.
    Quinella,
    /// 枠連 — first two brackets, order irrelevant.
    BracketQuinella,
    /// 馬単 — first two finishers in exact order.
    Exacta,
    /// ワイド — both picks finish in the top three.
    QuinellaPlace,
    /// 三連複 — first three finishers, order irrelevant.
    Trio,
    /// 三連単 — first three finishers in exact order.
    Trifecta,
}

impl WagerType {
    /// Fixed display order used for combined odds sheets.
    pub const ALL: [WagerType; 8] = [
        WagerType::Win,
        WagerType::Place,
        WagerType::Quinella,
        WagerType::BracketQuinella,
        WagerType::Exacta,
        WagerType::QuinellaPlace,
        WagerType::Trio,
        WagerType::Trifecta,
    ];

    /// Canonical name, used as API path segment and JSON map key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Place => "place",
            Self::Quinella => "quinella",
            Self::BracketQuinella => "bracket_quinella",
            Self::Exacta => "exacta",
            Self::QuinellaPlace => "quinella_place",
            Self::Trio => "trio",
            Self::Trifecta => "trifecta",
        }
    }

    /// Parse a canonical name back into a wager type.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == name)
    }

    /// Range-quoted pools report `[high, low]` pairs instead of a single
    /// odds figure.
    pub fn is_range(self) -> bool {
        matches!(self, Self::Place | Self::QuinellaPlace)
    }
}

impl fmt::Display for WagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full outcome key space for a wager type, lexicographic by entrant number.
pub fn outcome_keys(wager: WagerType, entrants: u32) -> Vec<String> {
    let n = entrants as usize;
    match wager {
        WagerType::Win | WagerType::Place => {
            (1..=entrants).map(|i| i.to_string()).collect()
        }
        WagerType::Quinella | WagerType::QuinellaPlace => {
            combinations(n, 2).iter().map(|ix| tuple_key(ix)).collect()
        }
        WagerType::BracketQuinella => bracket_pair_keys(),
        WagerType::Exacta => {
            arrangements(n, 2).iter().map(|ix| tuple_key(ix)).collect()
        }
        WagerType::Trio => {
            combinations(n, 3).iter().map(|ix| tuple_key(ix)).collect()
        }
        WagerType::Trifecta => {
            arrangements(n, 3).iter().map(|ix| tuple_key(ix)).collect()
        }
    }
}

/// Bracket pairs `1-1` through `8-8`. Two horses can share a bracket, so
/// same-bracket pairs are bettable outcomes.
fn bracket_pair_keys() -> Vec<String> {
    let mut keys = Vec::new();
    for i in 1..=BRACKET_COUNT {
        for j in i..=BRACKET_COUNT {
            keys.push(format!("{i}-{j}"));
        }
    }
    keys
}

fn tuple_key(indices: &[usize]) -> String {
    let parts: Vec<String> = indices.iter().map(|i| (i + 1).to_string()).collect();
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_place_keys_are_entrant_numbers() {
        let keys = outcome_keys(WagerType::Win, 3);
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(outcome_keys(WagerType::Place, 3), keys);
    }

    #[test]
    fn test_quinella_keys_unordered() {
        let keys = outcome_keys(WagerType::Quinella, 4);
        assert_eq!(keys, vec!["1-2", "1-3", "1-4", "2-3", "2-4", "3-4"]);
    }

    #[test]
    fn test_exacta_keys_ordered() {
        let keys = outcome_keys(WagerType::Exacta, 3);
        assert_eq!(keys, vec!["1-2", "1-3", "2-1", "2-3", "3-1", "3-2"]);
    }

    #[test]
    fn test_bracket_quinella_fixed_at_eight_brackets() {
        let keys = outcome_keys(WagerType::BracketQuinella, 18);
        assert_eq!(keys.len(), 36);
        assert_eq!(keys.first().map(String::as_str), Some("1-1"));
        assert_eq!(keys.last().map(String::as_str), Some("8-8"));
        assert!(keys.contains(&"3-3".to_string()));
        // Independent of the field size.
        assert_eq!(outcome_keys(WagerType::BracketQuinella, 6), keys);
    }

    #[test]
    fn test_trio_and_trifecta_key_counts() {
        assert_eq!(outcome_keys(WagerType::Trio, 18).len(), 816);
        assert_eq!(outcome_keys(WagerType::Trifecta, 18).len(), 4896);
        assert_eq!(
            outcome_keys(WagerType::Trifecta, 3),
            vec!["1-2-3", "1-3-2", "2-1-3", "2-3-1", "3-1-2", "3-2-1"]
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for wager in WagerType::ALL {
            assert_eq!(WagerType::parse(wager.as_str()), Some(wager));
        }
        assert_eq!(WagerType::parse("daily_double"), None);
    }

    #[test]
    fn test_range_typed_pools() {
        assert!(WagerType::Place.is_range());
        assert!(WagerType::QuinellaPlace.is_range());
        assert!(!WagerType::Win.is_range());
        assert!(!WagerType::Trifecta.is_range());
    }
}
