//! Combinatorial index enumeration.
//!
//! Pool odds and key-space generation both need the full set of size-k
//! selections from a field of entrants. Enumeration is explicit here so the
//! O(n^k) cost and the lexicographic ordering stay visible and testable.

/// All size-`k` combinations of `0..n`, lexicographic.
///
/// Each combination is a strictly increasing index vector. Returns a single
/// empty selection for `k == 0` and nothing when `k > n`.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    'next: loop {
        out.push(idx.clone());
        // Bump the rightmost index that has room, reset everything after it.
        for i in (0..k).rev() {
            if idx[i] < i + n - k {
                idx[i] += 1;
                for j in i + 1..k {
                    idx[j] = idx[j - 1] + 1;
                }
                continue 'next;
            }
        }
        return out;
    }
}

/// All size-`k` arrangements (ordered selections without repetition) of
/// `0..n`, lexicographic.
pub fn arrangements(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    let mut used = vec![false; n];
    extend_arrangement(n, k, &mut used, &mut current, &mut out);
    out
}

fn extend_arrangement(
    n: usize,
    k: usize,
    used: &mut [bool],
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    for v in 0..n {
        if !used[v] {
            used[v] = true;
            current.push(v);
            extend_arrangement(n, k, used, current, out);
            current.pop();
            used[v] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_count() {
        assert_eq!(combinations(5, 3).len(), 10);
        assert_eq!(combinations(18, 2).len(), 153);
        assert_eq!(combinations(18, 3).len(), 816);
    }

    #[test]
    fn test_combinations_lexicographic() {
        let combos = combinations(4, 2);
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combinations_degenerate() {
        assert_eq!(combinations(2, 3), Vec::<Vec<usize>>::new());
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_arrangements_count() {
        assert_eq!(arrangements(4, 2).len(), 12);
        assert_eq!(arrangements(18, 2).len(), 306);
        assert_eq!(arrangements(18, 3).len(), 4896);
    }

    #[test]
    fn test_arrangements_lexicographic_and_distinct() {
        let arr = arrangements(3, 2);
        assert_eq!(
            arr,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn test_arrangements_degenerate() {
        assert_eq!(arrangements(2, 3), Vec::<Vec<usize>>::new());
        assert_eq!(arrangements(3, 0), vec![Vec::<usize>::new()]);
    }
}
