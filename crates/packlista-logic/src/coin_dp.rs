//! Generic unbounded-coin DP shared by the column and top-row solvers.
//!
//! Each reachable sum keeps the best score seen so far and the coin that
//! produced it. Sums are filled in increasing order, so every predecessor is
//! final before it is extended. A transition replaces the stored score only
//! when it is strictly better; on a full tie the first path found wins.

use std::collections::BTreeMap;

/// Scoring rule for the DP. Lower scores are better.
pub trait CoinObjective {
    type Score: Copy + Ord;

    /// Score of the empty combination (sum 0).
    fn origin(&self) -> Self::Score;

    /// Score after adding one coin of value `coin` to a combination.
    fn extend(&self, score: Self::Score, coin: u32) -> Self::Score;
}

/// Filled DP table over sums `0..=bound`.
#[derive(Debug, Clone)]
pub struct CoinTable<'a, S> {
    coins: &'a [u32],
    best: Vec<Option<S>>,
    choice: Vec<Option<usize>>,
}

impl<'a, S: Copy + Ord> CoinTable<'a, S> {
    /// Run the DP for every sum up to and including `bound`.
    pub fn fill<O>(coins: &'a [u32], bound: u32, objective: &O) -> Self
    where
        O: CoinObjective<Score = S>,
    {
        let len = bound as usize + 1;
        let mut best: Vec<Option<S>> = vec![None; len];
        let mut choice: Vec<Option<usize>> = vec![None; len];
        best[0] = Some(objective.origin());

        for s in 0..len {
            let Some(score) = best[s] else {
                continue;
            };
            for (i, &coin) in coins.iter().enumerate() {
                let next = s + coin as usize;
                if coin == 0 || next >= len {
                    continue;
                }
                let candidate = objective.extend(score, coin);
                if best[next].map_or(true, |current| candidate < current) {
                    best[next] = Some(candidate);
                    choice[next] = Some(i);
                }
            }
        }

        Self {
            coins,
            best,
            choice,
        }
    }

    /// Largest sum covered by the table.
    pub fn bound(&self) -> u32 {
        (self.best.len() - 1) as u32
    }

    /// Best score for `sum`, or `None` if unreachable or out of range.
    pub fn score(&self, sum: u32) -> Option<S> {
        self.best.get(sum as usize).copied().flatten()
    }

    /// Coin counts (coin value -> count) of the best combination for `sum`.
    pub fn reconstruct(&self, sum: u32) -> Option<BTreeMap<u32, u32>> {
        self.score(sum)?;
        let mut counts = BTreeMap::new();
        let mut s = sum as usize;
        while let Some(i) = self.choice[s] {
            let coin = self.coins[i];
            *counts.entry(coin).or_insert(0) += 1;
            s -= coin as usize;
        }
        debug_assert_eq!(s, 0, "reconstruction stopped at an unset sum");
        Some(counts)
    }
}

/// Fewest coins, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestPieces;

impl CoinObjective for FewestPieces {
    type Score = u32;

    fn origin(&self) -> u32 {
        0
    }

    fn extend(&self, score: u32, _coin: u32) -> u32 {
        score + 1
    }
}
