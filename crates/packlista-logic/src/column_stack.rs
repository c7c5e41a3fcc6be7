//! Column stack solver: fewest panels summing exactly to a wall height.
//!
//! Among minimal-piece stacks the one with the most 2.5m panels wins. A
//! height with no exact decomposition is infeasible (`None`), never rounded.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coin_dp::{CoinObjective, CoinTable};
use crate::constants::{ALLOWED_HEIGHTS, PREFERRED_HEIGHT};
use crate::scale::to_tenths;

/// Panels stacked in one column: panel height (tenths) -> count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStack(BTreeMap<u32, u32>);

impl PanelStack {
    /// A stack of a single panel.
    pub fn single(height_tenths: u32) -> Self {
        Self(BTreeMap::from([(height_tenths, 1)]))
    }

    /// Number of panels of the given height.
    pub fn count(&self, height_tenths: u32) -> u32 {
        self.0.get(&height_tenths).copied().unwrap_or(0)
    }

    /// Total number of panels.
    pub fn pieces(&self) -> u32 {
        self.0.values().sum()
    }

    /// Stacked height in tenths.
    pub fn height_tenths(&self) -> u32 {
        self.0.iter().map(|(h, n)| h * n).sum()
    }

    /// `(height_tenths, count)` pairs, lowest height first.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(&h, &n)| (h, n))
    }
}

/// Fewest pieces first, then most 2.5m panels.
struct PreferTallPanels;

impl CoinObjective for PreferTallPanels {
    type Score = (u32, Reverse<u32>);

    fn origin(&self) -> Self::Score {
        (0, Reverse(0))
    }

    fn extend(&self, (pieces, Reverse(preferred)): Self::Score, coin: u32) -> Self::Score {
        let bonus = u32::from(coin == PREFERRED_HEIGHT);
        (pieces + 1, Reverse(preferred + bonus))
    }
}

/// Solve the stack for a height given in meters.
pub fn solve_column_stack(height: f64) -> Option<PanelStack> {
    let target = to_tenths(height);
    if target <= 0 || target > u32::MAX as i64 {
        return None;
    }
    solve_column_stack_tenths(target as u32)
}

/// Solve the stack for a height given in tenths.
pub fn solve_column_stack_tenths(target: u32) -> Option<PanelStack> {
    if target == 0 {
        return None;
    }
    let table = CoinTable::fill(&ALLOWED_HEIGHTS, target, &PreferTallPanels);
    table.reconstruct(target).map(PanelStack)
}
