//! Top-row covering for 3.5m walls.
//!
//! The palette cannot always tile a length exactly, so the covering may
//! overshoot: least waste first, then fewest pieces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coin_dp::{CoinTable, FewestPieces};
use crate::constants::{TOP_ROW_HEIGHT_LABEL, TOP_WIDTHS};
use crate::scale::{format_tenths, to_meters, to_tenths_clamped};

/// Chosen top-row pieces for one wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopRowResult {
    /// Piece width (tenths) -> count.
    pub pieces: BTreeMap<u32, u32>,
    /// Overshoot in meters; `None` when no covering was found.
    pub waste_meters: Option<f64>,
}

impl TopRowResult {
    pub fn is_covered(&self) -> bool {
        self.waste_meters.is_some()
    }

    pub fn piece_count(&self) -> u32 {
        self.pieces.values().sum()
    }

    /// Totals key for a top-row piece of the given width.
    pub fn piece_key(width_tenths: u32) -> String {
        format!("{TOP_ROW_HEIGHT_LABEL}x{}", format_tenths(width_tenths))
    }
}

/// Cover `length` meters with top-row pieces.
pub fn solve_top_row(length: f64) -> TopRowResult {
    solve_top_row_tenths(to_tenths_clamped(length))
}

/// Cover `target` tenths with top-row pieces.
pub fn solve_top_row_tenths(target: u32) -> TopRowResult {
    let largest = TOP_WIDTHS.iter().copied().max().unwrap_or(0);
    let max_sum = target.saturating_add(largest);
    let table = CoinTable::fill(&TOP_WIDTHS, max_sum, &FewestPieces);

    // (waste, pieces, sum); the first strictly smaller pair wins.
    let mut best: Option<(u32, u32, u32)> = None;
    for sum in target..=max_sum {
        let Some(pieces) = table.score(sum) else {
            continue;
        };
        let waste = sum - target;
        if best.map_or(true, |(w, p, _)| (waste, pieces) < (w, p)) {
            best = Some((waste, pieces, sum));
        }
    }

    let Some((waste, _, sum)) = best else {
        return TopRowResult::default();
    };
    match table.reconstruct(sum) {
        Some(pieces) => TopRowResult {
            pieces,
            waste_meters: Some(to_meters(waste)),
        },
        None => TopRowResult::default(),
    }
}
