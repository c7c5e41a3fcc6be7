//! Wall decomposition into 1.0m columns plus an optional 0.5m column.

use serde::{Deserialize, Serialize};

use crate::column_stack::{solve_column_stack, PanelStack};
use crate::constants::{wall_heights, EPS, HALF_COLUMN_THRESHOLD, PREFERRED_HEIGHT};
use crate::scale::approx_eq;

/// Width class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnWidth {
    /// 1.0m wide.
    Full,
    /// 0.5m remainder column.
    Half,
}

impl ColumnWidth {
    pub fn tenths(self) -> u32 {
        match self {
            Self::Full => 10,
            Self::Half => 5,
        }
    }

    pub fn meters(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Half => 0.5,
        }
    }
}

/// One vertical slice of a wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub width: ColumnWidth,
    /// `None` when no exact panel combination reaches the wall height.
    pub stack: Option<PanelStack>,
}

impl Column {
    pub fn is_feasible(&self) -> bool {
        self.stack.is_some()
    }
}

/// Split a wall into columns, left to right.
///
/// A 3.5m wall uses a single 2.5m panel per column; its top meter is covered
/// by the top row (see [`crate::top_row`]). Every other height is solved per
/// column.
pub fn decompose_wall(length: f64, height: f64) -> Vec<Column> {
    let (full_columns, half_column) = column_counts(length);
    let tall = approx_eq(height, wall_heights::TALL);

    let stack_for = || {
        if tall {
            Some(PanelStack::single(PREFERRED_HEIGHT))
        } else {
            solve_column_stack(height)
        }
    };

    let mut columns: Vec<Column> = (0..full_columns)
        .map(|_| Column {
            width: ColumnWidth::Full,
            stack: stack_for(),
        })
        .collect();
    if half_column {
        columns.push(Column {
            width: ColumnWidth::Half,
            stack: stack_for(),
        });
    }
    columns
}

/// Number of full columns and whether a half column follows.
pub fn column_counts(length: f64) -> (u32, bool) {
    if !length.is_finite() || length <= 0.0 {
        return (0, false);
    }
    let full = (length + EPS).floor();
    let remainder = ((length - full) * 100.0).round() / 100.0;
    (full as u32, remainder >= HALF_COLUMN_THRESHOLD)
}
