//! Booth walls: shapes, wall construction, per-wall and per-shape hardware.

use serde::{Deserialize, Serialize};

use crate::constants::{shape_hardware, wall_heights, EPS};
use crate::scale::approx_eq;

/// Which wall of the booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallName {
    Back,
    Left,
    Right,
}

impl WallName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Booth outline as seen from above.
///
/// Unrecognized names deserialize to [`WallShape::Unknown`], which builds no
/// walls; the booth then only carries storage hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallShape {
    /// Back wall only.
    Straight,
    /// Back wall plus left wall.
    L,
    /// Back wall plus both side walls.
    U,
    #[serde(other)]
    Unknown,
}

impl WallShape {
    /// Parse a shape name (`straight`, `l`, `u`), case-insensitive.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "straight" => Self::Straight,
            "l" => Self::L,
            "u" => Self::U,
            _ => Self::Unknown,
        }
    }

    /// Walls this shape has, in processing order.
    pub fn wall_names(self) -> &'static [WallName] {
        match self {
            Self::Straight => &[WallName::Back],
            Self::L => &[WallName::Back, WallName::Left],
            Self::U => &[WallName::Back, WallName::Left, WallName::Right],
            Self::Unknown => &[],
        }
    }
}

/// One wall of the booth, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub name: WallName,
    pub length: f64,
    pub height: f64,
}

/// Build the wall list: the back wall spans the floor width, side walls the
/// floor depth. All walls share one height.
pub fn build_walls(shape: WallShape, floor_width: f64, floor_depth: f64, height: f64) -> Vec<Wall> {
    shape
        .wall_names()
        .iter()
        .map(|&name| Wall {
            name,
            length: match name {
                WallName::Back => floor_width,
                WallName::Left | WallName::Right => floor_depth,
            },
            height,
        })
        .collect()
}

/// Connectors per seam for a wall height: 2 up to 2.5m, 3 above.
pub fn connectors_per_join(height: f64) -> u32 {
    if height <= wall_heights::LOW + EPS {
        2
    } else {
        3
    }
}

/// Connectors joining the columns of one wall.
///
/// A 3.5m wall is charged per column rather than per seam, because the
/// top-row seam needs connectors above every column.
pub fn wall_connectors(column_count: usize, height: f64) -> u32 {
    let per_join = connectors_per_join(height);
    let columns = column_count as u32;
    if approx_eq(height, wall_heights::TALL) {
        columns * per_join
    } else {
        columns.saturating_sub(1) * per_join
    }
}

/// Flat hardware for the shape's corner joints: `(corner_90_4pin, m8_pin)`.
pub fn shape_corner_hardware(shape: WallShape) -> (u32, u32) {
    match shape {
        WallShape::L => (0, shape_hardware::L_M8_PINS),
        WallShape::U => (shape_hardware::U_CORNER_BRACKETS, shape_hardware::U_M8_PINS),
        WallShape::Straight | WallShape::Unknown => (0, 0),
    }
}

/// Ballast plates for the booth.
///
/// Straight booths go by floor width (3 -> 1, 4 -> 2, 5+ -> 3, any other
/// width 0); L and U booths get one plate once `2 * (width + depth)`
/// reaches 6m.
pub fn baseplates(shape: WallShape, floor_width: f64, floor_depth: f64) -> u32 {
    match shape {
        WallShape::Straight => {
            if floor_width >= 5.0 - EPS {
                3
            } else if approx_eq(floor_width, 4.0) {
                2
            } else if approx_eq(floor_width, 3.0) {
                1
            } else {
                0
            }
        }
        WallShape::L | WallShape::U => {
            if 2.0 * (floor_width + floor_depth) >= 6.0 {
                1
            } else {
                0
            }
        }
        WallShape::Unknown => 0,
    }
}
