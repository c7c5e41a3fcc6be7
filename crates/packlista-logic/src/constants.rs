//! Building-system constants: panel palettes, tolerances, hardware names.
//!
//! Lengths are stored in tenths of a meter (see [`crate::scale`]), so every
//! DP works on exact integers. The tables are read-only and never mutated.

/// Panel heights that can be stacked in a column, in tenths of a meter.
///
/// Order matters: the solvers try pieces in this order and keep the first
/// path found on a full tie.
pub const ALLOWED_HEIGHTS: [u32; 6] = [25, 30, 20, 15, 10, 5];

/// Panel widths available for the top row of a 3.5m wall, in tenths.
pub const TOP_WIDTHS: [u32; 7] = [30, 25, 20, 15, 11, 10, 5];

/// Height label of every top-row piece key (`"1.0x{width}"`).
pub const TOP_ROW_HEIGHT_LABEL: &str = "1.0";

/// The panel height the column solver prefers on ties (2.5m).
pub const PREFERRED_HEIGHT: u32 = 25;

/// Absolute tolerance for geometric "touches" tests, in meters.
pub const EPS: f64 = 1e-6;

/// Remainders at or above this width (meters) get a half-width column.
pub const HALF_COLUMN_THRESHOLD: f64 = 0.499;

/// Longest floor side the designer accepts, in meters.
pub const MAX_FLOOR_SIDE: f64 = 100.0;

/// Wall heights with special connector and frame rules, in meters.
pub mod wall_heights {
    pub const LOW: f64 = 2.5;
    pub const STANDARD: f64 = 3.0;
    /// 2.5m stack plus a 1.0m top row.
    pub const TALL: f64 = 3.5;
}

/// Hardware keys in the totals map.
pub mod hardware {
    pub const CONNECTORS: &str = "connectors";
    pub const CORNER_90_4PIN: &str = "corner_90_4pin";
    pub const M8_PIN: &str = "m8_pin";
    pub const T_5PIN: &str = "t_5pin";
    pub const BASEPLATE: &str = "baseplate";
}

/// Frame keys used when allocating storage-unit sections.
pub mod frames {
    pub const FRAME_2_5: &str = "2.5x1";
    pub const FRAME_3: &str = "3x1";
    pub const FRAME_1: &str = "1x1";
}

/// Flat hardware added per booth shape.
pub mod shape_hardware {
    /// L shape: one corner joint between back and left wall.
    pub const L_M8_PINS: u32 = 4;
    /// U shape: two corner joints.
    pub const U_CORNER_BRACKETS: u32 = 4;
    pub const U_M8_PINS: u32 = 8;
    /// Straight booth whose back wall carries at least one storage unit.
    pub const STRAIGHT_STORAGE_CORNER_BRACKETS: u32 = 2;
}
