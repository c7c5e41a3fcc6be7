//! Storage units: placement classification and hardware allocation.
//!
//! A storage unit is a closed box built from the same panel system. Where it
//! stands decides which hardware table applies:
//! - **Corner**: touches the back wall and one side of the floor at once
//! - **Straight**: anywhere else (against one wall, or free-standing)
//!
//! Frame sections follow the height of the wall the unit stands against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{frames, wall_heights};
use crate::scale::approx_eq;
use crate::walls::WallName;

/// A storage unit as placed in the booth designer.
///
/// `x`/`z` is the unit's center on the floor, origin at the floor center;
/// the back wall lies at `z = -floor_depth / 2`, the left wall at
/// `x = -floor_width / 2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageUnit {
    pub id: String,
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
}

/// Which hardware table a unit uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Straight,
    Corner,
}

/// Hardware for one storage unit of a given width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareMapping {
    pub connectors: u32,
    pub corner_90_4pin: u32,
    pub m8_pin: u32,
    pub t_5pin: u32,
    /// Nominal frame sections for the box walls.
    pub frame_sections: u32,
}

const fn hw(
    connectors: u32,
    corner_90_4pin: u32,
    m8_pin: u32,
    t_5pin: u32,
    frame_sections: u32,
) -> HardwareMapping {
    HardwareMapping {
        connectors,
        corner_90_4pin,
        m8_pin,
        t_5pin,
        frame_sections,
    }
}

/// Widths 1..=4 for a unit against one wall or free-standing.
const STRAIGHT_TABLE: [HardwareMapping; 4] = [
    hw(4, 2, 0, 0, 3),
    hw(6, 2, 0, 1, 4),
    hw(8, 2, 0, 2, 5),
    hw(10, 2, 0, 3, 6),
];

/// Widths 1..=4 for a unit in a back corner (two sides borrowed from walls).
const CORNER_TABLE: [HardwareMapping; 4] = [
    hw(2, 1, 2, 0, 2),
    hw(4, 1, 2, 1, 3),
    hw(6, 1, 2, 2, 4),
    hw(8, 1, 2, 3, 5),
];

/// Look up hardware for a placement and width. Widths above 4 use the
/// width-4 row; zero is treated as 1.
pub fn lookup_hardware(placement: Placement, width: u32) -> HardwareMapping {
    let table = match placement {
        Placement::Straight => &STRAIGHT_TABLE,
        Placement::Corner => &CORNER_TABLE,
    };
    let row = width.clamp(1, table.len() as u32) as usize - 1;
    table[row]
}

/// Connectors kept for older packing lists: two per extra meter of width.
pub fn legacy_extra_connectors(width: u32) -> u32 {
    width.saturating_sub(1).saturating_mul(2)
}

/// Round a storage dimension to whole meters, never below 1.
pub fn clamp_dimension(value: f64) -> u32 {
    if value.is_finite() && value >= 1.5 {
        value.round() as u32
    } else {
        1
    }
}

/// The floor a booth stands on, centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub width: f64,
    pub depth: f64,
}

impl Floor {
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    fn back_z(&self) -> f64 {
        -self.depth / 2.0
    }

    fn left_x(&self) -> f64 {
        -self.width / 2.0
    }

    fn right_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Midpoints of a unit's four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMidpoints {
    /// Edge facing the back wall, `(x, z)`.
    pub back: (f64, f64),
    pub front: (f64, f64),
    pub left: (f64, f64),
    pub right: (f64, f64),
}

/// Compute edge midpoints from center and whole-meter size.
pub fn edge_midpoints(x: f64, z: f64, width: u32, depth: u32) -> EdgeMidpoints {
    let half_width = width as f64 / 2.0;
    let half_depth = depth as f64 / 2.0;
    EdgeMidpoints {
        back: (x, z - half_depth),
        front: (x, z + half_depth),
        left: (x - half_width, z),
        right: (x + half_width, z),
    }
}

/// Whether the unit sits in a back corner of the floor.
pub fn is_corner_placement(edges: &EdgeMidpoints, floor: Floor) -> bool {
    let touches_back = approx_eq(edges.back.1, floor.back_z());
    let touches_left = approx_eq(edges.left.0, floor.left_x());
    let touches_right = approx_eq(edges.right.0, floor.right_x());
    touches_back && (touches_left || touches_right)
}

/// The floor edge a unit is flush against, checked left, right, then back.
///
/// Purely geometric: a straight booth's unit at the left floor edge is
/// attached `left` even though that booth has no left wall.
pub fn attached_wall(edges: &EdgeMidpoints, floor: Floor) -> Option<WallName> {
    let candidates = [
        (WallName::Left, approx_eq(edges.left.0, floor.left_x())),
        (WallName::Right, approx_eq(edges.right.0, floor.right_x())),
        (WallName::Back, approx_eq(edges.back.1, floor.back_z())),
    ];
    candidates
        .into_iter()
        .find(|&(_, touches)| touches)
        .map(|(name, _)| name)
}

/// Frame sections a unit needs, keyed like panel totals (`"2.5x1"`).
pub fn allocate_frames(
    hardware: &HardwareMapping,
    corner_placement: bool,
    attached: Option<WallName>,
    wall_height: f64,
) -> BTreeMap<String, u32> {
    let mut out = BTreeMap::new();
    let mut add = |key: &str, count: u32| {
        if count > 0 {
            *out.entry(key.to_string()).or_insert(0) += count;
        }
    };

    if attached == Some(WallName::Back) && !corner_placement {
        // The back wall is the box's back: one frame closes the front.
        if approx_eq(wall_height, wall_heights::LOW) {
            add(frames::FRAME_2_5, 1);
        } else if approx_eq(wall_height, wall_heights::STANDARD) {
            add(frames::FRAME_3, 1);
        } else if approx_eq(wall_height, wall_heights::TALL) {
            add(frames::FRAME_2_5, 1);
            add(frames::FRAME_1, 1);
        } else {
            add(frames::FRAME_2_5, hardware.frame_sections);
        }
        return out;
    }

    let sections = hardware.frame_sections;
    if approx_eq(wall_height, wall_heights::STANDARD) {
        add(frames::FRAME_3, sections);
    } else if approx_eq(wall_height, wall_heights::TALL) {
        add(frames::FRAME_2_5, sections);
        add(frames::FRAME_1, sections);
    } else {
        add(frames::FRAME_2_5, sections);
    }
    out
}

/// A classified storage unit with its hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageRecord {
    pub id: String,
    pub width: u32,
    pub depth: u32,
    pub corner_placement: bool,
    pub attached_wall: Option<WallName>,
    pub hardware: HardwareMapping,
    pub extra_connectors: u32,
    pub frames: BTreeMap<String, u32>,
}

impl StorageRecord {
    pub fn placement(&self) -> Placement {
        if self.corner_placement {
            Placement::Corner
        } else {
            Placement::Straight
        }
    }

    /// All connectors this unit adds, legacy extra included.
    pub fn total_connectors(&self) -> u32 {
        self.hardware.connectors.saturating_add(self.extra_connectors)
    }
}

/// Classify a unit and work out its hardware.
pub fn classify_storage(unit: &StorageUnit, floor: Floor, wall_height: f64) -> StorageRecord {
    let width = clamp_dimension(unit.width);
    let depth = clamp_dimension(unit.depth);
    let edges = edge_midpoints(unit.x, unit.z, width, depth);

    let corner_placement = is_corner_placement(&edges, floor);
    let attached = attached_wall(&edges, floor);
    let placement = if corner_placement {
        Placement::Corner
    } else {
        Placement::Straight
    };
    let hardware = lookup_hardware(placement, width);
    let frames = allocate_frames(&hardware, corner_placement, attached, wall_height);

    log::debug!(
        "storage {}: {}x{} {:?} attached={:?}",
        unit.id,
        width,
        depth,
        placement,
        attached
    );

    StorageRecord {
        id: unit.id.clone(),
        width,
        depth,
        corner_placement,
        attached_wall: attached,
        hardware,
        extra_connectors: legacy_extra_connectors(width),
        frames,
    }
}
