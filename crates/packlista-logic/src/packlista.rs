//! Packlista aggregation: booth geometry in, bill of materials out.
//!
//! Pipeline per call:
//! 1. Build the wall list from the booth shape
//! 2. Decompose every wall into columns; 3.5m walls also get a top row
//! 3. Add seam connectors and the shape's corner hardware
//! 4. Classify storage units and add their hardware and frames
//! 5. Add ballast plates
//!
//! Problems never abort the computation. An infeasible column stays in the
//! result with no stack and a [`PacklistaWarning`] is recorded, so callers
//! can report it instead of silently losing material.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns::{decompose_wall, Column};
use crate::constants::{hardware, shape_hardware, wall_heights};
use crate::scale::{approx_eq, format_tenths};
use crate::storage::{classify_storage, Floor, StorageRecord, StorageUnit};
use crate::top_row::{solve_top_row, TopRowResult};
use crate::walls::{
    baseplates, build_walls, shape_corner_hardware, wall_connectors, Wall, WallName, WallShape,
};

/// Aggregate item counts, ordered by key.
///
/// Zero counts are never stored; a missing key means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Totals(BTreeMap<String, u32>);

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` items under `key`.
    pub fn add(&mut self, key: &str, count: u32) {
        if count == 0 {
            return;
        }
        let entry = self.0.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    pub fn get(&self, key: &str) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn item_count(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.0
    }
}

/// Totals key for a panel: `"{height}x{width}"`, e.g. `"2.5x1"`.
pub fn panel_key(height_tenths: u32, width_tenths: u32) -> String {
    format!(
        "{}x{}",
        format_tenths(height_tenths),
        format_tenths(width_tenths)
    )
}

/// Something the caller should surface to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PacklistaWarning {
    /// No panel combination reaches the wall height exactly.
    InfeasibleColumn {
        wall: WallName,
        column: usize,
        height: f64,
    },
    /// The top row search found no covering.
    NoTopRowCovering { wall: WallName, length: f64 },
    /// The booth shape was not recognized; no walls were built.
    UnknownWallShape,
}

/// Everything computed for one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallInfo {
    pub name: WallName,
    pub length: f64,
    pub height: f64,
    pub columns: Vec<Column>,
    /// Only present on 3.5m walls.
    pub top_row: Option<TopRowResult>,
    pub connectors: u32,
    /// Storage units standing against this wall.
    pub storages: Vec<StorageRecord>,
}

impl WallInfo {
    /// Indices of columns without a panel stack.
    pub fn infeasible_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_feasible())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Result of one packlista computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packlista {
    pub per_wall: BTreeMap<WallName, WallInfo>,
    /// Storage units not flush with any wall.
    pub unattached_storages: Vec<StorageRecord>,
    pub totals: Totals,
    pub warnings: Vec<PacklistaWarning>,
}

impl Packlista {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// All storage records, attached ones first in wall order.
    pub fn storages(&self) -> impl Iterator<Item = &StorageRecord> {
        self.per_wall
            .values()
            .flat_map(|w| w.storages.iter())
            .chain(self.unattached_storages.iter())
    }
}

/// Compute the packing list for a booth.
///
/// All inputs are meters. Any numeric input yields a result: an unknown
/// shape builds no walls, degenerate storage sizes are clamped to 1m.
///
/// Work and memory grow linearly with the wall lengths: one [`Column`] per
/// meter and one top-row DP slot per decimeter. Callers accepting untrusted
/// dimensions should bound them first, e.g. with
/// [`validate_config`](crate::booth_config::validate_config).
pub fn compute_packlista(
    shape: WallShape,
    floor_width: f64,
    floor_depth: f64,
    wall_height: f64,
    storages: &[StorageUnit],
) -> Packlista {
    let mut totals = Totals::new();
    let mut warnings = Vec::new();
    let mut per_wall = BTreeMap::new();

    if shape == WallShape::Unknown {
        log::warn!("unknown booth shape, no walls built");
        warnings.push(PacklistaWarning::UnknownWallShape);
    }

    for wall in build_walls(shape, floor_width, floor_depth, wall_height) {
        let info = process_wall(&wall, &mut totals, &mut warnings);
        per_wall.insert(wall.name, info);
    }

    let (corner_brackets, m8_pins) = shape_corner_hardware(shape);
    totals.add(hardware::CORNER_90_4PIN, corner_brackets);
    totals.add(hardware::M8_PIN, m8_pins);

    let floor = Floor::new(floor_width, floor_depth);
    let mut unattached_storages = Vec::new();
    let mut back_wall_storage = false;
    for unit in storages {
        let record = classify_storage(unit, floor, wall_height);
        add_storage_hardware(&record, &mut totals);
        back_wall_storage |= record.attached_wall == Some(WallName::Back);

        // Units flush with a floor edge the shape has no wall on are
        // reported with the free-standing ones.
        match record.attached_wall.and_then(|name| per_wall.get_mut(&name)) {
            Some(info) => info.storages.push(record),
            None => unattached_storages.push(record),
        }
    }

    if shape == WallShape::Straight && back_wall_storage {
        totals.add(
            hardware::CORNER_90_4PIN,
            shape_hardware::STRAIGHT_STORAGE_CORNER_BRACKETS,
        );
    }

    totals.add(
        hardware::BASEPLATE,
        baseplates(shape, floor_width, floor_depth),
    );

    log::debug!(
        "packlista: {} walls, {} storages, {} keys, {} warnings",
        per_wall.len(),
        storages.len(),
        totals.len(),
        warnings.len()
    );

    Packlista {
        per_wall,
        unattached_storages,
        totals,
        warnings,
    }
}

fn process_wall(wall: &Wall, totals: &mut Totals, warnings: &mut Vec<PacklistaWarning>) -> WallInfo {
    let columns = decompose_wall(wall.length, wall.height);

    for (i, column) in columns.iter().enumerate() {
        match &column.stack {
            Some(stack) => {
                for (height, count) in stack.iter() {
                    totals.add(&panel_key(height, column.width.tenths()), count);
                }
            }
            None => {
                log::warn!(
                    "{} wall column {}: no panel combination for height {}",
                    wall.name.as_str(),
                    i,
                    wall.height
                );
                warnings.push(PacklistaWarning::InfeasibleColumn {
                    wall: wall.name,
                    column: i,
                    height: wall.height,
                });
            }
        }
    }

    let connectors = wall_connectors(columns.len(), wall.height);
    totals.add(hardware::CONNECTORS, connectors);

    let top_row = approx_eq(wall.height, wall_heights::TALL).then(|| solve_top_row(wall.length));
    if let Some(row) = &top_row {
        if row.is_covered() {
            for (&width, &count) in &row.pieces {
                totals.add(&TopRowResult::piece_key(width), count);
            }
        } else {
            log::warn!("{} wall: no top row covering", wall.name.as_str());
            warnings.push(PacklistaWarning::NoTopRowCovering {
                wall: wall.name,
                length: wall.length,
            });
        }
    }

    log::debug!(
        "{} wall {}m x {}m: {} columns, {} connectors",
        wall.name.as_str(),
        wall.length,
        wall.height,
        columns.len(),
        connectors
    );

    WallInfo {
        name: wall.name,
        length: wall.length,
        height: wall.height,
        columns,
        top_row,
        connectors,
        storages: Vec::new(),
    }
}

fn add_storage_hardware(record: &StorageRecord, totals: &mut Totals) {
    totals.add(hardware::CONNECTORS, record.total_connectors());
    totals.add(hardware::CORNER_90_4PIN, record.hardware.corner_90_4pin);
    totals.add(hardware::M8_PIN, record.hardware.m8_pin);
    totals.add(hardware::T_5PIN, record.hardware.t_5pin);
    for (key, &count) in &record.frames {
        totals.add(key, count);
    }
}
