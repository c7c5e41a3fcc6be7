//! Booth configuration and validation.
//!
//! The booth designer collects shape, floor size, wall height and storage
//! placements. This module holds that data model and an advisory
//! validation pass; [`compute_packlista`] accepts any numeric input, so
//! validation only tells the caller what will look odd on the packing list.
//!
//! ```
//! use packlista_logic::booth_config::{validate_config, BoothConfig};
//! use packlista_logic::walls::WallShape;
//!
//! let mut config = BoothConfig::default();
//! config.wall_shape = WallShape::U;
//! config.floor_width = 4.0;
//! config.floor_depth = 3.0;
//! assert!(validate_config(&config).is_empty());
//! assert_eq!(config.packlista().per_wall.len(), 3);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column_stack::solve_column_stack;
use crate::constants::{wall_heights, EPS, MAX_FLOOR_SIDE};
use crate::packlista::{compute_packlista, Packlista};
use crate::scale::approx_eq;
use crate::storage::{clamp_dimension, StorageUnit};
use crate::walls::{build_walls, WallShape};

/// Booth as configured in the designer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoothConfig {
    pub wall_shape: WallShape,
    /// Floor width in meters (length of the back wall).
    pub floor_width: f64,
    /// Floor depth in meters (length of the side walls).
    pub floor_depth: f64,
    /// Wall height in meters.
    pub wall_height: f64,
    #[serde(default)]
    pub storages: Vec<StorageUnit>,
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            wall_shape: WallShape::Straight,
            floor_width: 3.0,
            floor_depth: 2.0,
            wall_height: wall_heights::LOW,
            storages: Vec::new(),
        }
    }
}

impl BoothConfig {
    /// Compute the packing list for this booth.
    pub fn packlista(&self) -> Packlista {
        compute_packlista(
            self.wall_shape,
            self.floor_width,
            self.floor_depth,
            self.wall_height,
            &self.storages,
        )
    }
}

/// Wall heights offered by the booth designer.
pub fn standard_wall_heights() -> &'static [f64] {
    &[wall_heights::LOW, wall_heights::STANDARD, wall_heights::TALL]
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Floor width is zero, negative or not a number.
    InvalidFloorWidth(f64),
    /// Floor depth is zero, negative or not a number.
    InvalidFloorDepth(f64),
    /// A floor side is longer than [`MAX_FLOOR_SIDE`].
    FloorTooLarge(f64),
    /// No exact panel stack reaches this wall height.
    UnsupportedWallHeight(f64),
    /// Shape name was not recognized.
    UnknownWallShape,
    /// Storage position is not a finite number.
    InvalidStoragePosition(String),
    /// Storage footprint extends past the floor edge.
    StorageOutsideFloor(String),
    /// Two storage footprints overlap.
    StorageOverlap(String, String),
    /// Two storage units share an id.
    DuplicateStorageId(String),
}

/// Footprint of a storage unit after size rounding: (min_x, min_z, max_x, max_z).
fn footprint(unit: &StorageUnit) -> (f64, f64, f64, f64) {
    let half_width = clamp_dimension(unit.width) as f64 / 2.0;
    let half_depth = clamp_dimension(unit.depth) as f64 / 2.0;
    (
        unit.x - half_width,
        unit.z - half_depth,
        unit.x + half_width,
        unit.z + half_depth,
    )
}

/// Validate a booth configuration, returning all errors found.
pub fn validate_config(config: &BoothConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.wall_shape == WallShape::Unknown {
        errors.push(ConfigError::UnknownWallShape);
    }
    if !(config.floor_width.is_finite() && config.floor_width > 0.0) {
        errors.push(ConfigError::InvalidFloorWidth(config.floor_width));
    }
    if !(config.floor_depth.is_finite() && config.floor_depth > 0.0) {
        errors.push(ConfigError::InvalidFloorDepth(config.floor_depth));
    }
    for side in [config.floor_width, config.floor_depth] {
        if side.is_finite() && side > MAX_FLOOR_SIDE {
            errors.push(ConfigError::FloorTooLarge(side));
        }
    }

    let tall = approx_eq(config.wall_height, wall_heights::TALL);
    if !tall && solve_column_stack(config.wall_height).is_none() {
        errors.push(ConfigError::UnsupportedWallHeight(config.wall_height));
    }

    let half_width = config.floor_width / 2.0;
    let half_depth = config.floor_depth / 2.0;
    let mut seen = HashSet::new();
    for unit in &config.storages {
        if !seen.insert(unit.id.as_str()) {
            errors.push(ConfigError::DuplicateStorageId(unit.id.clone()));
        }
        if !(unit.x.is_finite() && unit.z.is_finite()) {
            errors.push(ConfigError::InvalidStoragePosition(unit.id.clone()));
            continue;
        }
        let (min_x, min_z, max_x, max_z) = footprint(unit);
        if min_x < -half_width - EPS
            || max_x > half_width + EPS
            || min_z < -half_depth - EPS
            || max_z > half_depth + EPS
        {
            errors.push(ConfigError::StorageOutsideFloor(unit.id.clone()));
        }
    }

    // Touching edges are allowed.
    let placed: Vec<_> = config
        .storages
        .iter()
        .filter(|u| u.x.is_finite() && u.z.is_finite())
        .collect();
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let a = footprint(placed[i]);
            let b = footprint(placed[j]);
            let overlap_x = a.2 - EPS > b.0 && b.2 - EPS > a.0;
            let overlap_z = a.3 - EPS > b.1 && b.3 - EPS > a.1;
            if overlap_x && overlap_z {
                errors.push(ConfigError::StorageOverlap(
                    placed[i].id.clone(),
                    placed[j].id.clone(),
                ));
            }
        }
    }

    errors
}

/// Derived booth figures for the designer's summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoothSummary {
    pub wall_count: u32,
    /// Sum of all wall lengths in meters.
    pub total_wall_length: f64,
    /// Wall surface in square meters.
    pub wall_area: f64,
    pub floor_area: f64,
    pub storage_count: u32,
}

pub fn summarize(config: &BoothConfig) -> BoothSummary {
    let walls = build_walls(
        config.wall_shape,
        config.floor_width,
        config.floor_depth,
        config.wall_height,
    );
    let total_wall_length: f64 = walls.iter().map(|w| w.length).sum();
    BoothSummary {
        wall_count: walls.len() as u32,
        total_wall_length,
        wall_area: total_wall_length * config.wall_height,
        floor_area: config.floor_width * config.floor_depth,
        storage_count: config.storages.len() as u32,
    }
}
