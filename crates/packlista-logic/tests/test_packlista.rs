//! Integration tests for the full packlista pipeline.
//!
//! Exercises: BoothConfig → walls → columns / top row → storage hardware
//! → Totals → packing-list sections
//!
//! All tests are pure logic, with no rendering and no storage.

use packlista_logic::booth_config::{validate_config, BoothConfig};
use packlista_logic::constants::{ALLOWED_HEIGHTS, TOP_ROW_HEIGHT_LABEL, TOP_WIDTHS};
use packlista_logic::packing_list::{categorize_totals, Category};
use packlista_logic::scale::to_tenths;
use packlista_logic::storage::StorageUnit;
use packlista_logic::walls::{WallName, WallShape};
use packlista_logic::{compute_packlista, Packlista, PacklistaWarning};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ────────────────────────────────────────────────────────────

fn storage(id: &str, x: f64, z: f64, width: f64, depth: f64) -> StorageUnit {
    StorageUnit {
        id: id.to_string(),
        x,
        z,
        width,
        depth,
    }
}

/// Parse a `"{height}x{width}"` key into tenths.
fn key_dimensions(key: &str) -> Option<(i64, i64)> {
    let (h, w) = key.split_once('x')?;
    Some((to_tenths(h.parse().ok()?), to_tenths(w.parse().ok()?)))
}

fn panel_entries(result: &Packlista) -> Vec<(String, u32)> {
    result
        .totals
        .iter()
        .filter(|(k, _)| key_dimensions(k).is_some())
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// ── Booth shapes ───────────────────────────────────────────────────────

#[test]
fn straight_three_meter_wall_uses_single_panels() {
    let result = compute_packlista(WallShape::Straight, 3.0, 2.0, 3.0, &[]);

    assert_eq!(result.totals.get("3x1"), 3);
    assert_eq!(result.totals.get("connectors"), 6);
    assert_eq!(result.totals.get("corner_90_4pin"), 0);
    assert_eq!(result.totals.get("baseplate"), 1);

    let back = &result.per_wall[&WallName::Back];
    assert_eq!(back.columns.len(), 3);
    assert!(back.top_row.is_none());
    assert!(result.is_complete());
}

#[test]
fn back_wall_storage_adds_frame_and_bracing() {
    let base = compute_packlista(WallShape::Straight, 3.0, 2.0, 3.0, &[]);
    let storages = [storage("closet", 0.0, -0.5, 1.0, 1.0)];
    let result = compute_packlista(WallShape::Straight, 3.0, 2.0, 3.0, &storages);

    let record = &result.per_wall[&WallName::Back].storages[0];
    assert!(!record.corner_placement);
    assert_eq!(record.width, 1);

    // Back-wall frame rule at 3.0m: exactly one 3x1.
    assert_eq!(result.totals.get("3x1"), base.totals.get("3x1") + 1);
    assert_eq!(
        result.totals.get("connectors"),
        base.totals.get("connectors") + record.hardware.connectors
    );
    assert_eq!(
        result.totals.get("corner_90_4pin"),
        record.hardware.corner_90_4pin + 2
    );
    assert_eq!(result.totals.get("t_5pin"), record.hardware.t_5pin);
    assert_eq!(result.totals.get("m8_pin"), record.hardware.m8_pin);
}

#[test]
fn tall_wall_charges_per_column_and_adds_top_row() {
    let result = compute_packlista(WallShape::Straight, 4.5, 2.0, 3.5, &[]);
    let back = &result.per_wall[&WallName::Back];

    assert_eq!(back.columns.len(), 5);
    assert_eq!(result.totals.get("2.5x1"), 4);
    assert_eq!(result.totals.get("2.5x0.5"), 1);
    assert_eq!(back.connectors, 5 * 3);
    assert_eq!(result.totals.get("connectors"), 15);
    // Straight baseplates only count whole widths of 3, 4 and 5+.
    assert_eq!(result.totals.get("baseplate"), 0);

    let row = back.top_row.as_ref().unwrap();
    assert_eq!(row.waste_meters, Some(0.0));
    let covered: u32 = row.pieces.iter().map(|(w, n)| w * n).sum();
    assert_eq!(covered, 45);

    let top_keys: Vec<_> = result
        .totals
        .iter()
        .filter(|(k, _)| k.starts_with(&format!("{TOP_ROW_HEIGHT_LABEL}x")))
        .collect();
    assert!(!top_keys.is_empty());
    let top_count: u32 = top_keys.iter().map(|(_, n)| n).sum();
    assert_eq!(top_count, row.piece_count());
}

#[test]
fn u_shape_adds_corner_hardware_to_all_walls() {
    let result = compute_packlista(WallShape::U, 4.0, 3.0, 2.5, &[]);

    assert_eq!(result.per_wall.len(), 3);
    assert_eq!(result.totals.get("corner_90_4pin"), 4);
    assert_eq!(result.totals.get("m8_pin"), 8);
    // 4 + 3 + 3 columns of one 2.5m panel each.
    assert_eq!(result.totals.get("2.5x1"), 10);
    // (4-1)*2 + (3-1)*2 + (3-1)*2
    assert_eq!(result.totals.get("connectors"), 14);
    assert_eq!(result.totals.get("baseplate"), 1);
}

#[test]
fn l_shape_adds_pins_only() {
    let result = compute_packlista(WallShape::L, 4.0, 3.0, 3.0, &[]);
    assert_eq!(result.totals.get("m8_pin"), 4);
    assert_eq!(result.totals.get("corner_90_4pin"), 0);
    assert!(result.per_wall.contains_key(&WallName::Left));
    assert!(!result.per_wall.contains_key(&WallName::Right));
}

#[test]
fn corner_storage_uses_corner_table() {
    let storages = [storage("corner", 1.5, -1.0, 1.0, 1.0)];
    let result = compute_packlista(WallShape::U, 4.0, 3.0, 3.0, &storages);
    let record = result.storages().next().unwrap();
    assert!(record.corner_placement);
    assert_eq!(record.attached_wall, Some(WallName::Right));
    assert_eq!(
        result.totals.get("3x1"),
        4 + 3 + 3 + record.hardware.frame_sections
    );
}

// ── Failure semantics ──────────────────────────────────────────────────

#[test]
fn infeasible_height_surfaces_per_wall() {
    let result = compute_packlista(WallShape::U, 3.0, 2.0, 0.3, &[]);
    assert_eq!(result.per_wall.len(), 3);
    for info in result.per_wall.values() {
        assert_eq!(info.infeasible_columns().len(), info.columns.len());
    }
    assert!(panel_entries(&result).is_empty());
    assert!(result
        .warnings
        .iter()
        .all(|w| matches!(w, PacklistaWarning::InfeasibleColumn { height, .. } if *height == 0.3)));
}

#[test]
fn garbage_numbers_do_not_panic() {
    let storages = [
        storage("nan", f64::NAN, f64::NAN, f64::NAN, -1.0),
        storage("huge", 1e9, -1e9, 1e6, 0.0),
    ];
    for &(w, d, h) in &[
        (f64::NAN, 2.0, 2.5),
        (-3.0, -2.0, 3.0),
        (0.0, 0.0, 3.5),
        (3.0, 2.0, f64::INFINITY),
    ] {
        for shape in [WallShape::Straight, WallShape::L, WallShape::U, WallShape::Unknown] {
            let _ = compute_packlista(shape, w, d, h, &storages);
        }
    }
}

// ── Determinism ────────────────────────────────────────────────────────

#[test]
fn deterministic_output() {
    let config = BoothConfig {
        wall_shape: WallShape::U,
        floor_width: 5.5,
        floor_depth: 3.0,
        wall_height: 3.5,
        storages: vec![
            storage("a", -2.25, -1.0, 1.0, 1.0),
            storage("b", 0.5, 0.5, 2.0, 1.0),
        ],
    };
    let first = serde_json::to_string(&config.packlista().totals).unwrap();
    let second = serde_json::to_string(&config.packlista().totals).unwrap();
    assert_eq!(first, second);
    assert_eq!(config.packlista(), config.packlista());
}

#[test]
fn totals_serialize_as_flat_map() {
    let result = compute_packlista(WallShape::Straight, 3.0, 2.0, 3.0, &[]);
    let json = serde_json::to_value(&result.totals).unwrap();
    let map = json.as_object().unwrap();
    assert_eq!(map["3x1"], 3);
    assert_eq!(map["connectors"], 6);
}

#[test]
fn config_from_json_matches_direct_call() {
    let json = r#"{
        "wall_shape": "straight",
        "floor_width": 3,
        "floor_depth": 2,
        "wall_height": 3,
        "storages": [{"id": "closet", "x": 0, "z": -0.5, "width": 1, "depth": 1}]
    }"#;
    let config: BoothConfig = serde_json::from_str(json).unwrap();
    assert!(validate_config(&config).is_empty());
    let direct = compute_packlista(
        WallShape::Straight,
        3.0,
        2.0,
        3.0,
        &[storage("closet", 0.0, -0.5, 1.0, 1.0)],
    );
    assert_eq!(config.packlista(), direct);
}

// ── Packing list ───────────────────────────────────────────────────────

#[test]
fn packing_list_covers_every_total() {
    let storages = [storage("a", -1.5, -1.0, 1.0, 1.0)];
    let result = compute_packlista(WallShape::U, 4.0, 3.0, 3.5, &storages);
    let sections = categorize_totals(&result.totals);

    let listed: u32 = sections.iter().map(|s| s.item_count()).sum();
    assert_eq!(listed, result.totals.item_count());
    let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
    assert!(categories.contains(&Category::Panels));
    assert!(categories.contains(&Category::TopRow));
    assert!(categories.contains(&Category::CornerBrackets));
    assert!(!categories.contains(&Category::Other));
}

// ── Randomized sweep ───────────────────────────────────────────────────

#[test]
fn random_booths_respect_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let shapes = [WallShape::Straight, WallShape::L, WallShape::U];
    let heights = [2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 2.7];

    for _ in 0..200 {
        let shape = shapes[rng.gen_range(0..shapes.len())];
        let width = rng.gen_range(2..=16) as f64 * 0.5;
        let depth = rng.gen_range(2..=12) as f64 * 0.5;
        let height = heights[rng.gen_range(0..heights.len())];
        let storages: Vec<_> = (0..rng.gen_range(0..4))
            .map(|i| {
                storage(
                    &format!("s{i}"),
                    rng.gen_range(-4.0..4.0),
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(1..=4) as f64,
                    rng.gen_range(1..=2) as f64,
                )
            })
            .collect();

        let result = compute_packlista(shape, width, depth, height, &storages);
        assert_eq!(result, compute_packlista(shape, width, depth, height, &storages));

        for (key, count) in result.totals.iter() {
            assert!(count > 0, "{key} stored with zero count");
            if let Some((h, w)) = key_dimensions(key) {
                if key.starts_with(&format!("{TOP_ROW_HEIGHT_LABEL}x")) {
                    assert!(TOP_WIDTHS.contains(&(w as u32)), "top-row key {key}");
                } else {
                    assert!(ALLOWED_HEIGHTS.contains(&(h as u32)), "panel key {key}");
                    assert!(w == 10 || w == 5, "panel key {key}");
                }
            }
        }

        for info in result.per_wall.values() {
            for column in info.columns.iter().filter_map(|c| c.stack.as_ref()) {
                let stacked = column.height_tenths() as i64;
                if (height - 3.5).abs() < 1e-6 {
                    assert_eq!(stacked, 25);
                } else {
                    assert_eq!(stacked, to_tenths(height));
                }
            }
        }

        assert_eq!(result.storages().count(), storages.len());
    }
}
