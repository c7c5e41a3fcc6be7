//! Packlista Headless Harness
//!
//! Validates the packing-list solvers and booth scenarios without any UI.
//! Runs entirely in-process: no rendering, no storage.
//!
//! Usage:
//!   cargo run -p packlista-simtest
//!   cargo run -p packlista-simtest -- --verbose
//!   cargo run -p packlista-simtest -- --dump

use std::collections::BTreeMap;

use log::{LevelFilter, Log, Metadata, Record};
use packlista_logic::booth_config::{standard_wall_heights, validate_config, BoothConfig};
use packlista_logic::column_stack::solve_column_stack_tenths;
use packlista_logic::columns::column_counts;
use packlista_logic::constants::{ALLOWED_HEIGHTS, TOP_WIDTHS};
use packlista_logic::packing_list::categorize_totals;
use packlista_logic::storage::StorageUnit;
use packlista_logic::top_row::solve_top_row_tenths;
use packlista_logic::walls::WallShape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

// ── Booth scenarios (shared with the designer's regression set) ─────────
const SCENARIOS_JSON: &str = include_str!("../../../data/booth_scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    config: BoothConfig,
    /// Totals keys that must match exactly; other keys are not checked.
    expect: BTreeMap<String, u32>,
    #[serde(default)]
    expect_warnings: usize,
}

// ── Logging ─────────────────────────────────────────────────────────────

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("  [{:5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let dump = std::env::args().any(|a| a == "--dump");
    if verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
    println!("=== Packlista Harness ===\n");

    let mut results = Vec::new();

    // 1. Column stack solver sweep
    results.extend(validate_column_stacks(verbose));

    // 2. Column decomposition
    results.extend(validate_column_counts(verbose));

    // 3. Top row coverings
    results.extend(validate_top_rows(verbose));

    // 4. Booth scenarios
    results.extend(validate_scenarios(verbose, dump));

    // 5. Randomized booths
    results.extend(validate_random_booths(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Column stacks ────────────────────────────────────────────────────

fn validate_column_stacks(verbose: bool) -> Vec<TestResult> {
    println!("--- Column Stacks ---");
    let mut results = Vec::new();

    // Every half-meter height up to 6m stacks exactly
    let mut inexact = Vec::new();
    for target in (5..=60).step_by(5) {
        match solve_column_stack_tenths(target) {
            Some(stack) if stack.height_tenths() == target => {
                if verbose {
                    let parts: Vec<_> = stack.iter().map(|(h, n)| format!("{n}x{h}")).collect();
                    println!("    {:>3} dm: {}", target, parts.join(" + "));
                }
            }
            _ => inexact.push(target),
        }
    }
    results.push(TestResult {
        name: "stack_exact_sums".into(),
        passed: inexact.is_empty(),
        detail: if inexact.is_empty() {
            "0.5m..6.0m all stack exactly".into()
        } else {
            format!("no exact stack for {:?} dm", inexact)
        },
    });

    // Heights off the half-meter grid are infeasible
    let off_grid: Vec<u32> = [3, 7, 27, 33]
        .into_iter()
        .filter(|&t| solve_column_stack_tenths(t).is_some())
        .collect();
    results.push(TestResult {
        name: "stack_infeasible_off_grid".into(),
        passed: off_grid.is_empty(),
        detail: format!("{} off-grid heights solved unexpectedly", off_grid.len()),
    });

    // 2.5m preference on equal piece counts
    let five = solve_column_stack_tenths(50).map(|s| s.count(25));
    let four = solve_column_stack_tenths(40).map(|s| s.count(25));
    results.push(TestResult {
        name: "stack_prefers_2_5".into(),
        passed: five == Some(2) && four == Some(1),
        detail: format!("5.0m uses {:?} x 2.5m, 4.0m uses {:?}", five, four),
    });

    // Palette heights are single panels
    let singles = ALLOWED_HEIGHTS
        .iter()
        .all(|&h| solve_column_stack_tenths(h).is_some_and(|s| s.pieces() == 1));
    results.push(TestResult {
        name: "stack_palette_singles".into(),
        passed: singles,
        detail: format!("{} palette heights", ALLOWED_HEIGHTS.len()),
    });

    results
}

// ── 2. Column counts ────────────────────────────────────────────────────

fn validate_column_counts(_verbose: bool) -> Vec<TestResult> {
    println!("--- Column Counts ---");
    let mut results = Vec::new();

    let cases = [
        (3.0, (3, false)),
        (3.2, (3, false)),
        (3.4, (3, false)),
        (3.5, (3, true)),
        (0.5, (0, true)),
        (6.0, (6, false)),
    ];
    for (length, expected) in cases {
        let got = column_counts(length);
        results.push(TestResult {
            name: format!("columns_{length}m"),
            passed: got == expected,
            detail: format!("{} full, half={} (expected {:?})", got.0, got.1, expected),
        });
    }

    results
}

// ── 3. Top rows ─────────────────────────────────────────────────────────

fn validate_top_rows(verbose: bool) -> Vec<TestResult> {
    println!("--- Top Rows ---");
    let mut results = Vec::new();

    let mut negative = 0;
    let mut short = 0;
    let mut max_waste = 0.0_f64;
    for target in 0..=100 {
        let row = solve_top_row_tenths(target);
        let covered: u32 = row.pieces.iter().map(|(w, n)| w * n).sum();
        match row.waste_meters {
            Some(waste) if waste < 0.0 => negative += 1,
            Some(waste) => max_waste = max_waste.max(waste),
            None => short += 1,
        }
        if covered < target {
            short += 1;
        }
    }
    results.push(TestResult {
        name: "top_row_covers".into(),
        passed: negative == 0 && short == 0,
        detail: format!(
            "0..10m covered, max waste {:.1}m ({} negative, {} short)",
            max_waste, negative, short
        ),
    });

    // Exact palette widths waste nothing
    let exact = TOP_WIDTHS
        .iter()
        .all(|&w| solve_top_row_tenths(w).waste_meters == Some(0.0));
    results.push(TestResult {
        name: "top_row_exact_palette".into(),
        passed: exact,
        detail: "palette widths cover with zero waste".into(),
    });

    if verbose {
        for target in [12, 35, 45, 57] {
            let row = solve_top_row_tenths(target);
            println!(
                "    {:>3} dm: {:?} waste={:?}",
                target, row.pieces, row.waste_meters
            );
        }
    }

    results
}

// ── 4. Booth scenarios ──────────────────────────────────────────────────

fn validate_scenarios(verbose: bool, dump: bool) -> Vec<TestResult> {
    println!("--- Booth Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    for scenario in &scenarios {
        let result = scenario.config.packlista();

        let mismatches: Vec<String> = scenario
            .expect
            .iter()
            .filter(|&(key, &want)| result.totals.get(key) != want)
            .map(|(key, want)| format!("{key}: got {} want {want}", result.totals.get(key)))
            .collect();
        results.push(TestResult {
            name: format!("scenario_{}", scenario.name),
            passed: mismatches.is_empty(),
            detail: if mismatches.is_empty() {
                format!("{} keys checked", scenario.expect.len())
            } else {
                mismatches.join(", ")
            },
        });

        results.push(TestResult {
            name: format!("scenario_{}_warnings", scenario.name),
            passed: result.warnings.len() == scenario.expect_warnings,
            detail: format!(
                "{} warnings (expected {})",
                result.warnings.len(),
                scenario.expect_warnings
            ),
        });

        let again = scenario.config.packlista();
        let same = match (
            serde_json::to_string(&result.totals),
            serde_json::to_string(&again.totals),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        results.push(TestResult {
            name: format!("scenario_{}_deterministic", scenario.name),
            passed: same,
            detail: "identical totals on repeat".into(),
        });

        if verbose {
            let errors = validate_config(&scenario.config);
            if !errors.is_empty() {
                println!("    {}: config notes {:?}", scenario.name, errors);
            }
        }

        if dump {
            println!("  {}:", scenario.name);
            for section in categorize_totals(&result.totals) {
                println!("    {} ({})", section.category.title(), section.item_count());
                for line in &section.lines {
                    println!("      {:>4}  {}", line.count, line.description);
                }
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("    (could not serialize: {e})"),
            }
        }
    }

    results
}

// ── 5. Random booths ────────────────────────────────────────────────────

fn validate_random_booths(verbose: bool) -> Vec<TestResult> {
    println!("--- Random Booths ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);

    let shapes = [WallShape::Straight, WallShape::L, WallShape::U];
    let heights = standard_wall_heights();
    let runs = 500;
    let mut incomplete = 0;
    let mut zero_keys = 0;
    let mut lost_storage = 0;

    for _ in 0..runs {
        let config = BoothConfig {
            wall_shape: shapes[rng.gen_range(0..shapes.len())],
            floor_width: rng.gen_range(2..=16) as f64 * 0.5,
            floor_depth: rng.gen_range(2..=12) as f64 * 0.5,
            wall_height: heights[rng.gen_range(0..heights.len())],
            storages: (0..rng.gen_range(0..3))
                .map(|i| StorageUnit {
                    id: format!("s{i}"),
                    x: rng.gen_range(-3..=3) as f64 * 0.5,
                    z: rng.gen_range(-3..=3) as f64 * 0.5,
                    width: rng.gen_range(1..=3) as f64,
                    depth: 1.0,
                })
                .collect(),
        };

        let result = config.packlista();
        if !result.is_complete() {
            incomplete += 1;
            if verbose {
                println!("    incomplete: {:?}", result.warnings);
            }
        }
        zero_keys += result.totals.iter().filter(|&(_, n)| n == 0).count();
        if result.storages().count() != config.storages.len() {
            lost_storage += 1;
        }
    }

    results.push(TestResult {
        name: "random_standard_heights_complete".into(),
        passed: incomplete == 0,
        detail: format!("{} of {} booths incomplete", incomplete, runs),
    });
    results.push(TestResult {
        name: "random_no_zero_keys".into(),
        passed: zero_keys == 0,
        detail: format!("{} zero-count keys", zero_keys),
    });
    results.push(TestResult {
        name: "random_storage_accounted".into(),
        passed: lost_storage == 0,
        detail: format!("{} booths lost a storage record", lost_storage),
    });

    results
}
