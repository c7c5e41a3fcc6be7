//! Pure packing-list logic for modular booth walls.
//!
//! This crate turns a booth's wall geometry into an exact bill of materials
//! for a modular panel system. Functions take plain data and return results;
//! there is no I/O, no shared state, and every call is deterministic, so the
//! engine can run in a browser (WASM), a backend, or the headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`booth_config`] | Booth data model, advisory validation, summary figures |
//! | [`coin_dp`] | Generic unbounded-coin DP shared by both solvers |
//! | [`column_stack`] | Fewest panels stacking exactly to a wall height |
//! | [`columns`] | Wall split into 1.0m columns plus a 0.5m remainder |
//! | [`constants`] | Panel palettes, tolerances, hardware key names |
//! | [`packing_list`] | Report sections grouped by key naming convention |
//! | [`packlista`] | Aggregation of walls, storage and hardware into totals |
//! | [`scale`] | Fixed-point tenths of a meter and decimal labels |
//! | [`storage`] | Storage placement classification and hardware tables |
//! | [`top_row`] | Least-waste top-row covering for 3.5m walls |
//! | [`walls`] | Booth shapes, wall list, connectors, baseplates |

pub mod booth_config;
pub mod coin_dp;
pub mod column_stack;
pub mod columns;
pub mod constants;
pub mod packing_list;
pub mod packlista;
pub mod scale;
pub mod storage;
pub mod top_row;
pub mod walls;

pub use packlista::{compute_packlista, Packlista, PacklistaWarning, Totals, WallInfo};
