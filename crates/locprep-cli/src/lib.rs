//! locprep-cli
//! ===========
//!
//! Command-line tools that prepare the `locations` reference table.
//!
//! Two binaries ship with this crate:
//!
//! ```text
//! dedup-geonames <input_csv> <output_csv>
//! process-geonames [--eu-only | --strict-eu] [--output-file PATH] [--url URL] [--source-file PATH]
//! ```
//!
//! Both are one-shot: they read their input completely, write one CSV and
//! exit. Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug`
//! for per-group and per-line detail.
//!
//! For programmatic access use the [`locprep-core`] crate directly.

pub mod args;
pub mod logging;
