//! dedup-geonames — keep one row per city/region/country
//!
//! Reads a locations CSV, keeps the most populous row of every
//! `(city, region, country_code)` group (smallest `geoname_id` on ties),
//! drops the coordinate columns and writes the result.
//!
//! Usage
//! -----
//!
//!   $ dedup-geonames geonames_cities.csv geonames_cities_dedup.csv
//!
//! The summary report is printed to stdout; logs go to stderr.
use anyhow::Context;
use clap::Parser;
use locprep_cli::args::DedupArgs;
use locprep_cli::logging;
use locprep_core::dedup_file;

fn main() -> anyhow::Result<()> {
    let args = DedupArgs::parse();
    logging::init();

    let report = dedup_file(&args.input_csv, &args.output_csv).with_context(|| {
        format!(
            "deduplicating {} into {}",
            args.input_csv.display(),
            args.output_csv.display()
        )
    })?;

    print!("{report}");
    Ok(())
}
