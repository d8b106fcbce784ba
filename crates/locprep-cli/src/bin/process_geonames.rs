//! process-geonames — GeoNames dump to locations CSV
//!
//! Downloads `cities15000.zip`, extracts `cities15000.txt`, converts every
//! line into the 13-column `locations` schema and appends the "Remote"
//! placeholder row.
//!
//! Usage examples
//! --------------
//!
//! - Whole world, default output path
//!   $ process-geonames
//!
//! - Europe only, custom output
//!   $ process-geonames --eu-only --output-file data/geonames_cities.csv
//!
//! - Offline, from a previously downloaded archive
//!   $ process-geonames --source-file cities15000.zip
use anyhow::Context;
use clap::Parser;
use locprep_cli::args::ProcessArgs;
use locprep_cli::logging;
use locprep_core::{loader, normalize, write_locations};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = ProcessArgs::parse();
    logging::init();

    let text = load_dump(&args)?;
    let rows = normalize(&text, args.country_filter());

    write_locations(&args.output_file, &rows)
        .with_context(|| format!("writing {}", args.output_file.display()))?;

    info!("done");
    Ok(())
}

fn load_dump(args: &ProcessArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.source_file {
        return loader::read_source(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    #[cfg(feature = "fetch")]
    {
        loader::fetch_geonames(&args.url).with_context(|| format!("fetching {}", args.url))
    }

    #[cfg(not(feature = "fetch"))]
    {
        anyhow::bail!("built without 'fetch'; pass --source-file")
    }
}
