use clap::Parser;
use locprep_core::loader::GEONAMES_URL;
use locprep_core::CountryFilter;
use std::path::PathBuf;

/// Where `process-geonames` writes unless told otherwise.
pub const DEFAULT_OUTPUT_FILE: &str = "../db/data/geonames_cities.csv";

/// CLI arguments for dedup-geonames
#[derive(Debug, Parser)]
#[command(
    name = "dedup-geonames",
    version,
    about = "Collapse duplicate city/region/country rows of a locations CSV"
)]
pub struct DedupArgs {
    /// Locations CSV with at least city, region, country_code, population, geoname_id
    pub input_csv: PathBuf,

    /// Destination for the deduplicated CSV (overwritten)
    pub output_csv: PathBuf,
}

/// CLI arguments for process-geonames
#[derive(Debug, Parser)]
#[command(
    name = "process-geonames",
    version,
    about = "Download GeoNames cities15000 and convert it for the locations table"
)]
pub struct ProcessArgs {
    /// Only include European countries (EU, EEA and neighbours)
    #[arg(long = "eu-only")]
    pub eu_only: bool,

    /// Only include the 27 EU member states
    #[arg(long = "strict-eu", conflicts_with = "eu_only")]
    pub strict_eu: bool,

    /// Output file path
    #[arg(long = "output-file", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Archive to download
    #[arg(long = "url", env = "GEONAMES_URL", default_value = GEONAMES_URL)]
    pub url: String,

    /// Read a local .zip or .txt dump instead of downloading
    #[arg(long = "source-file")]
    pub source_file: Option<PathBuf>,
}

impl ProcessArgs {
    pub fn country_filter(&self) -> CountryFilter {
        if self.strict_eu {
            CountryFilter::EuOnly
        } else if self.eu_only {
            CountryFilter::ExtendedEurope
        } else {
            CountryFilter::All
        }
    }
}
