use locprep_core::loader::read_source;
use locprep_core::model::REMOTE_CITY;
use locprep_core::{normalize, write_locations, CountryFilter, LOCATION_COLUMNS};
use std::fs;
use std::io::Write;

fn geonames_line(id: &str, name: &str, lat: &str, lon: &str, cc: &str, pop: &str) -> String {
    let mut f = vec![""; 19];
    f[0] = id;
    f[1] = name;
    f[2] = name;
    f[4] = lat;
    f[5] = lon;
    f[6] = "P";
    f[7] = "PPL";
    f[8] = cc;
    f[14] = pop;
    f[17] = "Europe/Stockholm";
    f[18] = "2024-03-01";
    f.join("\t")
}

fn sample_dump() -> String {
    [
        geonames_line("2673730", "Stockholm", "59.32938", "18.06871", "SE", "1515017"),
        geonames_line("3143244", "Oslo", "", "10.74609", "NO", "580000"),
        geonames_line("5128581", "New York City", "40.71427", "-74.00597", "US", "8804190"),
        vec!["truncated"; 18].join("\t"),
    ]
    .join("\n")
}

fn read_rows(path: &std::path::Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[test]
fn writes_schema_header_and_remote_row() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("db").join("data").join("geonames_cities.csv");

    let rows = normalize(&sample_dump(), CountryFilter::All);
    write_locations(&out, &rows).unwrap();

    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.starts_with(&format!("{}\r\n", LOCATION_COLUMNS.join(","))));
    assert_eq!(raw.matches("\r\n").count(), raw.matches('\n').count());

    let (headers, rows) = read_rows(&out);
    assert_eq!(headers.iter().collect::<Vec<_>>(), LOCATION_COLUMNS);
    assert_eq!(rows.len(), 4);

    let remote: Vec<_> = rows.iter().filter(|r| &r[1] == REMOTE_CITY).collect();
    assert_eq!(remote.len(), 1);
    assert_eq!(&remote[0][3], "SE");
    assert_eq!(&remote[0][4], "Sweden");
    assert_eq!(&remote[0][8], "0");
    assert_eq!(&remote[0][9], "true");

    let oslo = rows.iter().find(|r| &r[1] == "Oslo").unwrap();
    assert_eq!(&oslo[5], "");
    assert_eq!(&oslo[6], "10.74609");
    assert_eq!(&oslo[7], "580000");
    assert_eq!(&oslo[8], "3143244");
    assert_eq!(&oslo[9], "false");
    assert_eq!(&oslo[10], "true");
    assert_eq!(oslo[11].len(), "2024-03-01 12:00:00".len());
    assert_eq!(&oslo[11], &oslo[12]);

    assert_ne!(&rows[0][0], &rows[0][8]);
}

#[test]
fn empty_dump_still_yields_remote_row() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.csv");

    write_locations(&out, &normalize("", CountryFilter::ExtendedEurope)).unwrap();

    let (_, rows) = read_rows(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], REMOTE_CITY);
}

#[test]
fn eu_only_filters_outside_countries() {
    let rows = normalize(&sample_dump(), CountryFilter::ExtendedEurope);
    let cities: Vec<_> = rows.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(cities, ["Stockholm", "Oslo", REMOTE_CITY]);
}

#[test]
fn reads_dump_from_local_zip() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("cities15000.zip");

    let file = fs::File::create(&zip_path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("cities15000.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(sample_dump().as_bytes()).unwrap();
    zip.finish().unwrap();

    let text = read_source(&zip_path).unwrap();
    assert_eq!(text, sample_dump());
}

#[test]
fn reads_plain_text_dump() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("cities15000.txt");
    fs::write(&txt, sample_dump()).unwrap();

    let rows = normalize(&read_source(&txt).unwrap(), CountryFilter::All);
    assert_eq!(rows.len(), 4);
}
