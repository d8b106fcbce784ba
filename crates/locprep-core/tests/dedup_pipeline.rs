use locprep_core::dedup_file;
use std::fs;

#[test]
fn dedup_file_drops_coordinates_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("locations.csv");
    let output = dir.path().join("out").join("locations_dedup.csv");

    fs::write(
        &input,
        "id,city,region,country_code,country_name,latitude,longitude,population,geoname_id,is_active\n\
         a,Paris,,FR,France,48.85,2.35,2000,5,true\n\
         b,Paris,,FR,France,48.86,2.34,2000,3,true\n\
         c,Lyon,,FR,France,45.76,4.83,500,9,true\n\
         d,\"Frankfurt, Oder\",BB,DE,Germany,,,57000,2925533,true\n",
    )
    .unwrap();

    let report = dedup_file(&input, &output).unwrap();
    assert_eq!(report.total_entries, 4);
    assert_eq!(report.unique_entries, 3);
    assert_eq!(report.groups_with_duplicates, 1);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("id,city,region,country_code,country_name,population,geoname_id,is_active\r\n"));
    assert!(written.ends_with("true\r\n"));
    assert!(!written.replace("\r\n", "").contains('\n'));
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            "id,city,region,country_code,country_name,population,geoname_id,is_active",
            "b,Paris,,FR,France,2000,3,true",
            "c,Lyon,,FR,France,500,9,true",
            "d,\"Frankfurt, Oder\",BB,DE,Germany,57000,2925533,true",
        ]
    );
}

#[test]
fn every_group_key_appears_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");

    let mut csv = String::from("city,region,country_code,population,geoname_id\n");
    for i in 0..50u32 {
        let city = format!("Town{}", i % 7);
        let region = if i % 2 == 0 { "" } else { "R1" };
        csv.push_str(&format!("{city},{region},SE,{},{}\n", i * 10 % 30, 1000 - i));
    }
    fs::write(&input, csv).unwrap();

    dedup_file(&input, &output).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let mut seen = std::collections::HashSet::new();
    for record in reader.records() {
        let record = record.unwrap();
        let key = (record[0].to_owned(), record[1].to_owned(), record[2].to_owned());
        assert!(seen.insert(key), "duplicate key in output");
    }
    assert_eq!(seen.len(), 14);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");

    assert!(dedup_file(dir.path().join("nope.csv"), &output).is_err());
    assert!(!output.exists());
}
