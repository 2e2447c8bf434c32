use isocodes_core::prelude::*;
use isocodes_core::{default_data_dir, DbStats, IsoCode};
use std::fs;
use std::path::PathBuf;

/// Scratch directory seeded with the bundled documents.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("isocodes-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for code in IsoCode::ALL {
        fs::copy(
            default_data_dir().join(code.file_name()),
            dir.join(code.file_name()),
        )
        .unwrap();
    }
    dir
}

#[test]
fn loads_bundled_catalogs() {
    let catalogs = Catalogs::load_from_dir(default_data_dir()).unwrap();
    assert_eq!(
        catalogs.stats(),
        DbStats {
            countries: 249,
            subdivisions: 174,
            currencies: 180,
        }
    );
}

#[test]
fn global_instance_is_shared() {
    let a = Catalogs::load().unwrap();
    let b = Catalogs::load().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn missing_directory_is_not_found() {
    let err = Catalogs::load_from_dir("/no/such/isocodes/dir").unwrap_err();
    assert!(matches!(err, IsoError::NotFound(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn one_bad_record_fails_the_load() {
    let dir = scratch("bad-record");
    fs::write(
        dir.join("iso4217.json"),
        r#"{"4217": [
            {"alpha_3": "EUR", "name": "Euro", "numeric": "978"},
            {"alpha_3": "XXX", "name": "Broken", "numeric": "999", "minor_unit": "2"}
        ]}"#,
    )
    .unwrap();

    let err = Catalogs::load_from_dir(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(err.to_string().contains("minor_unit"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn cyclic_parents_fail_the_load() {
    let dir = scratch("cycle");
    fs::write(
        dir.join("iso3166-2.json"),
        r#"{"3166-2": [
            {"code": "XX-A", "name": "A", "type": "Region", "parent": "B"},
            {"code": "XX-B", "name": "B", "type": "Region", "parent": "A"}
        ]}"#,
    )
    .unwrap();

    let err = Catalogs::load_from_dir(&dir).unwrap_err();
    assert!(matches!(err, IsoError::Schema { .. }));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn dangling_parent_is_accepted() {
    let dir = scratch("dangling");
    fs::write(
        dir.join("iso3166-2.json"),
        r#"{"3166-2": [
            {"code": "FR-63", "name": "Puy-de-Dôme", "type": "Metropolitan department", "parent": "ARA"}
        ]}"#,
    )
    .unwrap();

    let catalogs = Catalogs::load_from_dir(&dir).unwrap();
    let subs = catalogs.subdivisions();
    let puy = subs.find(SubdivisionField::Code, "FR-63").unwrap();
    assert!(subs.parent_of(puy).is_none());
    assert_eq!(subs.country_of(puy).unwrap().alpha_2, "FR");
    let _ = fs::remove_dir_all(dir);
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_documents_are_read() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = scratch("gzip");
    let plain = dir.join("iso4217.json");
    let bytes = fs::read(&plain).unwrap();
    fs::remove_file(&plain).unwrap();

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(&bytes).unwrap();
    fs::write(dir.join("iso4217.json.gz"), enc.finish().unwrap()).unwrap();

    let currencies = Database::<Currency>::load_from_dir(&dir).unwrap();
    assert_eq!(currencies.len(), 180);
    assert_eq!(
        currencies.lookup("EUR").unwrap().map(|c| c.numeric.as_str()),
        Some("978")
    );
    let _ = fs::remove_dir_all(dir);
}

#[cfg(feature = "compact")]
#[test]
fn corrupt_gzip_is_io_error() {
    let dir = scratch("corrupt-gzip");
    let plain = dir.join("iso4217.json");
    fs::remove_file(&plain).unwrap();
    fs::write(dir.join("iso4217.json.gz"), b"this is not gzip").unwrap();

    let err = Database::<Currency>::load_from_dir(&dir).unwrap_err();
    assert!(matches!(err, IsoError::Io(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Io);
    let _ = fs::remove_dir_all(dir);
}
