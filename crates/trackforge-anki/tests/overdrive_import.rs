use std::fs;
use trackforge_anki::overdrive::{OverdriveMap, OVERDRIVE_MAP_SUBPATH};
use trackforge_core::{Error, ImportError};

/// Closed modular loop: four straights alternating with four left quarters.
const CAPSULE_MAP: &str = "\
1 8
33 0 0.0
18 0 0.0
17 0 1.5707963267948966
18 0 1.5707963267948966
17 0 3.141592653589793
18 0 3.141592653589793
17 0 4.71238898038469
18 0 4.71238898038469
";

fn write_map(dir: &std::path::Path, name: &str, contents: &str) {
    let maps_dir = dir.join(OVERDRIVE_MAP_SUBPATH);
    fs::create_dir_all(&maps_dir).unwrap();
    fs::write(maps_dir.join(name), contents).unwrap();
}

#[test]
fn test_import_modular_loop() {
    let appdata = tempfile::tempdir().unwrap();
    write_map(appdata.path(), "modular_capsule.txt", CAPSULE_MAP);

    let map = OverdriveMap::load(appdata.path(), "modular_capsule.txt").unwrap();
    assert_eq!(map.len(), 8);

    let track = map.convert(0.0).unwrap();
    assert_eq!(track.len(), 8);
    assert!(track.is_closed(1e-6));
}

#[test]
fn test_missing_map_file_is_not_found() {
    let appdata = tempfile::tempdir().unwrap();
    let err = OverdriveMap::load(appdata.path(), "nope.txt").unwrap_err();
    assert!(matches!(
        err,
        Error::Import(ImportError::NotFound { .. })
    ));
}

#[test]
fn test_unsupported_version_is_rejected() {
    let appdata = tempfile::tempdir().unwrap();
    write_map(appdata.path(), "future.txt", "2 1\n17 0 0.0\n");
    let err = OverdriveMap::load(appdata.path(), "future.txt").unwrap_err();
    assert!(matches!(
        err,
        Error::Import(ImportError::UnsupportedVersion { version: 2 })
    ));
}

#[test]
fn test_truncated_map_is_rejected() {
    let appdata = tempfile::tempdir().unwrap();
    write_map(appdata.path(), "short.txt", "1 3\n17 0 0.0\n");
    let err = OverdriveMap::load(appdata.path(), "short.txt").unwrap_err();
    assert!(matches!(
        err,
        Error::Import(ImportError::Truncated {
            expected: 3,
            found: 1
        })
    ));
}

#[test]
fn test_surplus_records_are_rejected() {
    let appdata = tempfile::tempdir().unwrap();
    write_map(appdata.path(), "long.txt", "1 1\n17 0 0.0\n17 0 0.0\n");
    let err = OverdriveMap::load(appdata.path(), "long.txt").unwrap_err();
    assert!(matches!(
        err,
        Error::Import(ImportError::Malformed { line: 3, .. })
    ));
}

#[test]
fn test_reversed_flag_mirrors_curve() {
    let appdata = tempfile::tempdir().unwrap();
    write_map(appdata.path(), "left.txt", "1 1\n18 0 0.0\n");
    write_map(appdata.path(), "right.txt", "1 1\n18 1 0.0\n");

    let left = OverdriveMap::load(appdata.path(), "left.txt")
        .unwrap()
        .convert(0.0)
        .unwrap();
    let right = OverdriveMap::load(appdata.path(), "right.txt")
        .unwrap()
        .convert(0.0)
        .unwrap();

    let el = left.tiles()[0].end_pose();
    let er = right.tiles()[0].end_pose();
    // Mirrored across the direction of travel (the x axis here).
    assert!((el.position.x - er.position.x).abs() < 1e-9);
    assert!((el.position.y + er.position.y).abs() < 1e-9);
    assert!((el.heading + er.heading).abs() < 1e-9);
}
