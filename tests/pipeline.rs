use std::path::{Path, PathBuf};
use std::fs;
use trackforge::cli::{Args, RenderConfig};
use trackforge::run;

fn base_args() -> Args {
    Args {
        track: None,
        import_drive: None,
        import_overdrive: None,
        appdata: PathBuf::from("."),
        prefix: None,
        size: "full".to_string(),
        rotate: 0.0,
        zero: false,
    }
}

fn prefix_in(dir: &Path, name: &str) -> Option<String> {
    Some(dir.join(name).to_str().unwrap().to_string())
}

#[test]
fn test_ring_full_size_produces_combined_outputs_only() {
    let out = tempfile::tempdir().unwrap();
    let args = Args {
        track: Some("ring".to_string()),
        prefix: prefix_in(out.path(), "ring"),
        ..base_args()
    };
    run(&RenderConfig::from_args(args).unwrap()).unwrap();

    for suffix in [
        "_track_clean.svg",
        "_track_annotated.svg",
        "_track.json",
        "_location-table.csv",
        "_location-table.json",
    ] {
        let path = out.path().join(format!("ring{suffix}"));
        assert!(path.is_file(), "missing output {path:?}");
    }
    // Full size means a single page: no per-page tiles.
    assert!(!out.path().join("ring_track_0x0.svg").exists());

    let json = fs::read_to_string(out.path().join("ring_track.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["closed"], serde_json::Value::Bool(true));
    assert_eq!(value["tiles"].as_array().unwrap().len(), 10);
}

#[test]
fn test_starter_a4_produces_page_grid() {
    let out = tempfile::tempdir().unwrap();
    let args = Args {
        track: Some("starter".to_string()),
        size: "a4-landscape".to_string(),
        prefix: prefix_in(out.path(), "starter"),
        ..base_args()
    };
    run(&RenderConfig::from_args(args).unwrap()).unwrap();

    // The starter oval (980x420 plus outer margins) needs several
    // a4-landscape pages on each axis.
    assert!(out.path().join("starter_track_0x0.svg").exists());
    assert!(out.path().join("starter_track_1x0.svg").exists());
    assert!(out.path().join("starter_track_0x1.svg").exists());

    let page = fs::read_to_string(out.path().join("starter_track_0x0.svg")).unwrap();
    assert!(page.contains("stroke:cyan"));
    assert!(page.contains(">0x0<"));
}

#[test]
fn test_drive_import_end_to_end() {
    let appdata = tempfile::tempdir().unwrap();
    let config_dir = appdata
        .path()
        .join(trackforge_anki::drive::DRIVE_MAP_SUBPATH);
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("oval_map.txt"),
        "6\n0 0.0\n2 0.0\n2 1.5707963267948966\n1 3.141592653589793\n2 3.141592653589793\n2 4.71238898038469\n",
    )
    .unwrap();

    let out = tempfile::tempdir().unwrap();
    let args = Args {
        import_drive: Some("oval_map.txt".to_string()),
        appdata: appdata.path().to_path_buf(),
        zero: true,
        rotate: 90.0,
        prefix: prefix_in(out.path(), "oval"),
        ..base_args()
    };
    run(&RenderConfig::from_args(args).unwrap()).unwrap();

    let csv = fs::read_to_string(out.path().join("oval_location-table.csv")).unwrap();
    // 6 tiles plus the finish record plus the header row.
    assert_eq!(csv.lines().count(), 8);

    let json = fs::read_to_string(out.path().join("oval_track.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    // Theta was zeroed, so the first heading is exactly the 90 degree
    // global rotation.
    let heading = value["tiles"][0]["start"]["heading"].as_f64().unwrap();
    assert!((heading - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_missing_appdata_is_config_error() {
    let args = Args {
        import_drive: Some("oval_map.txt".to_string()),
        appdata: PathBuf::from("/definitely/not/a/real/dir"),
        ..base_args()
    };
    let err = RenderConfig::from_args(args).unwrap_err();
    assert!(err.is_config_error());
}
