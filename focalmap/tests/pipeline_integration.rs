//! Integration tests for the full focal point pipeline.
//!
//! These tests run the same flow as the CLI:
//! - JSON inputs → focal point build
//! - store save → fresh store load
//! - per-asset distance rows → CSV report
//!
//! Run with: `cargo test --test pipeline_integration`

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use focalmap::asset::Asset;
use focalmap::distance::{distance_columns, DistanceContext, DistanceMetric};
use focalmap::focal::{build_focal_points, DistrictCategory};
use focalmap::report::write_rows_csv;
use focalmap::source::{load_district_definitions, load_plaza_names, load_tiles};
use focalmap::store::FocalPointStore;

// ============================================================================
// Fixtures
// ============================================================================

const TILES_JSON: &str = r#"{
  "data": {
    "0,0": {"x": 0, "y": 0, "type": "plaza", "estateId": "1092"},
    "0,1": {"x": 0, "y": 1, "type": "plaza", "estateId": "1092"},
    "10,10": {"x": 10, "y": 10, "type": "plaza", "estateId": "1100"},
    "5,0": {"x": 5, "y": 0, "type": "road", "estateId": "r1"},
    "6,0": {"x": 6, "y": 0, "type": "road"},
    "20,20": {"x": 20, "y": 20, "type": "district", "estateId": "d-1"},
    "3,3": {"x": 3, "y": 3, "type": "owned"}
  }
}"#;

const DISTRICTS_JSON: &str = r#"[
  {"id": "d-1", "name": "Vegas City", "category": "Gaming",
   "description": "Casinos", "parcels": ["20,20", "21,20"]},
  {"id": "d-2", "name": "Genesis Plaza", "category": "Genesis Plaza",
   "parcels": ["0,0"]},
  {"id": "d-3", "name": "University", "category": "Culture and Education",
   "parcels": ["-5,-5"]}
]"#;

const PLAZAS_JSON: &str = r#"{
  "1092": {"id": "CENTRAL_PLAZA", "name": "Central Genesis Plaza"},
  "1100": {"id": "NORTH_PLAZA", "name": "North Genesis Plaza"},
  "9999": {"id": "GHOST_PLAZA", "name": "Plaza Without Tiles"}
}"#;

struct Inputs {
    _dir: TempDir,
    tiles: PathBuf,
    districts: PathBuf,
    plazas: PathBuf,
    store: PathBuf,
}

fn write_inputs() -> Inputs {
    let dir = TempDir::new().unwrap();
    let write = |name: &str, content: &str| -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    };

    let tiles = write("latest.json", TILES_JSON);
    let districts = write("districts.json", DISTRICTS_JSON);
    let plazas = write("plaza.json", PLAZAS_JSON);
    let store = dir.path().join("out").join("dcl_focal_points.json");

    Inputs {
        tiles,
        districts,
        plazas,
        store,
        _dir: dir,
    }
}

fn build_and_save(inputs: &Inputs) {
    let tiles = load_tiles(&inputs.tiles).unwrap();
    let districts = load_district_definitions(&inputs.districts).unwrap();
    let plazas = load_plaza_names(&inputs.plazas).unwrap();

    let (collection, summary) = build_focal_points(&tiles, &districts, &plazas).unwrap();
    assert_eq!(summary.plazas, 2);
    assert_eq!(summary.roads, 1);
    assert_eq!(summary.districts, 2);
    assert_eq!(summary.reserved_districts, 1);
    assert_eq!(summary.unassigned_tiles, 1);

    let mut store = FocalPointStore::new(&inputs.store);
    store.save(collection).unwrap();
}

fn context_from_store(path: &Path) -> DistanceContext {
    let store = FocalPointStore::new(path);
    DistanceContext::new(store.into_collection().unwrap())
}

// ============================================================================
// Integration Tests
// ============================================================================

/// Built groups survive the store and keep their identity and categories.
#[test]
fn test_build_persists_groups() {
    let inputs = write_inputs();
    build_and_save(&inputs);

    let store = FocalPointStore::new(&inputs.store);
    let collection = store.load().unwrap();

    let central = &collection.plazas()["CENTRAL_PLAZA"];
    assert_eq!(central.name, "Central Genesis Plaza");
    assert_eq!(central.region_id.as_deref(), Some("1092"));
    assert_eq!(central.parcel_count, 2);

    assert!(collection.roads().contains_key("r1"));

    let vegas = &collection.districts()["d-1"];
    assert_eq!(vegas.id, "VEGA_CITY");
    assert_eq!(vegas.category, Some(DistrictCategory::Gaming));
    assert_eq!(vegas.parcel_count, 2);
    assert!(!collection.districts().contains_key("d-2"));
}

/// Distances for one asset under the default metric, end to end.
#[test]
fn test_manhattan_row_from_stored_groups() {
    let inputs = write_inputs();
    build_and_save(&inputs);

    let mut ctx = context_from_store(&inputs.store);
    let row = ctx.row_for_asset(&Asset::land("a-1", 1, 1), DistanceMetric::Manhattan);

    let entries: Vec<(&str, f64)> = row
        .entries()
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();

    assert_eq!(
        entries,
        vec![
            ("DIST_CENTRAL_PLAZA", 1.0),
            ("DIST_NORTH_PLAZA", 18.0),
            ("DIST_MIN_PR_PLAZA", 18.0),
            ("DIST_ROAD", 5.0),
            ("DIST_VEGA_CITY", 38.0),
            ("DIST_UNIV", 12.0),
            ("DIST_DST_CULT_EDU", 12.0),
            ("DIST_DST_GAMING", 38.0),
        ]
    );
    assert_eq!(ctx.computations(), 3);
}

/// Euclidean distances are rounded to seven decimals.
#[test]
fn test_euclidean_row_from_stored_groups() {
    let inputs = write_inputs();
    build_and_save(&inputs);

    let mut ctx = context_from_store(&inputs.store);
    let row = ctx.row_for_asset(&Asset::land("a-1", 1, 1), DistanceMetric::Euclidean);

    assert_eq!(row.get("DIST_CENTRAL_PLAZA"), Some(1.0));
    assert_eq!(row.get("DIST_ROAD"), Some(4.1231056));
    assert_eq!(row.get("DIST_DST_CULT_EDU"), Some(8.4852814));
}

/// The CSV report matches the column dictionary and row values.
#[test]
fn test_csv_report() {
    let inputs = write_inputs();
    build_and_save(&inputs);

    let mut ctx = context_from_store(&inputs.store);
    let columns = distance_columns(ctx.collection());
    let assets = [Asset::land("a-1", 1, 1), Asset::land("a-2", 0, 0)];
    let rows: Vec<_> = assets
        .iter()
        .map(|asset| ctx.row_for_asset(asset, DistanceMetric::Manhattan))
        .collect();

    let mut out = Vec::new();
    write_rows_csv(&mut out, &columns, &rows).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "ASSET_ID,DIST_CENTRAL_PLAZA,DIST_NORTH_PLAZA,DIST_MIN_PR_PLAZA,DIST_ROAD,\
             DIST_VEGA_CITY,DIST_UNIV,DIST_DST_CULT_EDU,DIST_DST_GAMING",
            "a-1,1,18,18,5,38,12,12,38",
            "a-2,0,20,20,5,40,10,10,40",
        ]
    );
}
