//! Integration tests for the library API.
//!
//! These walk through the way pipeline steps use the manifest: locate it from
//! a working subdirectory, read inputs, register outputs, and collect values
//! across observations.

use std::fs;
use std::path::Path;

use acis_manifest::collect::{collect, write_csv};
use acis_manifest::error::Error;
use acis_manifest::locate::{find_manifest, get_default_manifest, get_results};
use acis_manifest::manifest::Manifest;
use acis_manifest::path::ResolvedPath;
use acis_manifest::register::{register_products, REPRO_PRODUCTS};
use acis_manifest::value::Value;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_pipeline_step_reads_and_writes_through_located_manifest() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "a1795_oi493/manifest.yaml",
        "name: a1795\nevt2: repro/acisf00493_repro_evt2.fits\n",
    );
    fs::create_dir_all(root.join("a1795_oi493/spc/profile")).unwrap();

    let mut manifest = get_default_manifest(root.join("a1795_oi493/spc/profile")).unwrap();
    assert_eq!(manifest.dir(), root.join("a1795_oi493"));

    let evt2 = manifest.resolve("evt2", None).unwrap();
    assert_eq!(
        evt2,
        ResolvedPath::Single(root.join("a1795_oi493/repro/acisf00493_repro_evt2.fits"))
    );

    let spc = root.join("a1795_oi493/spc/profile");
    manifest
        .setpath_from("sbprofile", &spc, &["sbprofile.fits"])
        .unwrap();
    manifest.set("redshift", "0.154").unwrap();

    let reloaded = Manifest::load(manifest.filepath()).unwrap();
    assert_eq!(
        reloaded.get("sbprofile").unwrap(),
        Value::Str("spc/profile/sbprofile.fits".to_string())
    );
    assert_eq!(reloaded.get("redshift").unwrap(), Value::Float(0.154));
    assert_eq!(
        reloaded.keys().collect::<Vec<_>>(),
        vec!["name", "evt2", "sbprofile", "redshift"]
    );
}

#[test]
fn test_locator_prefers_nearest_manifest() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "sample/manifest.yaml", "level: sample\n");
    write(root, "sample/a2029_oi891/manifest.yaml", "level: obs\n");
    fs::create_dir_all(root.join("sample/a2029_oi891/img")).unwrap();
    fs::create_dir_all(root.join("sample/notes")).unwrap();

    let near = get_default_manifest(root.join("sample/a2029_oi891/img")).unwrap();
    assert_eq!(near.get("level").unwrap(), Value::Str("obs".to_string()));

    let far = get_default_manifest(root.join("sample/notes")).unwrap();
    assert_eq!(far.get("level").unwrap(), Value::Str("sample".to_string()));
}

#[test]
fn test_locator_not_found() {
    let temp = TempDir::new().unwrap();

    let result = find_manifest("acis-integration-missing.yaml", temp.path());
    match result {
        Err(Error::NotFound { filename, .. }) => {
            assert_eq!(filename, "acis-integration-missing.yaml")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_results_file_lives_next_to_manifest() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "obs/manifest.yaml", "name: a1795\n");
    write(root, "obs/results.yaml", "kT: 6.12\nkT_err: [0.21, 0.25]\n");
    fs::create_dir_all(root.join("obs/spc")).unwrap();

    let results = get_results(root.join("obs/spc")).unwrap();
    assert_eq!(results.get("kT").unwrap(), Value::Float(6.12));
    assert_eq!(
        results.get("kT_err").unwrap(),
        Value::List(vec![Value::Float(0.21), Value::Float(0.25)])
    );
}

#[test]
fn test_register_then_pair_products() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "manifest.yaml", "");
    write(root, "repro/acisf00493_repro_evt2.fits", "");
    write(root, "repro/pcadf00493_001N001_asol1.fits", "");
    write(root, "repro/pcadf00493_002N001_asol1.fits", "");

    let mut manifest = Manifest::load(root.join("manifest.yaml")).unwrap();
    let keys = register_products(&mut manifest, &root.join("repro"), REPRO_PRODUCTS).unwrap();
    assert_eq!(keys, vec!["evt2", "asol"]);

    manifest
        .setpath_from(
            "asol_copy",
            root,
            &["repro/pcadf00493_001N001_asol1.fits", "repro/pcadf00493_002N001_asol1.fits"],
        )
        .unwrap();
    let pairs = manifest.getpath_pairs("asol", "asol_copy").unwrap();
    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|(a, b)| a == b));

    let err = manifest.getpath_pairs("asol", "evt2").unwrap_err();
    assert!(matches!(err, Error::Path { .. }));
}

#[test]
fn test_collect_sample_to_csv() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a/manifest.yaml", "name: a1795\nobsid: 493\nchips: [0, 1]\n");
    write(root, "b/manifest.yaml", "name: a2029\nobsid: 891\n");

    let keys = vec!["name".to_string(), "chips".to_string()];
    let rows = collect(
        &[root.join("a/manifest.yaml"), root.join("b/manifest.yaml")],
        &keys,
        false,
    )
    .unwrap();

    let mut out = Vec::new();
    write_csv(&mut out, &rows, true).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "name,chips\na1795,0 1\na2029,\n"
    );
}

#[test]
fn test_unsupported_node_survives_unrelated_update() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "manifest.yaml",
        "fit:\n  model: apec\n  kT: 6.1\nname: a1795\n",
    );

    let path = temp.path().join("manifest.yaml");
    let mut manifest = Manifest::load(&path).unwrap();
    assert!(matches!(manifest.get("fit"), Err(Error::Parse { .. })));
    manifest.update("name", "A1795").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "fit:\n  model: apec\n  kT: 6.1\nname: A1795\n");
}
