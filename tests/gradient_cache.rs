use heatfield::{GradientTable, HeatfieldError, HeatmapConfig, hex_to_rgb};

fn default_keyframes() -> [heatfield::Rgb; 5] {
    HeatmapConfig::default().keyframes().unwrap()
}

fn grey_keyframes() -> [heatfield::Rgb; 5] {
    ["000000", "404040", "808080", "C0C0C0", "FFFFFF"].map(|hex| hex_to_rgb(hex).unwrap())
}

#[test]
fn store_then_load_round_trips_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    let built = GradientTable::build(&default_keyframes());
    built.store(&path).unwrap();
    let loaded = GradientTable::load(&path).unwrap();

    assert_eq!(loaded, built);
}

#[test]
fn build_or_load_populates_a_missing_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    assert!(!path.exists());

    let table = GradientTable::build_or_load(&default_keyframes(), &path).unwrap();

    assert!(path.exists());
    assert_eq!(GradientTable::load(&path).unwrap(), table);
}

#[test]
fn existing_cache_wins_even_for_a_different_palette() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    let first = GradientTable::build_or_load(&default_keyframes(), &path).unwrap();
    // Same path, different keyframes: the stale cache is trusted as-is.
    let second = GradientTable::build_or_load(&grey_keyframes(), &path).unwrap();

    assert_eq!(second, first);
    assert_ne!(second, GradientTable::build(&grey_keyframes()));
}

#[test]
fn corrupt_cache_is_discarded_and_rebuilt() {
    // Make the discard warning visible when running with --nocapture.
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    std::fs::write(&path, b"this is not a png").unwrap();

    let table = GradientTable::build_or_load(&default_keyframes(), &path).unwrap();

    assert_eq!(table, GradientTable::build(&default_keyframes()));
    // The rebuilt table replaced the garbage on disk.
    assert_eq!(GradientTable::load(&path).unwrap(), table);
}

#[test]
fn load_rejects_a_misshapen_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    image::RgbaImage::new(10, 10).save(&path).unwrap();

    assert!(matches!(
        GradientTable::load(&path),
        Err(HeatfieldError::CacheReadFailed(_))
    ));
}

#[test]
fn load_of_a_missing_file_is_a_cache_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        GradientTable::load(&dir.path().join("nope.png")),
        Err(HeatfieldError::CacheReadFailed(_))
    ));
}
