// File: crates/walkchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a seeded walk, settled after one update, to PNG bytes; a fixed three-point
//   series to SVG.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else compares decoded pixels / exact SVG text. A missing PNG snapshot is skipped with
//   a note (pixels depend on the Skia build); the SVG snapshot is committed and required.

use std::time::{Duration, Instant};

use walkchart_core::raster::render_to_png_bytes;
use walkchart_core::walk::{seeded_rng, RandomWalk};
use walkchart_core::{svg, ChartConfig, ChartState, Frame, RasterOptions, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn settled_frame() -> Frame {
    let mut ch = ChartState::initialize(ChartConfig::default()).unwrap();
    let now = Instant::now();
    ch.update(&RandomWalk::new(128, 50).generate_with(&mut seeded_rng(2024)), now);
    ch.frame(now + Duration::from_secs(1))
}

// Round tick steps on both axes so the SVG text is exact.
fn fixed_frame() -> Frame {
    let mut ch = ChartState::initialize(ChartConfig::default()).unwrap();
    let now = Instant::now();
    ch.snap(&Series::from(vec![(0.0, 0.0), (50.0, 20.0), (100.0, 10.0)]), now);
    ch.frame(now)
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_walk_png() {
    let mut opts = RasterOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let bytes = render_to_png_bytes(&settled_frame(), &opts).expect("render bytes");
    let path = snapshot_path("walk.png");

    if bless_mode() {
        std::fs::create_dir_all(path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_walk_svg() {
    let text = svg::render(&fixed_frame());
    let path = snapshot_path("walk.svg");

    if bless_mode() {
        std::fs::create_dir_all(path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", path.display());
        return;
    }
    let want = std::fs::read_to_string(&path).expect("read committed SVG snapshot");
    assert_eq!(text.trim_end(), want.trim_end(), "SVG differs from golden snapshot: {}", path.display());
}
