// File: crates/walkchart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's raster backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
