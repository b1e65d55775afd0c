// File: crates/rasterplot-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups used for system font enumeration
        println!("cargo:rustc-link-lib=advapi32");
    }
}
