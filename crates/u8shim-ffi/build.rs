//! Writes `include/u8shim.h` for C callers of the shim.

use std::error::Error;
use std::path::{Path, PathBuf};

const HEADER: &str = "u8shim.h";

fn main() {
    let crate_dir = PathBuf::from(
        std::env::var_os("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR"),
    );

    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src");
    // The record and geometry layouts are exported from the core crate.
    println!("cargo:rerun-if-changed=../u8shim-core/src/record.rs");
    println!("cargo:rerun-if-changed=../u8shim-core/src/geometry.rs");

    if let Err(e) = write_header(&crate_dir) {
        panic!("generating {HEADER}: {e}");
    }
}

fn write_header(crate_dir: &Path) -> Result<(), Box<dyn Error>> {
    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))?;
    let include_dir = crate_dir.join("include");
    std::fs::create_dir_all(&include_dir)?;

    let bindings = cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()?;
    bindings.write_to_file(include_dir.join(HEADER));
    Ok(())
}
