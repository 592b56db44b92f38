//! Runs the file-level generator over `src/offline.rs`, the same way the `enkodo` command line
//! tool does, so the generated source text is compiled and exercised by the tests.

use std::{
    env,
    path::PathBuf,
};

use enkodo_codegen::{
    generate_path,
    render::registry::ConverterRegistry,
};

const SOURCE: &str = "src/offline.rs";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let mut registry = ConverterRegistry::builtin();
    registry
        .alias("UserId", "u64")
        .expect("u64 should be a built-in converter");

    let unit = generate_path(SOURCE.as_ref(), &registry).unwrap_or_else(|e| panic!("{e}"));
    assert!(!unit.is_empty(), "{SOURCE} should contain annotated records");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let artifact = out_dir.join("offline_enkodo.rs");
    std::fs::write(&artifact, unit.to_source_string())
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", artifact.display()));
}
