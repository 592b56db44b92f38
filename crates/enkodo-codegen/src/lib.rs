//! Internal implementation crate for enkodo, providing the parsing and rendering used by both the
//! `#[derive(Enkodo)]` proc macro and the `enkodo` command line generator.
//!
//! [`parse`] turns host declarations into [`parse::record_descriptor::RecordDescriptor`]s and
//! [`render`] turns those into `Marshal` / `Unmarshal` impls, consulting a
//! [`render::registry::ConverterRegistry`] for every primitive.

pub mod parse;
pub mod render;

mod error;

use std::path::Path;

pub use error::Error;
use parse::{
    parsing_error::ParsingError,
    source_file::extract_records,
};
use render::{
    registry::ConverterRegistry,
    unit::GeneratedUnit,
};

/// The inert field attribute marking a field for generation.
const ENKODO_ATTRIBUTE: &str = "enkodo";
/// The `#[enkodo(wire = "...")]` key naming an override representation.
const WIRE_KEY: &str = "wire";
/// The derive whose records the file-level generator leaves alone.
const ENKODO_DERIVE: &str = "Enkodo";

/// Parses one Rust source file and generates the impls for every record declared at its top level.
///
/// `path` is only used for error reporting. The returned unit may be empty.
pub fn generate_file(
    path: &Path,
    source: &str,
    registry: &ConverterRegistry,
) -> Result<GeneratedUnit, Error> {
    let file = syn::parse_file(source).map_err(|e| Error::extraction(path, e))?;
    let records = extract_records(&file).map_err(|e| Error::extraction(path, e))?;

    Ok(GeneratedUnit::new(&records, registry))
}

/// Reads `path` and runs [`generate_file`] over its contents.
pub fn generate_path(path: &Path, registry: &ConverterRegistry) -> Result<GeneratedUnit, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    generate_file(path, &source, registry)
}
