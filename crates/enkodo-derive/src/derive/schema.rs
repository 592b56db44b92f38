//! Derive helper that checks `#[enkodo]` annotations without generating anything.

use enkodo_codegen::parse::record_descriptor::RecordDescriptor;
use syn::DeriveInput;

pub fn validate_schema(input: &DeriveInput) -> syn::Result<()> {
    RecordDescriptor::from_derive_input(input).map(drop)
}
