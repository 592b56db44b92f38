//! Derive helper for the `Marshal` / `Unmarshal` pair.

use enkodo_codegen::{
    parse::record_descriptor::RecordDescriptor,
    render::{
        registry::ConverterRegistry,
        unit::GeneratedUnit,
        warning::skipped_field_warnings,
    },
};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::DeriveInput;

pub fn derive_enkodo(input: &DeriveInput) -> syn::Result<TokenStream> {
    let record = RecordDescriptor::from_derive_input(input)?;
    let unit = GeneratedUnit::new(std::slice::from_ref(&record), ConverterRegistry::shared());

    let mut tokens = unit.to_token_stream();
    // Warnings are emitted even when no field is left and the unit renders nothing.
    tokens.extend(unit.records.iter().map(skipped_field_warnings));

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn skipped_fields_warn_even_without_impls() {
        let expansion = derive_enkodo(&parse_quote! {
            pub struct AllSkipped {
                #[enkodo]
                secret: u8,
            }
        })
        .unwrap()
        .to_string();

        assert!(!expansion.contains("impl Marshal"));
        assert!(expansion.contains("deprecated"));
        assert!(expansion.contains("`AllSkipped.secret` is not encoded by enkodo"));
    }

    #[test]
    fn emitted_records_carry_their_warnings_alongside() {
        let expansion = derive_enkodo(&parse_quote! {
            pub struct Partial {
                #[enkodo]
                pub kept: u32,
                #[enkodo]
                pub owner: Owner,
            }
        })
        .unwrap()
        .to_string();

        assert!(expansion.contains("impl Marshal for Partial"));
        assert!(expansion.contains("`Partial.owner` is not encoded by enkodo: no converter for `Owner`"));
    }
}
