//! Whole-record generation: both impls, the converters they use, and the fields left out.

use std::collections::BTreeSet;

use itertools::Itertools;
use proc_macro2::{
    Ident,
    TokenStream,
};
use quote::quote;

use crate::{
    parse::{
        field_descriptor::SkippedField,
        record_descriptor::RecordDescriptor,
    },
    render::{
        converter::Converter,
        decode,
        encode,
        registry::ConverterRegistry,
        resolve::ResolvedField,
        scope::DecodeScope,
    },
};

#[derive(Debug, Clone)]
pub struct GeneratedRecord {
    pub ident: Ident,
    pub marshal_impl: TokenStream,
    pub unmarshal_impl: TokenStream,
    /// Every converter the two impls invoke, including length prefixes inside lists.
    pub converters: BTreeSet<Converter>,
    /// Fields left out, on both sides.
    pub skipped: Vec<SkippedField>,
    /// Fields written and read, in wire order.
    pub emitted_fields: Vec<Ident>,
}

impl GeneratedRecord {
    pub fn new(record: &RecordDescriptor, registry: &ConverterRegistry) -> Self {
        let RecordDescriptor {
            ident,
            generics,
            fields,
            skipped,
        } = record;

        let mut skipped = skipped.clone();
        let mut resolved = Vec::with_capacity(fields.len());
        for field in fields {
            match ResolvedField::resolve(field, registry) {
                Ok(field) => resolved.push(field),
                Err(field) => skipped.push(field),
            }
        }
        for field in skipped.iter() {
            tracing::debug!(record = %ident, field = %field.ident, "skipping field: {}", field.reason);
        }

        let mut converters = BTreeSet::new();
        let encode_stmts = resolved
            .iter()
            .map(|field| encode::render_field(field, &mut converters))
            .collect_vec();

        let mut scope = DecodeScope::new();
        let decode_stmts = resolved
            .iter()
            .map(|field| decode::render_field(field, &mut scope, &mut converters))
            .collect_vec();
        let decls = scope.declarations();

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let marshal_impl = quote! {
            impl #impl_generics Marshal for #ident #ty_generics #where_clause {
                fn marshal_enkodo(&self, enc: &mut Encoder) {
                    #(#encode_stmts)*
                }
            }
        };

        let unmarshal_impl = quote! {
            impl #impl_generics Unmarshal for #ident #ty_generics #where_clause {
                #[allow(unused_mut, non_snake_case)]
                fn unmarshal_enkodo(
                    &mut self,
                    dec: &mut Decoder<'_>,
                ) -> ::core::result::Result<(), DecodeError> {
                    #decls
                    #(#decode_stmts)*
                    ::core::result::Result::Ok(())
                }
            }
        };

        let emitted_fields = resolved
            .iter()
            .map(|field| field.field.ident.clone())
            .collect_vec();
        tracing::debug!(
            record = %ident,
            fields = emitted_fields.len(),
            skipped = skipped.len(),
            "generated record"
        );

        Self {
            ident: ident.clone(),
            marshal_impl,
            unmarshal_impl,
            converters,
            skipped,
            emitted_fields,
        }
    }

    /// A record with no emitted fields produces no impls.
    pub fn is_empty(&self) -> bool {
        self.emitted_fields.is_empty()
    }
}
