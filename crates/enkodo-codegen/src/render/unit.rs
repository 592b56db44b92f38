//! One generation unit: every record of a source file, or the single record of a derive.

use std::collections::BTreeSet;

use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::{
    quote,
    ToTokens,
};
use syn::ItemUse;

use crate::{
    parse::record_descriptor::RecordDescriptor,
    render::{
        record::GeneratedRecord,
        registry::ConverterRegistry,
    },
};

#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Every record of the unit, including ones that emitted nothing.
    pub records: Vec<GeneratedRecord>,
    /// The union of the imports required by the converters the emitted records use.
    pub imports: BTreeSet<String>,
}

impl GeneratedUnit {
    pub fn new(records: &[RecordDescriptor], registry: &ConverterRegistry) -> Self {
        let records = records
            .iter()
            .map(|record| GeneratedRecord::new(record, registry))
            .collect_vec();

        let imports = records
            .iter()
            .filter(|record| !record.is_empty())
            .flat_map(|record| record.converters.iter())
            .flat_map(|converter| converter.required_imports())
            .map(|path| path.to_string())
            .collect();

        Self { records, imports }
    }

    /// The records that produce impls, in declaration order.
    pub fn emitted(&self) -> impl Iterator<Item = &GeneratedRecord> {
        self.records.iter().filter(|record| !record.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.emitted().next().is_none()
    }

    /// The unit as Rust source, for writing to an artifact that is later `include!`d.
    pub fn to_source_string(&self) -> String {
        self.to_token_stream().to_string()
    }
}

impl ToTokens for GeneratedUnit {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if self.is_empty() {
            return;
        }

        let imports = self.imports.iter().map(|path| {
            syn::parse_str::<ItemUse>(&format!("use {path};"))
                .expect("Converter imports should be valid paths")
        });
        let impls = self.emitted().map(|record| {
            let GeneratedRecord {
                marshal_impl,
                unmarshal_impl,
                ..
            } = record;
            quote! {
                #marshal_impl
                #unmarshal_impl
            }
        });

        tokens.extend(quote! {
            const _: () = {
                use ::enkodo::prelude::*;
                #(#imports)*

                #(#impls)*
            };
        });
    }
}
