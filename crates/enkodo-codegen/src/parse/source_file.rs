//! Extraction of every record declared at the top level of one parsed source file.

use itertools::Itertools;
use syn::{
    punctuated::Punctuated,
    Item,
    ItemStruct,
    Path,
    Token,
};

use crate::{
    parse::record_descriptor::RecordDescriptor,
    ENKODO_DERIVE,
};

/// Collects the top-level structs that have at least one `#[enkodo]` field, in source order.
/// Structs that already `#[derive(Enkodo)]` get their impls from the derive and are left out.
pub fn extract_records(file: &syn::File) -> syn::Result<Vec<RecordDescriptor>> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item) if !derives_enkodo(item) => Some(item),
            _ => None,
        })
        .map(RecordDescriptor::from_item_struct)
        .flatten_ok()
        .filter_ok(RecordDescriptor::is_annotated)
        .collect()
}

fn derives_enkodo(item: &ItemStruct) -> bool {
    item.attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .any(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .is_ok_and(|paths| {
                    paths.iter().any(|path| {
                        path.segments
                            .last()
                            .is_some_and(|segment| segment.ident == ENKODO_DERIVE)
                    })
                })
        })
}
