//! Compile-time warnings for annotated fields the derive leaves out.
//!
//! Proc macros have no stable way to emit a warning, so each skipped field gets a deprecated
//! constant that is used right away. The use carries the field's span, so rustc reports the
//! `deprecated` lint at the field declaration with the skip reason as its note.

use proc_macro2::{
    Ident,
    TokenStream,
};
use quote::{
    quote,
    quote_spanned,
};

use crate::{
    parse::field_descriptor::SkippedField,
    render::record::GeneratedRecord,
};

/// One warning per skipped field of `record`. Renders nothing when every annotated field is emitted.
pub fn skipped_field_warnings(record: &GeneratedRecord) -> TokenStream {
    let warnings = record
        .skipped
        .iter()
        .map(|field| skipped_field_warning(&record.ident, field));

    quote! { #(#warnings)* }
}

fn skipped_field_warning(record: &Ident, field: &SkippedField) -> TokenStream {
    let span = field.ident.span();
    let note = format!("`{record}.{}` is not encoded by enkodo: {}", field.ident, field.reason);
    let name = Ident::new("enkodo_skipped_field", span);

    quote_spanned! {span=>
        const _: () = {
            #[deprecated(note = #note)]
            #[allow(non_upper_case_globals)]
            const #name: () = ();
            let _ = #name;
        };
    }
}
