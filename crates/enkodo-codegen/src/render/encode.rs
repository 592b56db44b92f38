//! Encode statements for one resolved field.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::render::{
    converter::Converter,
    resolve::{
        ResolvedField,
        ResolvedType,
    },
};

/// Renders the statements writing `self.<field>`, recording every converter invoked.
pub fn render_field(field: &ResolvedField, converters: &mut BTreeSet<Converter>) -> TokenStream {
    let ident = &field.field.ident;
    let place = quote! { self.#ident };

    match (&field.resolved, field.overridden) {
        (ResolvedType::Codec(converter), true) => {
            let wire = converter.host_type();
            let value = quote! {
                <#wire as ::core::convert::From<_>>::from(::core::clone::Clone::clone(&#place))
            };
            render_codec(*converter, value, converters)
        }
        (resolved, _) => render_value(resolved, place, converters),
    }
}

/// `place` is a place expression: `self.field` at the top, `*v` inside a list.
fn render_value(
    resolved: &ResolvedType,
    place: TokenStream,
    converters: &mut BTreeSet<Converter>,
) -> TokenStream {
    match resolved {
        ResolvedType::Codec(converter) => render_codec(*converter, place, converters),
        ResolvedType::Delegate(_) => quote! { enc.encode(&*#place); },
        ResolvedType::Sequence(inner) => {
            converters.insert(Converter::Uint);
            let elem = render_value(inner, quote! { *v }, converters);
            quote! {
                enc.uint(::std::vec::Vec::len(&#place));
                for v in &#place {
                    #elem
                }
            }
        }
    }
}

fn render_codec(
    converter: Converter,
    value: TokenStream,
    converters: &mut BTreeSet<Converter>,
) -> TokenStream {
    converters.insert(converter);
    let op = converter.codec_op();
    let arg = converter.encode_arg(value);

    quote! { enc.#op(#arg); }
}
