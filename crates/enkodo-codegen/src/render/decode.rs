//! Decode statements for one resolved field, mirroring [`crate::render::encode`] step for step.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::render::{
    converter::Converter,
    resolve::{
        ResolvedField,
        ResolvedType,
    },
    scope::DecodeScope,
};

/// Renders the statements populating `self.<field>`. Each decode op is followed by `?`, so the
/// first failure returns before anything else is assigned.
pub fn render_field(
    field: &ResolvedField,
    scope: &mut DecodeScope,
    converters: &mut BTreeSet<Converter>,
) -> TokenStream {
    let ident = &field.field.ident;
    let target = quote! { self.#ident };

    match (&field.resolved, field.overridden) {
        (ResolvedType::Codec(converter), true) => {
            let value = render_codec(*converter, converters);
            quote! { #target = ::core::convert::From::from(#value); }
        }
        (resolved, _) => render_value(resolved, target, scope, converters),
    }
}

/// `target` is an assignable place: `self.field` at the top, a hoisted temporary inside a list.
fn render_value(
    resolved: &ResolvedType,
    target: TokenStream,
    scope: &mut DecodeScope,
    converters: &mut BTreeSet<Converter>,
) -> TokenStream {
    match resolved {
        ResolvedType::Codec(converter) => {
            let value = render_codec(*converter, converters);
            quote! { #target = #value; }
        }
        ResolvedType::Delegate(_) => quote! {
            #target = ::std::boxed::Box::new(::core::default::Default::default());
            dec.decode(&mut *#target)?;
        },
        ResolvedType::Sequence(inner) => {
            converters.insert(Converter::Uint);
            let len = scope.length();
            let temp = scope.temp(inner);
            let elem = render_value(inner, quote! { #temp }, scope, converters);
            quote! {
                #len = dec.length()?;
                #target = ::std::vec::Vec::with_capacity(#len);
                for _ in 0..#len {
                    #elem
                    #target.push(#temp);
                }
            }
        }
    }
}

fn render_codec(converter: Converter, converters: &mut BTreeSet<Converter>) -> TokenStream {
    converters.insert(converter);
    let op = converter.codec_op();
    let raw = quote! { dec.#op()? };

    converter.decode_value(raw.clone()).unwrap_or(raw)
}
