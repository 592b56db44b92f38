//! Decode-side temporaries for one record.

use std::collections::HashSet;

use proc_macro2::{
    Ident,
    TokenStream,
};
use quote::{
    format_ident,
    quote,
};

use crate::render::resolve::ResolvedType;

/// Tracks the temporaries a record's decode body needs. Every list in the record shares one
/// length variable, and each distinct element shape gets one temporary, all declared once at the
/// top of the body no matter how many sibling or nested lists use them.
#[derive(Debug, Default)]
pub struct DecodeScope {
    uses_length: bool,
    declared: HashSet<Ident>,
    temps: Vec<(Ident, TokenStream)>,
}

impl DecodeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared list length variable.
    pub fn length(&mut self) -> Ident {
        self.uses_length = true;
        format_ident!("__len")
    }

    /// The temporary holding one decoded element of shape `elem`, declaring it on first use.
    pub fn temp(&mut self, elem: &ResolvedType) -> Ident {
        let ident = format_ident!("__t_{}", elem.mangled());
        if self.declared.insert(ident.clone()) {
            self.temps.push((ident.clone(), elem.host_type()));
        }

        ident
    }

    /// The hoisted `let` statements for everything requested so far, in first-use order.
    pub fn declarations(&self) -> TokenStream {
        let length = self.uses_length.then(|| quote! { let mut __len: usize; });
        let temps = self
            .temps
            .iter()
            .map(|(ident, ty)| quote! { let mut #ident: #ty; });

        quote! {
            #length
            #(#temps)*
        }
    }
}
