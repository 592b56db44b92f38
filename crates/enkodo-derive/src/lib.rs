//! Proc-macro entrypoints for enkodo.
//!
//! [`Enkodo`] generates `Marshal` and `Unmarshal` impls inline. [`Schema`] generates nothing; it
//! only makes `#[enkodo]` a known attribute and checks it, for records whose impls are produced
//! ahead of time by the `enkodo` command line tool and pulled in with `include!`.

use syn::{
    parse_macro_input,
    DeriveInput,
};

mod derive;

use derive::{
    derive_enkodo,
    validate_schema,
};

/// The entrypoint for the proc macro derive [`Enkodo`].
#[proc_macro_derive(Enkodo, attributes(enkodo))]
pub fn enkodo(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let unit = match derive_enkodo(&input) {
        Ok(render) => render,
        Err(e) => return e.into_compile_error().into(),
    };

    debug_tokens_if_env_var_set(&input.ident, &unit);

    unit.into()
}

/// The entrypoint for the proc macro derive [`Schema`].
#[proc_macro_derive(Schema, attributes(enkodo))]
pub fn schema(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match validate_schema(&input) {
        Ok(()) => proc_macro::TokenStream::new(),
        Err(e) => e.into_compile_error().into(),
    }
}

/// Prints the generated impls for each derived record to stderr.
/// A simple example of how to use this (note this silences the cargo expand output):
/// ENKODO_DEBUG=1 cargo expand 1>/dev/null
fn debug_tokens_if_env_var_set(ident: &syn::Ident, tokens: &proc_macro2::TokenStream) {
    if std::env::var("ENKODO_DEBUG").is_ok() {
        eprintln!("// enkodo: {ident}\n{tokens}\n");
    }
}
