//! Parsing of the `#[enkodo]` field attribute in its three accepted forms:
//!
//! - `#[enkodo]`
//! - `#[enkodo = "String"]`
//! - `#[enkodo(wire = "String")]`

use quote::ToTokens;
use syn::{
    punctuated::Punctuated,
    Attribute,
    Meta,
    Token,
};

use crate::{
    parse::{
        name_value::parse_name_value_literal,
        type_descriptor::TypeDescriptor,
    },
    ParsingError,
    ENKODO_ATTRIBUTE,
    WIRE_KEY,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnnotation {
    /// The classified override representation, if one was given.
    pub wire: Option<TypeDescriptor>,
}

/// Finds and parses the field's `#[enkodo]` attribute. `None` means the field is not annotated.
pub fn parse_field_annotation(attrs: &[Attribute]) -> syn::Result<Option<FieldAnnotation>> {
    let mut annotations = attrs
        .iter()
        .filter(|attr| attr.path().is_ident(ENKODO_ATTRIBUTE));

    let Some(attr) = annotations.next() else {
        return Ok(None);
    };
    if let Some(duplicate) = annotations.next() {
        return Err(ParsingError::DuplicateAnnotation.new_err(duplicate));
    }

    let wire = match &attr.meta {
        Meta::Path(_) => None,
        Meta::NameValue(_) => parse_wire(&attr.meta)?,
        Meta::List(list) => {
            let metas = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            let mut wire = None;
            let mut seen_wire = false;
            for meta in metas.iter() {
                if !meta.path().is_ident(WIRE_KEY) {
                    let key = meta.path().to_token_stream().to_string();
                    return Err(ParsingError::UnknownAnnotationKey(key).new_err(meta));
                }
                if seen_wire {
                    return Err(ParsingError::DuplicateWireKey.new_err(meta));
                }
                seen_wire = true;
                wire = parse_wire(meta)?;
            }
            wire
        }
    };

    Ok(Some(FieldAnnotation { wire }))
}

fn parse_wire(meta: &Meta) -> syn::Result<Option<TypeDescriptor>> {
    let value = parse_name_value_literal(meta)?;
    match TypeDescriptor::parse_override(&value) {
        None => Ok(None),
        Some(Ok(wire)) => Ok(Some(wire)),
        Some(Err(_)) => Err(ParsingError::InvalidWireType(value).new_err(meta)),
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(attrs: Vec<Attribute>) -> syn::Result<Option<FieldAnnotation>> {
        parse_field_annotation(&attrs)
    }

    fn string_wire() -> Option<FieldAnnotation> {
        Some(FieldAnnotation {
            wire: Some(TypeDescriptor::Primitive("String".into())),
        })
    }

    #[test]
    fn unannotated_fields_have_no_annotation() {
        let attrs = vec![parse_quote!(#[doc = "email"]), parse_quote!(#[serde(default)])];
        assert_eq!(parse(attrs).unwrap(), None);
    }

    #[test]
    fn bare_annotation_has_no_override() {
        let attrs = vec![parse_quote!(#[enkodo])];
        assert_eq!(parse(attrs).unwrap(), Some(FieldAnnotation::default()));
    }

    #[test]
    fn both_override_forms_are_accepted() {
        assert_eq!(parse(vec![parse_quote!(#[enkodo = "String"])]).unwrap(), string_wire());
        assert_eq!(
            parse(vec![parse_quote!(#[enkodo(wire = "String")])]).unwrap(),
            string_wire()
        );
    }

    #[test]
    fn empty_override_means_no_override() {
        assert_eq!(
            parse(vec![parse_quote!(#[enkodo = ""])]).unwrap(),
            Some(FieldAnnotation::default())
        );
        assert_eq!(
            parse(vec![parse_quote!(#[enkodo(wire = "")])]).unwrap(),
            Some(FieldAnnotation::default())
        );
    }

    #[test]
    fn malformed_annotations_are_errors() {
        let unknown_key = parse(vec![parse_quote!(#[enkodo(codec = "u8")])]).unwrap_err();
        assert!(unknown_key.to_string().starts_with("Unknown key `codec`"));

        let not_a_string = parse(vec![parse_quote!(#[enkodo(wire = u8)])]).unwrap_err();
        assert!(not_a_string.to_string().contains("string literal"));

        let twice = parse(vec![parse_quote!(#[enkodo]), parse_quote!(#[enkodo])]).unwrap_err();
        assert!(twice.to_string().contains("at most one"));

        let repeated_key =
            parse(vec![parse_quote!(#[enkodo(wire = "u8", wire = "u16")])]).unwrap_err();
        assert_eq!(repeated_key.to_string(), "`wire` may only be given once");

        let bad_type = parse(vec![parse_quote!(#[enkodo = "not a type"])]).unwrap_err();
        assert_eq!(bad_type.to_string(), "`not a type` is not a valid type");
    }
}
