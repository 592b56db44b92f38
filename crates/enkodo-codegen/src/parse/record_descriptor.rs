use syn::{
    DeriveInput,
    Fields,
    FieldsNamed,
    Generics,
    Ident,
    ItemStruct,
};

use crate::parse::{
    data_struct::require_named_fields,
    field_descriptor::{
        FieldDescriptor,
        FieldEligibility,
        SkippedField,
    },
    validation::validate_field_names,
};

/// A named-field struct reduced to the fields that take part in generation, in declaration order.
/// Declaration order is wire order.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<FieldDescriptor>,
    pub skipped: Vec<SkippedField>,
}

impl RecordDescriptor {
    /// Builds a record from `#[derive]` input. Anything but a named-field struct is an error.
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let fields = require_named_fields(input)?;
        Self::from_fields(&input.ident, &input.generics, fields)
    }

    /// Builds a record from a struct item found in a source file. Tuple and unit structs are not
    /// records and yield `None`.
    pub fn from_item_struct(item: &ItemStruct) -> syn::Result<Option<Self>> {
        match &item.fields {
            Fields::Named(fields) => Self::from_fields(&item.ident, &item.generics, fields).map(Some),
            _ => Ok(None),
        }
    }

    fn from_fields(ident: &Ident, generics: &Generics, fields: &FieldsNamed) -> syn::Result<Self> {
        let mut eligible = vec![];
        let mut skipped = vec![];
        for field in fields.named.iter() {
            match FieldEligibility::of(field)? {
                FieldEligibility::Eligible(field) => eligible.push(field),
                FieldEligibility::Skipped(field) => skipped.push(field),
                FieldEligibility::Unannotated => {}
            }
        }

        let names: Vec<&Ident> = eligible.iter().map(|field| &field.ident).collect();
        validate_field_names(&names)?;

        Ok(Self {
            ident: ident.clone(),
            generics: generics.clone(),
            fields: eligible,
            skipped,
        })
    }

    /// Whether any field carries `#[enkodo]`, eligible or not.
    pub fn is_annotated(&self) -> bool {
        !self.fields.is_empty() || !self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn fields_keep_declaration_order() {
        let input: DeriveInput = parse_quote! {
            pub struct User {
                #[enkodo]
                pub email: String,
                pub note: String,
                #[enkodo]
                pub age: u8,
                #[enkodo]
                pub twitter: String,
            }
        };

        let record = RecordDescriptor::from_derive_input(&input).unwrap();
        let names: Vec<String> = record.fields.iter().map(|f| f.ident.to_string()).collect();
        assert_eq!(names, ["email", "age", "twitter"]);
        assert!(record.skipped.is_empty());
    }

    #[test]
    fn only_named_field_structs_are_records() {
        let tuple: DeriveInput = parse_quote!(pub struct Pair(#[enkodo] pub u8, pub u8););
        let err = RecordDescriptor::from_derive_input(&tuple).unwrap_err();
        assert!(err.to_string().starts_with("Records must have named fields"));

        let enumeration: DeriveInput = parse_quote!(pub enum Kind { A, B });
        let err = RecordDescriptor::from_derive_input(&enumeration).unwrap_err();
        assert_eq!(err.to_string(), "Derive macro only works on structs");

        let unit: ItemStruct = parse_quote!(pub struct Marker;);
        assert!(RecordDescriptor::from_item_struct(&unit).unwrap().is_none());
    }

    #[test]
    fn generics_are_carried_through() {
        let input: DeriveInput = parse_quote! {
            pub struct Wrapper<T: Default> where T: Clone {
                #[enkodo]
                pub inner: Box<T>,
            }
        };

        let record = RecordDescriptor::from_derive_input(&input).unwrap();
        assert_eq!(record.generics.params.len(), 1);
        assert!(record.generics.where_clause.is_some());
    }

    #[test]
    fn unannotated_structs_are_not_annotated_records() {
        let item: ItemStruct = parse_quote!(pub struct Plain { pub a: u8 });
        let record = RecordDescriptor::from_item_struct(&item).unwrap().unwrap();
        assert!(!record.is_annotated());
    }
}
