//! See [`require_named_fields`].

use syn::{
    DeriveInput,
    Fields,
    FieldsNamed,
};

use crate::ParsingError;

/// Ensures the macro input is a struct with named fields and returns them or a typed error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let syn::Data::Struct(data_struct) = &input.data else {
        return Err(ParsingError::NotAStruct.new_err(input));
    };

    match &data_struct.fields {
        Fields::Named(fields) => Ok(fields),
        fields => Err(ParsingError::NotNamedFields.new_err(fields)),
    }
}
