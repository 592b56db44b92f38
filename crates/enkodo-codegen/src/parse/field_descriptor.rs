//! A single record field that is eligible for generation, and the bookkeeping for fields that
//! carry `#[enkodo]` but cannot take part.

use std::fmt::Display;

use quote::ToTokens;
use syn::{
    Field,
    Ident,
    Type,
    Visibility,
};

use crate::parse::{
    field_annotation::parse_field_annotation,
    type_descriptor::TypeDescriptor,
};

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub ident: Ident,
    /// The declared type, used to name temporaries and convert overridden values back.
    pub ty: Type,
    pub descriptor: TypeDescriptor,
    /// Replaces `descriptor` for codec dispatch when present.
    pub wire: Option<TypeDescriptor>,
}

impl FieldDescriptor {
    /// The shape the codec sees: the override if there is one, otherwise the declared shape.
    pub fn effective(&self) -> &TypeDescriptor {
        self.wire.as_ref().unwrap_or(&self.descriptor)
    }
}

/// An annotated field left out of generation. Encode and decode both skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub ident: Ident,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The field is not `pub` or `pub(...)`.
    NotExported,
    /// The declared type is none of the four classifiable shapes and there is no override.
    Unclassifiable(String),
    /// Some node of the type tree has no converter and cannot be delegated.
    Unresolved(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotExported => write!(f, "field is not exported"),
            Self::Unclassifiable(ty) => write!(f, "type `{ty}` cannot be classified"),
            Self::Unresolved(ty) => write!(f, "no converter for `{ty}`"),
        }
    }
}

impl Display for SkippedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.ident, self.reason)
    }
}

#[derive(Debug, Clone)]
pub enum FieldEligibility {
    Eligible(FieldDescriptor),
    Skipped(SkippedField),
    /// No `#[enkodo]` attribute; the field is silently ignored.
    Unannotated,
}

impl FieldEligibility {
    /// Classifies one named field. Only a malformed `#[enkodo]` attribute is an error.
    pub fn of(field: &Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Ok(Self::Unannotated);
        };
        let Some(annotation) = parse_field_annotation(&field.attrs)? else {
            return Ok(Self::Unannotated);
        };

        if matches!(field.vis, Visibility::Inherited) {
            return Ok(Self::Skipped(SkippedField {
                ident,
                reason: SkipReason::NotExported,
            }));
        }

        let descriptor = TypeDescriptor::classify(&field.ty);
        if descriptor.is_unknown() && annotation.wire.is_none() {
            let ty = field.ty.to_token_stream().to_string();
            return Ok(Self::Skipped(SkippedField {
                ident,
                reason: SkipReason::Unclassifiable(ty),
            }));
        }

        Ok(Self::Eligible(FieldDescriptor {
            ident,
            ty: field.ty.clone(),
            descriptor,
            wire: annotation.wire,
        }))
    }
}

#[cfg(test)]
mod tests {
    use syn::{
        parse_quote,
        FieldsNamed,
    };

    use super::*;

    fn eligibility(fields: FieldsNamed) -> Vec<FieldEligibility> {
        fields
            .named
            .iter()
            .map(|field| FieldEligibility::of(field).unwrap())
            .collect()
    }

    #[test]
    fn only_annotated_exported_classifiable_fields_are_eligible() {
        let fields: FieldsNamed = parse_quote!({
            #[enkodo]
            pub email: String,
            pub unannotated: u8,
            #[enkodo]
            private: u8,
            #[enkodo]
            pub(crate) scoped: u8,
            #[enkodo]
            pub pair: (u8, u8),
        });

        let result = eligibility(fields);
        assert!(matches!(&result[0], FieldEligibility::Eligible(f) if f.ident == "email"));
        assert!(matches!(result[1], FieldEligibility::Unannotated));
        assert!(matches!(
            &result[2],
            FieldEligibility::Skipped(SkippedField { reason: SkipReason::NotExported, .. })
        ));
        assert!(matches!(&result[3], FieldEligibility::Eligible(f) if f.ident == "scoped"));
        assert!(matches!(
            &result[4],
            FieldEligibility::Skipped(SkippedField { reason: SkipReason::Unclassifiable(_), .. })
        ));
    }

    #[test]
    fn an_override_rescues_an_unclassifiable_type() {
        let fields: FieldsNamed = parse_quote!({
            #[enkodo = "String"]
            pub handle: &'static str,
        });

        let FieldEligibility::Eligible(field) = eligibility(fields).remove(0) else {
            panic!("expected an eligible field");
        };
        assert!(field.descriptor.is_unknown());
        assert_eq!(field.effective(), &TypeDescriptor::Primitive("String".into()));
    }

    #[test]
    fn skip_reasons_are_readable() {
        let skipped = SkippedField {
            ident: parse_quote!(points),
            reason: SkipReason::Unclassifiable("Vec < (i32 , i32) >".into()),
        };
        assert_eq!(
            skipped.to_string(),
            "points: type `Vec < (i32 , i32) >` cannot be classified"
        );
    }
}
