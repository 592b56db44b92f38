//! Decides, once per field, how every node of its type tree is handled. Encode and decode both
//! render from the same [`ResolvedType`], so a field is either emitted on both sides or on neither.

use proc_macro2::{
    Ident,
    TokenStream,
};
use quote::{
    format_ident,
    quote,
};

use crate::{
    parse::{
        field_descriptor::{
            FieldDescriptor,
            SkipReason,
            SkippedField,
        },
        type_descriptor::TypeDescriptor,
    },
    render::{
        converter::Converter,
        registry::ConverterRegistry,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// A single codec operation through a registered binding.
    Codec(Converter),
    /// A boxed record, handed to its own `Marshal` / `Unmarshal` impl.
    Delegate(Ident),
    /// A length-prefixed sequence of the inner type.
    Sequence(Box<ResolvedType>),
}

impl ResolvedType {
    /// Resolves `descriptor` against `registry`, returning the first node that cannot be expressed.
    ///
    /// A primitive-backed shape always prefers its registry binding, which is what turns `Vec<u8>`
    /// into a single `bytes` op instead of a loop. Unregistered bare names are not delegated; only
    /// `Box<Name>` is.
    pub fn resolve(
        descriptor: &TypeDescriptor,
        registry: &ConverterRegistry,
    ) -> Result<Self, TypeDescriptor> {
        if let Some(converter) = descriptor.registry_key().and_then(|key| registry.lookup(key)) {
            return Ok(Self::Codec(converter));
        }

        match descriptor {
            TypeDescriptor::Pointer(pointee) => match pointee.as_ref() {
                TypeDescriptor::Primitive(name) => Ok(Self::Delegate(format_ident!("{}", name))),
                other => Err(other.clone()),
            },
            TypeDescriptor::List(elem) => {
                let elem = Self::resolve(elem, registry)?;
                Ok(Self::Sequence(Box::new(elem)))
            }
            other => Err(other.clone()),
        }
    }

    /// The host type of a value of this shape, used to declare decode temporaries.
    pub fn host_type(&self) -> TokenStream {
        match self {
            Self::Codec(converter) => converter.host_type(),
            Self::Delegate(ident) => quote! { ::std::boxed::Box<#ident> },
            Self::Sequence(inner) => {
                let inner = inner.host_type();
                quote! { ::std::vec::Vec<#inner> }
            }
        }
    }

    /// A name fragment unique to this shape, used to name decode temporaries.
    pub fn mangled(&self) -> String {
        match self {
            Self::Codec(Converter::Bytes) => "bytes".to_string(),
            Self::Codec(converter) => converter.to_string(),
            Self::Delegate(ident) => format!("box_{ident}"),
            Self::Sequence(inner) => format!("vec_{}", inner.mangled()),
        }
    }
}

/// A field whose whole type tree resolved.
#[derive(Debug, Clone)]
pub struct ResolvedField<'a> {
    pub field: &'a FieldDescriptor,
    pub resolved: ResolvedType,
    /// The field's value is converted to and from `resolved` with `From` on the way through.
    pub overridden: bool,
}

impl<'a> ResolvedField<'a> {
    /// Resolves the field's effective type. An override must land on a single registered binding.
    pub fn resolve(
        field: &'a FieldDescriptor,
        registry: &ConverterRegistry,
    ) -> Result<Self, SkippedField> {
        let unresolved = |node: TypeDescriptor| SkippedField {
            ident: field.ident.clone(),
            reason: SkipReason::Unresolved(node.to_string()),
        };

        let resolved = ResolvedType::resolve(field.effective(), registry).map_err(unresolved)?;
        let overridden = field.wire.is_some();
        if overridden && !matches!(resolved, ResolvedType::Codec(_)) {
            return Err(unresolved(field.effective().clone()));
        }

        Ok(Self {
            field,
            resolved,
            overridden,
        })
    }
}
