//! The recursive classification of a declared field type into one of four shapes.

use std::fmt::Display;

use syn::{
    GenericArgument,
    PathArguments,
    Type,
    TypePath,
};

/// Registry key of the raw byte block, the one list shape encoded as a single primitive.
pub const BYTES_KEY: &str = "Vec<u8>";

const POINTER_MARKER: &str = "Box";
const LIST_MARKER: &str = "Vec";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A bare or qualified name, reduced to its final segment.
    Primitive(String),
    /// `Box<Name>`. The pointee's own shape is resolved by delegating to its impl, not here.
    Pointer(Box<TypeDescriptor>),
    /// `Vec<T>`, with `T` classified recursively.
    List(Box<TypeDescriptor>),
    Unknown,
}

impl TypeDescriptor {
    pub fn classify(ty: &Type) -> Self {
        let type_path = match ty {
            Type::Path(type_path) => type_path,
            // Invisible groups show up when the declaration was produced by a `macro_rules!`.
            Type::Group(group) => return Self::classify(&group.elem),
            Type::Paren(paren) => return Self::classify(&paren.elem),
            _ => return Self::Unknown,
        };

        // No `<T as Trait>::Assoc` paths.
        if type_path.qself.is_some() {
            return Self::Unknown;
        }
        let Some(segment) = type_path.path.segments.last() else {
            return Self::Unknown;
        };
        let name = segment.ident.to_string();

        match &segment.arguments {
            PathArguments::None => Self::Primitive(name),
            PathArguments::AngleBracketed(_) if name == POINTER_MARKER => {
                match single_type_argument(&segment.arguments).and_then(bare_name) {
                    Some(pointee) => Self::Pointer(Box::new(Self::Primitive(pointee))),
                    None => Self::Unknown,
                }
            }
            PathArguments::AngleBracketed(_) if name == LIST_MARKER => {
                let elem = single_type_argument(&segment.arguments)
                    .map(Self::classify)
                    .unwrap_or(Self::Unknown);
                Self::List(Box::new(elem))
            }
            _ => Self::Unknown,
        }
    }

    /// Parses an override annotation's value. Empty values mean "no override".
    pub fn parse_override(value: &str) -> Option<syn::Result<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        Some(syn::parse_str::<Type>(value).map(|ty| Self::classify(&ty)))
    }

    /// The name this shape is looked up by in the converter registry, if it is primitive-backed.
    pub fn registry_key(&self) -> Option<&str> {
        match self {
            Self::Primitive(name) => Some(name),
            Self::List(elem) if matches!(elem.as_ref(), Self::Primitive(name) if name == "u8") => {
                Some(BYTES_KEY)
            }
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(name) => write!(f, "{name}"),
            Self::Pointer(pointee) => write!(f, "{POINTER_MARKER}<{pointee}>"),
            Self::List(elem) => write!(f, "{LIST_MARKER}<{elem}>"),
            Self::Unknown => write!(f, "_"),
        }
    }
}

/// The `T` in `Wrapper<T>`, when there is exactly one generic argument and it is a type.
fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first() {
        // `Vec<_>` has no usable element type.
        Some(GenericArgument::Type(Type::Infer(_))) => None,
        Some(GenericArgument::Type(ty)) => Some(ty),
        _ => None,
    }
}

/// The identifier of a single-segment path with no generics, e.g. `User` but not `a::User`.
fn bare_name(ty: &Type) -> Option<String> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    // Only one segment, no `::` anywhere.
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return None;
    }
    // No generics.
    let segment = &path.segments[0];
    if !segment.arguments.is_empty() {
        return None;
    }

    Some(segment.ident.to_string())
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn classify(ty: Type) -> TypeDescriptor {
        TypeDescriptor::classify(&ty)
    }

    fn primitive(name: &str) -> TypeDescriptor {
        TypeDescriptor::Primitive(name.to_string())
    }

    #[test]
    fn bare_and_qualified_names_are_primitives() {
        assert_eq!(classify(parse_quote!(u8)), primitive("u8"));
        assert_eq!(classify(parse_quote!(User)), primitive("User"));
        assert_eq!(classify(parse_quote!(std::string::String)), primitive("String"));
        assert_eq!(classify(parse_quote!(::std::io::Error)), primitive("Error"));
    }

    #[test]
    fn box_of_a_bare_name_is_a_pointer() {
        assert_eq!(
            classify(parse_quote!(Box<User>)),
            TypeDescriptor::Pointer(Box::new(primitive("User")))
        );
        assert_eq!(
            classify(parse_quote!(std::boxed::Box<User>)),
            TypeDescriptor::Pointer(Box::new(primitive("User")))
        );
    }

    #[test]
    fn box_of_anything_else_is_unknown() {
        assert_eq!(classify(parse_quote!(Box<models::User>)), TypeDescriptor::Unknown);
        assert_eq!(classify(parse_quote!(Box<Vec<u8>>)), TypeDescriptor::Unknown);
        assert_eq!(classify(parse_quote!(Box<dyn Fn()>)), TypeDescriptor::Unknown);
    }

    #[test]
    fn lists_nest_without_bound() {
        assert_eq!(
            classify(parse_quote!(Vec<Box<User>>)),
            TypeDescriptor::List(Box::new(TypeDescriptor::Pointer(Box::new(primitive("User")))))
        );
        assert_eq!(
            classify(parse_quote!(Vec<Vec<Vec<i64>>>)).to_string(),
            "Vec<Vec<Vec<i64>>>"
        );
    }

    #[test]
    fn indeterminate_list_elements_are_unknown() {
        assert_eq!(
            classify(parse_quote!(Vec<_>)),
            TypeDescriptor::List(Box::new(TypeDescriptor::Unknown))
        );
        assert_eq!(
            classify(parse_quote!(Vec<(u8, u8)>)),
            TypeDescriptor::List(Box::new(TypeDescriptor::Unknown))
        );
    }

    #[test]
    fn other_shapes_are_unknown() {
        assert!(classify(parse_quote!(&'static str)).is_unknown());
        assert!(classify(parse_quote!([u8; 32])).is_unknown());
        assert!(classify(parse_quote!((u8, u8))).is_unknown());
        assert!(classify(parse_quote!(Option<u8>)).is_unknown());
        assert!(classify(parse_quote!(<T as Trait>::Assoc)).is_unknown());
    }

    #[test]
    fn byte_lists_share_one_registry_key() {
        assert_eq!(classify(parse_quote!(Vec<u8>)).registry_key(), Some(BYTES_KEY));
        assert_eq!(classify(parse_quote!(Vec<u16>)).registry_key(), None);
        assert_eq!(classify(parse_quote!(Box<u8>)).registry_key(), None);
        assert_eq!(classify(parse_quote!(u16)).registry_key(), Some("u16"));
    }

    #[test]
    fn overrides_are_parsed_and_classified() {
        assert!(TypeDescriptor::parse_override("").is_none());
        assert!(TypeDescriptor::parse_override("   ").is_none());
        assert_eq!(
            TypeDescriptor::parse_override("String").unwrap().unwrap(),
            primitive("String")
        );
        assert_eq!(
            TypeDescriptor::parse_override("Vec<u8>").unwrap().unwrap().registry_key(),
            Some(BYTES_KEY)
        );
        assert!(TypeDescriptor::parse_override("not a type").unwrap().is_err());
    }
}
