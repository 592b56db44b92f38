//! The closed set of primitive codec bindings.

use proc_macro2::{
    Ident,
    TokenStream,
};
use quote::{
    format_ident,
    quote,
};

/// A binding between a host primitive and one codec operation of the runtime `Encoder` /
/// `Decoder`, plus the value transforms applied around that operation.
///
/// The string form of each variant is the host type name it is registered under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum Converter {
    #[strum(serialize = "usize")]
    Uint,
    #[strum(serialize = "u8")]
    Uint8,
    #[strum(serialize = "u16")]
    Uint16,
    #[strum(serialize = "u32")]
    Uint32,
    #[strum(serialize = "u64")]
    Uint64,
    #[strum(serialize = "isize")]
    Int,
    #[strum(serialize = "i8")]
    Int8,
    #[strum(serialize = "i16")]
    Int16,
    #[strum(serialize = "i32")]
    Int32,
    #[strum(serialize = "i64")]
    Int64,
    #[strum(serialize = "f32")]
    Float32,
    #[strum(serialize = "f64")]
    Float64,
    #[strum(serialize = "String")]
    String,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "Vec<u8>")]
    Bytes,
    /// `std::io::Error`, carried as its message.
    #[strum(serialize = "Error")]
    IoError,
    /// `std::path::PathBuf`, carried as a lossy UTF-8 string.
    #[strum(serialize = "PathBuf")]
    PathBuf,
}

impl Converter {
    /// The name of the `Encoder` / `Decoder` method this binding calls.
    pub fn codec_op(&self) -> Ident {
        let op = match self {
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String | Self::IoError | Self::PathBuf => "string",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
        };

        format_ident!("{}", op)
    }

    /// The host type a decoded value of this binding has. Derived bindings name their type
    /// through [`Converter::required_imports`].
    pub fn host_type(&self) -> TokenStream {
        match self {
            Self::String => quote! { ::std::string::String },
            Self::Bytes => quote! { ::std::vec::Vec<u8> },
            Self::IoError => quote! { Error },
            Self::PathBuf => quote! { PathBuf },
            _ => {
                let ty = format_ident!("{}", self.to_string());
                quote! { #ty }
            }
        }
    }

    /// The argument passed to the encode op for the value at `value`.
    pub fn encode_arg(&self, value: TokenStream) -> TokenStream {
        match self {
            Self::String | Self::Bytes => quote! { &#value },
            Self::IoError => quote! { &::std::string::ToString::to_string(&#value) },
            Self::PathBuf => quote! { &::std::path::Path::to_string_lossy(&#value) },
            _ => value,
        }
    }

    /// Wraps the raw value returned by the decode op. `None` means the raw value is used as is.
    pub fn decode_value(&self, raw: TokenStream) -> Option<TokenStream> {
        match self {
            Self::IoError => Some(quote! { Error::other(#raw) }),
            Self::PathBuf => Some(quote! { PathBuf::from(#raw) }),
            _ => None,
        }
    }

    /// Paths the generated code must import for this binding's transforms to resolve.
    pub fn required_imports(&self) -> &'static [&'static str] {
        match self {
            Self::IoError => &["::std::io::Error"],
            Self::PathBuf => &["::std::path::PathBuf"],
            _ => &[],
        }
    }
}
