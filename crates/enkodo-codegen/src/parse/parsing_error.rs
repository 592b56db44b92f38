pub enum ParsingError {
    NotAStruct,
    NotNamedFields,
    DuplicateAnnotation,
    DuplicateWireKey,
    UnknownAnnotationKey(String),
    ExpectedNameValueLiteral(String),
    InvalidWireType(String),
    DuplicateName(String, String),
}

impl From<ParsingError> for String {
    #[inline]
    fn from(value: ParsingError) -> Self {
        match value {
            ParsingError::NotAStruct => "Derive macro only works on structs".into(),
            ParsingError::NotNamedFields =>
                "Records must have named fields; tuple and unit structs are not supported".into(),
            ParsingError::DuplicateAnnotation =>
                "A field may carry at most one `#[enkodo]` attribute".into(),
            ParsingError::DuplicateWireKey => "`wire` may only be given once".into(),
            ParsingError::UnknownAnnotationKey(key) =>
                format!("Unknown key `{key}`. Specify an override like so: `#[enkodo(wire = \"u32\")]`"),
            ParsingError::ExpectedNameValueLiteral(got) =>
                format!("Expected a string literal like `wire = \"u32\"`, got `{got}`"),
            ParsingError::InvalidWireType(got) => format!("`{got}` is not a valid type"),
            ParsingError::DuplicateName(kind, name) => format!("Duplicate {kind} name `{name}`"),
        }
    }
}

impl ParsingError {
    #[inline]
    pub fn new_err(self, span: impl syn::spanned::Spanned) -> syn::Error {
        syn::Error::new::<String>(span.span(), self.into())
    }
}
