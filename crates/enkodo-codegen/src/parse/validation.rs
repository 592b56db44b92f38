//! Structural checks over a parsed record that `syn` accepts but generation cannot.

use syn::Ident;

use crate::ParsingError;

/// Validate that no two eligible fields of a record share a name.
pub fn validate_field_names(names: &[&Ident]) -> syn::Result<()> {
    check_duplicate_names(names, "field")
}

fn check_duplicate_names(names: &[&Ident], duplicate_message_type: &str) -> syn::Result<()> {
    let mut names = names.to_vec();
    names.sort();
    names
        .windows(2)
        .map(|window| <&[&Ident; 2]>::try_from(window).expect("Should have 2"))
        .try_for_each(|[prev_name, curr_name]| {
            if prev_name == curr_name {
                let duplicate_error = ParsingError::DuplicateName(
                    duplicate_message_type.to_string(),
                    curr_name.to_string(),
                );
                Err(duplicate_error.new_err(curr_name))
            } else {
                Ok(())
            }
        })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn distinct_names_pass() {
        let (a, b): (Ident, Ident) = (parse_quote!(email), parse_quote!(age));
        assert!(validate_field_names(&[&a, &b]).is_ok());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (a, b, c): (Ident, Ident, Ident) =
            (parse_quote!(email), parse_quote!(age), parse_quote!(email));
        let err = validate_field_names(&[&a, &b, &c]).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate field name `email`");
    }
}
