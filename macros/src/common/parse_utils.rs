//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use quote::ToTokens;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token, Token, Type,
};

// =============================================================================
// Type Keys
// =============================================================================

/// Whitespace-free token string of a type, used to compare types syntactically.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

// =============================================================================
// Type List Parsing: `T` or `[T, U, ...]`
// =============================================================================

/// One side of a conversion rule: a single type or a bracketed list.
pub struct TypeList {
    pub types: Vec<Type>,
}

impl Parse for TypeList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(token::Bracket) {
            let content;
            let bracket = bracketed!(content in input);
            let types: Punctuated<Type, Token![,]> = Punctuated::parse_terminated(&content)?;
            if types.is_empty() {
                return Err(syn::Error::new(bracket.span.join(), "expected at least one type"));
            }
            Ok(TypeList {
                types: types.into_iter().collect(),
            })
        } else {
            let ty: Type = input.parse()?;
            Ok(TypeList { types: vec![ty] })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_ignores_spacing() {
        let a: Type = syn::parse_quote!(Wrapper < i32 >);
        let b: Type = syn::parse_quote!(Wrapper<i32>);
        assert_eq!(type_key(&a), type_key(&b));
    }

    #[test]
    fn test_type_list_forms() {
        let single: TypeList = syn::parse_quote!(String);
        assert_eq!(single.types.len(), 1);

        let list: TypeList = syn::parse_quote!([i32, Vec<u8>,]);
        assert_eq!(list.types.len(), 2);

        assert!(syn::parse_str::<TypeList>("[]").is_err());
    }
}
