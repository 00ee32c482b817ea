//! Alternative list construction
//!
//! - `alts!` - build the type-level alternative list of a `Variant`

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use crate::common::type_key;

// =============================================================================
// alts! Input Parser
// =============================================================================

pub struct AltsInput {
    pub types: Punctuated<Type, Token![,]>,
}

impl Parse for AltsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(AltsInput { types })
    }
}

/// Reject repeated alternatives; membership lookup would be ambiguous.
///
/// Comparison is on token text: paths and aliases naming the same type are not
/// resolved here.
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for ty in types {
        let key = type_key(ty);
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate alternative `{}`\n\
                     \n\
                     Each type may appear only once in an alternative list.",
                    key
                ),
            ));
        }
    }
    Ok(())
}

/// Build list type: Alt<T0, Alt<T1, ... End>>
pub fn build_alts(types: &[Type]) -> TokenStream2 {
    let mut result = quote! { ::tola_variant::End };
    for ty in types.iter().rev() {
        result = quote! { ::tola_variant::Alt<#ty, #result> };
    }
    result
}

pub fn expand_alts(input: AltsInput) -> syn::Result<TokenStream2> {
    let types: Vec<Type> = input.types.into_iter().collect();
    if types.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "an alternative list needs at least one type",
        ));
    }
    check_duplicates(&types)?;
    Ok(build_alts(&types))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> syn::Result<String> {
        let input: AltsInput = syn::parse_str(src)?;
        expand_alts(input).map(|ts| ts.to_string().replace(' ', ""))
    }

    #[test]
    fn test_nests_in_order() {
        assert_eq!(
            expand("i32, String").unwrap(),
            "::tola_variant::Alt<i32,::tola_variant::Alt<String,::tola_variant::End>>"
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(expand("").is_err());
    }

    #[test]
    fn test_duplicates_are_syntactic() {
        assert!(expand("i32, core::primitive::i32").is_ok());
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = expand("i32, Vec<u8>, Vec < u8 >").unwrap_err();
        assert!(err.to_string().contains("duplicate alternative `Vec<u8>`"));
    }
}
