//! Conversion table registration
//!
//! - `casts!` - generate `Cast` impls for (source, target) pairs
//!
//! Each pair becomes one `__impl_cast!` call. The declarative bridge puts the
//! concrete types where the capability probes can resolve them, which a
//! proc-macro on its own cannot do.

use std::collections::HashSet;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::{type_key, TypeList};

// =============================================================================
// casts! Input Parser
// =============================================================================

/// Direction of a rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// `=>`: source to target.
    Forward,
    /// `<=>`: both ways, plus the identity pair of each source.
    Both,
}

/// `Sources => Targets` or `Sources <=> Targets`
pub struct CastRule {
    pub from: TypeList,
    pub direction: Direction,
    pub to: TypeList,
}

impl Parse for CastRule {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let from: TypeList = input.parse()?;
        let direction = if input.peek(Token![<=]) {
            input.parse::<Token![<=]>()?;
            input.parse::<Token![>]>()?;
            Direction::Both
        } else if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            Direction::Forward
        } else {
            return Err(input.error("expected `=>` or `<=>`"));
        };
        let to: TypeList = input.parse()?;
        Ok(CastRule { from, direction, to })
    }
}

/// Rules separated by `;`
pub struct CastsInput {
    pub rules: Vec<CastRule>,
}

impl Parse for CastsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut rules = Vec::new();
        while !input.is_empty() {
            rules.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![;]>()?;
        }
        Ok(CastsInput { rules })
    }
}

// =============================================================================
// expand_casts
// =============================================================================

/// Expand rules into (source, target) pairs, first occurrence wins.
pub fn collect_pairs(input: &CastsInput) -> Vec<(Type, Type)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    let mut push = |from: &Type, to: &Type| {
        if seen.insert((type_key(from), type_key(to))) {
            pairs.push((from.clone(), to.clone()));
        }
    };

    for rule in &input.rules {
        for from in &rule.from.types {
            for to in &rule.to.types {
                push(from, to);
            }
        }
        if rule.direction == Direction::Both {
            for to in &rule.to.types {
                for from in &rule.from.types {
                    push(to, from);
                }
            }
            for from in &rule.from.types {
                push(from, from);
            }
        }
    }
    pairs
}

pub fn expand_casts(input: CastsInput) -> TokenStream2 {
    let impls = collect_pairs(&input).into_iter().map(|(from, to)| {
        quote! { ::tola_variant::__impl_cast!(#from => #to); }
    });
    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(src: &str) -> Vec<String> {
        let input: CastsInput = syn::parse_str(src).unwrap();
        collect_pairs(&input)
            .iter()
            .map(|(from, to)| format!("{}=>{}", type_key(from), type_key(to)))
            .collect()
    }

    #[test]
    fn test_forward_cross_product() {
        assert_eq!(
            pairs("[A, B] => [C, D];"),
            ["A=>C", "A=>D", "B=>C", "B=>D"]
        );
    }

    #[test]
    fn test_both_directions_with_identity() {
        assert_eq!(
            pairs("W<i32> <=> [i32, String]"),
            ["W<i32>=>i32", "W<i32>=>String", "i32=>W<i32>", "String=>W<i32>", "W<i32>=>W<i32>"]
        );
    }

    #[test]
    fn test_duplicate_pairs_emitted_once() {
        assert_eq!(pairs("A => [B, B]; A => B; B => A"), ["A=>B", "B=>A"]);
    }

    #[test]
    fn test_rejects_missing_arrow() {
        assert!(syn::parse_str::<CastsInput>("A B").is_err());
    }
}
