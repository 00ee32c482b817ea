//! Procedural macros for tola-variant
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `alts![]` | type | Build an alternative list type |
//! | `casts!{}` | items | Generate `Cast` impls for conversion pairs |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, PartialEq, Debug)]
//! struct Meters(f64);
//!
//! impl From<f64> for Meters { ... }
//! impl From<Meters> for f64 { ... }
//!
//! casts! { Meters <=> [f64, String]; }
//!
//! type Length = Variant<alts![f64, Meters, String]>;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Build the alternative list type of a `Variant`.
///
/// `alts![A, B, C]` expands to `Alt<A, Alt<B, Alt<C, End>>>`. The list must be
/// non-empty and may not repeat a type.
///
/// Repeats are detected by comparing the written tokens, so only syntactic
/// duplicates are caught. `alts![i32, core::primitive::i32]` or a type alias of
/// an earlier entry passes the macro; constructing the variant then fails with
/// `type annotations needed`, because the value matches two positions.
#[proc_macro]
pub fn alts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::AltsInput);
    user::expand_alts(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Register conversion pairs.
///
/// # Syntax
///
/// ```ignore
/// casts! {
///     A => B;                 // A -> B
///     [A, B] => [C, D];       // every source to every target
///     W <=> [i32, String];    // both directions, plus W -> W
/// }
/// ```
///
/// Every pair gets a `Cast` impl whose strategy is detected from the types:
/// `From`/primitive cast, then `Display` rendering for a `String` target,
/// otherwise unavailable. Pairs repeated within one invocation are emitted once.
#[proc_macro]
pub fn casts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::CastsInput);
    user::expand_casts(input).into()
}
