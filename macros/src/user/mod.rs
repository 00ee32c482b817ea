//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `alts!` | type position | Build an alternative list |
//! | `casts!` | item position | Register conversion pairs |

mod alts;
mod casts;

pub use alts::{expand_alts, AltsInput};
pub use casts::{expand_casts, CastsInput};
