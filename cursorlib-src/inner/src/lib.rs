//! Glue shared by the category crates.

/// Re-exports each leaf crate both as a module and flattened into the
/// category, with the items documented in place.
///
/// Leaves listed after `;` are only reachable as modules, for crates whose
/// item names would clash when flattened.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident,)* $(; $($nested:ident,)*)? ) => {
        $(
            #[doc(inline)]
            pub use $lib::{self, *};
        )*
        $($(
            #[doc(inline)]
            pub use $nested;
        )*)?
    };
}
