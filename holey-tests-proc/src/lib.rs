//! Test macros for the `holey` integration tests.

extern crate proc_macro;
use proc_macro::TokenStream;

#[macro_use]
extern crate quote;

mod extracts;
mod should_fail;

/// Checks that the program returned by the function fails name resolution
/// with exactly the given set of diagnostic codes.
#[proc_macro_attribute]
pub fn should_fail(attr: TokenStream, item: TokenStream) -> TokenStream {
    should_fail::should_fail(attr, item)
}

/// Checks that extracting the holes of the program returned by the function
/// yields the given literals, in order.
#[proc_macro_attribute]
pub fn extracts(attr: TokenStream, item: TokenStream) -> TokenStream {
    extracts::extracts(attr, item)
}
