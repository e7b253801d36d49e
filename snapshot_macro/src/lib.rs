#![allow(missing_docs)]

use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

use crate::component::generate_component;

mod component;

/// Turns `fn name(cx: &mut Scope, #[prop] ..) -> Html` into a `Name` component type.
#[proc_macro_attribute]
pub fn component(_args: TokenStream, input: TokenStream) -> TokenStream {
    let item_fn = parse_macro_input!(input as ItemFn);

    generate_component(item_fn)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
