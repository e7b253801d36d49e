use quote::quote;
use syn::{FnArg, ItemFn, Result};

use crate::component::{
    parse_props::parse_props, to_pascal_case::to_pascal_case, validate_component_function,
};

/// Generate a component type from a render function
pub(crate) fn generate_component(input: ItemFn) -> Result<proc_macro2::TokenStream> {
    validate_component_function(&input)?;

    let fn_name = &input.sig.ident;
    let fn_body = &input.block;
    let vis = &input.vis;
    let attrs = &input.attrs;

    let Some(FnArg::Typed(scope_arg)) = input.sig.inputs.first() else {
        return Err(syn::Error::new_spanned(&input.sig, "missing scope parameter"));
    };
    let scope_pat = &scope_arg.pat;

    let props = parse_props(&input)?;

    let struct_name = syn::Ident::new(&to_pascal_case(&fn_name.to_string()), fn_name.span());

    let struct_fields = props.iter().map(|prop| {
        let name = &prop.name.ident;
        let ty = &prop.ty;
        quote! {
            pub #name: #ty
        }
    });

    // Props are cloned into locals so the body reads like a plain function
    let prop_bindings = props.iter().map(|prop| {
        let name = &prop.name;

        quote! {
            let #name = ::core::clone::Clone::clone(&self.#name);
        }
    });

    let render_impl = quote! {
        impl ::snapshot::Component for #struct_name {
            #[allow(unused_mut)]
            fn render(&self, #scope_pat: &mut ::snapshot::Scope) -> ::snapshot::Html {
                #(#prop_bindings)*
                #fn_body
            }
        }
    };

    let output = if props.is_empty() {
        quote! {
            #(#attrs)*
            #[derive(Debug, Clone, Copy, Default)]
            #vis struct #struct_name;

            #render_impl
        }
    } else {
        let all_defaulted = props.iter().all(|prop| prop.default.is_some());

        let default_impl = if all_defaulted {
            let names = props.iter().map(|prop| &prop.name.ident);
            let defaults = props.iter().filter_map(|prop| prop.default.as_ref());

            quote! {
                impl ::core::default::Default for #struct_name {
                    fn default() -> Self {
                        Self {
                            #(#names: #defaults),*
                        }
                    }
                }
            }
        } else {
            quote! {}
        };

        quote! {
            #(#attrs)*
            #[derive(Debug, Clone)]
            #vis struct #struct_name {
                #(#struct_fields),*
            }

            #default_impl

            #render_impl
        }
    };

    Ok(output)
}
