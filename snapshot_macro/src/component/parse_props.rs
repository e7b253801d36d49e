use syn::{Expr, FnArg, ItemFn, Pat, PatIdent, Type};

/// A component prop extracted from function parameters
pub(crate) struct ComponentProp {
    pub name: PatIdent,
    pub ty: Type,
    pub default: Option<Expr>,
}

/// Parse props from function parameters that have #[prop] attribute
pub(crate) fn parse_props(input: &ItemFn) -> syn::Result<Vec<ComponentProp>> {
    let mut props = Vec::new();

    // The first parameter is the hook scope, everything after it is a prop
    for arg in input.sig.inputs.iter().skip(1) {
        let FnArg::Typed(pat_type) = arg else {
            continue;
        };

        let mut has_prop_attr = false;
        let mut default_value = None;

        for attr in &pat_type.attrs {
            if !attr.path().is_ident("prop") {
                continue;
            }
            has_prop_attr = true;

            // Bare #[prop] carries no arguments
            if matches!(attr.meta, syn::Meta::Path(_)) {
                continue;
            }

            let args = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
            )?;

            for meta in args {
                match meta {
                    // Shorthand: #[prop(default)] -> Default::default()
                    syn::Meta::Path(path) if path.is_ident("default") => {
                        default_value = Some(syn::parse_quote!(::core::default::Default::default()));
                    }
                    syn::Meta::NameValue(name_value) if name_value.path.is_ident("default") => {
                        default_value = Some(name_value.value);
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "unsupported prop option, expected `default` or `default = <expr>`",
                        ));
                    }
                }
            }
        }

        if !has_prop_attr {
            continue;
        }

        if let Pat::Ident(pat_ident) = &*pat_type.pat {
            props.push(ComponentProp {
                name: pat_ident.clone(),
                ty: (*pat_type.ty).clone(),
                default: default_value,
            });
        }
    }

    Ok(props)
}
