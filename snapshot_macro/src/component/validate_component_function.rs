use crate::component::is_html_type::is_scope_ref_type;
use crate::component::is_html_type;
use syn::{FnArg, ItemFn, Pat, ReturnType};

/// Validate that the function has the correct signature for a component
pub(crate) fn validate_component_function(input: &ItemFn) -> syn::Result<()> {
    let mut inputs = input.sig.inputs.iter();

    // The hook scope comes first
    match inputs.next() {
        Some(FnArg::Typed(pat_type)) if is_scope_ref_type(&pat_type.ty) => {}
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "Component functions cannot have self parameter",
            ));
        }
        Some(other) => {
            return Err(syn::Error::new_spanned(
                other,
                "The first component parameter must be `&mut Scope`",
            ));
        }
        None => {
            return Err(syn::Error::new_spanned(
                &input.sig,
                "Component functions must take `cx: &mut Scope` as first parameter",
            ));
        }
    }

    // Every other parameter must be a #[prop]
    for arg in inputs {
        match arg {
            FnArg::Typed(pat_type) => {
                let has_prop_attr = pat_type.attrs.iter().any(|attr| attr.path().is_ident("prop"));

                if !has_prop_attr {
                    let param_name = match &*pat_type.pat {
                        Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                        _ => "parameter".to_owned(),
                    };

                    return Err(syn::Error::new_spanned(
                        pat_type,
                        format!("Component parameter '{param_name}' must have #[prop] attribute"),
                    ));
                }

                if !matches!(&*pat_type.pat, Pat::Ident(_)) {
                    return Err(syn::Error::new_spanned(
                        &pat_type.pat,
                        "Component props must be plain identifiers",
                    ));
                }
            }
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "Component functions cannot have self parameter",
                ));
            }
        }
    }

    match &input.sig.output {
        ReturnType::Type(_, ty) if is_html_type(ty) => Ok(()),
        ReturnType::Type(_, ty) => Err(syn::Error::new_spanned(
            ty,
            "Component functions must return Html",
        )),
        ReturnType::Default => Err(syn::Error::new_spanned(
            &input.sig,
            "Component functions must have an explicit Html return type",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scope_then_props() {
        let item: ItemFn = syn::parse_quote! {
            fn app(cx: &mut Scope, #[prop] label: String) -> Html { Html::default() }
        };
        assert!(validate_component_function(&item).is_ok());
    }

    #[test]
    fn rejects_missing_scope() {
        let item: ItemFn = syn::parse_quote! {
            fn app() -> Html { Html::default() }
        };
        assert!(validate_component_function(&item).is_err());
    }

    #[test]
    fn rejects_param_without_prop() {
        let item: ItemFn = syn::parse_quote! {
            fn app(cx: &mut Scope, label: String) -> Html { Html::default() }
        };
        let err = validate_component_function(&item).unwrap_err();
        assert!(err.to_string().contains("'label' must have #[prop]"));
    }

    #[test]
    fn rejects_wrong_return_type() {
        let item: ItemFn = syn::parse_quote! {
            fn app(cx: &mut Scope) -> String { String::new() }
        };
        assert!(validate_component_function(&item).is_err());
    }
}
