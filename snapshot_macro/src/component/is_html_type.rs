use syn::Type;

/// Check if a type is Html, by its last path segment
pub(crate) fn is_html_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Html";
        }
    }

    false
}

/// Check if a type is `&mut Scope`, by the last path segment of the referent
pub(crate) fn is_scope_ref_type(ty: &Type) -> bool {
    let Type::Reference(reference) = ty else {
        return false;
    };

    if reference.mutability.is_none() {
        return false;
    }

    if let Type::Path(type_path) = &*reference.elem {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Scope";
        }
    }

    false
}
