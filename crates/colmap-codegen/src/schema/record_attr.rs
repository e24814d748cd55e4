use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Optional database table name to store the record in
    pub(crate) table: Option<syn::LitStr>,
}

impl RecordAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("table") {
                continue;
            }

            if result.table.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                continue;
            }

            result.table = errs.check(table_name(attr));
        }

        errs.finish(result)
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, "expected `#[table = \"table_name\"]`");

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(expected());
    };

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name must not be blank"));
    }

    Ok(lit.clone())
}
