/// `#[foreign(column = "...", foreign = "...")]` on a field.
#[derive(Debug)]
pub(crate) struct Foreign {
    /// Column holding the reference in this record's table
    pub(crate) column: syn::LitStr,

    /// Column referenced on the foreign side
    pub(crate) foreign: syn::LitStr,
}

impl Foreign {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Foreign> {
        let mut column = None;
        let mut foreign = None;

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("column") {
                &mut column
            } else if meta.path.is_ident("foreign") {
                &mut foreign
            } else {
                return Err(meta.error("expected `column` or `foreign`"));
            };

            if slot.is_some() {
                return Err(meta.error("duplicate argument"));
            }

            *slot = Some(meta.value()?.parse::<syn::LitStr>()?);
            Ok(())
        })?;

        let Some(column) = column else {
            return Err(syn::Error::new_spanned(attr, "missing `column = \"...\"`"));
        };

        let Some(foreign) = foreign else {
            return Err(syn::Error::new_spanned(attr, "missing `foreign = \"...\"`"));
        };

        Ok(Foreign { column, foreign })
    }
}
