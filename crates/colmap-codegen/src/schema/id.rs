/// `#[id]` or `#[id("name")]` on a field.
#[derive(Debug)]
pub(crate) struct Id {
    pub(crate) name: Option<syn::LitStr>,
}

impl Id {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Id> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Id { name: None }),
            syn::Meta::List(_) => Ok(Id {
                name: Some(attr.parse_args()?),
            }),
            syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[id]` or `#[id(\"column_name\")]`",
            )),
        }
    }
}
