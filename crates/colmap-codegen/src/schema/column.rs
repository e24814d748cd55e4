/// `#[column(...)]` on a field.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) default: Option<syn::LitStr>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

mod kw {
    syn::custom_keyword!(default);
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            default: None,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(default = "value")]
        // #[column("name", default = "value")]
        // #[column(default = "value", "name")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::default) {
                if result.default.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column default"));
                }
                let _kw: kw::default = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.default = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
