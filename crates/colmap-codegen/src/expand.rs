mod primitive;
mod record_type;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for colmap types
    colmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let primitive_impl = self.expand_primitive_impl();

        wrap_in_const(quote! {
            #record_impl
            #primitive_impl
        })
    }

    /// The record name as a string literal
    fn record_name(&self) -> syn::LitStr {
        let ident = &self.record.ident;
        syn::LitStr::new(&ident.to_string(), ident.span())
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        colmap: quote!(_colmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use colmap as _colmap;
            #code
        };
    }
}
