use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets a derived record be nested in another record's field.
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let colmap = &self.colmap;
        let ident = &self.record.ident;
        let name = self.record_name();

        let to_values = self.record.mapped_fields().map(|field| {
            let field_ident = &field.ident;
            quote!(#colmap::Primitive::to_value(&self.#field_ident))
        });

        let loads = self.record.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;

            if field.attrs.transient {
                quote!(#field_ident: #colmap::Default::default())
            } else {
                quote! {
                    #field_ident: <#ty as #colmap::Primitive>::load(
                        fields.next().unwrap_or_default()
                    )?
                }
            }
        });

        quote! {
            impl #colmap::Primitive for #ident {
                fn ty() -> #colmap::Type {
                    #colmap::Type::record(#name)
                }

                fn to_value(&self) -> #colmap::Value {
                    #colmap::Value::Record(vec![ #( #to_values ),* ])
                }

                fn reference_ty(column: &str) -> #colmap::Option<#colmap::Type> {
                    <Self as #colmap::Record>::record_type()
                        .column_field(column)
                        .map(|field| field.ty.clone())
                }

                fn reference_key(&self, column: &str) -> #colmap::Option<#colmap::Value> {
                    <Self as #colmap::Record>::record_type().column_value(self, column)
                }

                #[allow(unused_mut, unused_variables)]
                fn load(value: #colmap::Value) -> #colmap::Result<Self> {
                    let #colmap::Value::Record(fields) = value else {
                        return #colmap::Result::Err(#colmap::Error::type_conversion(value, #name));
                    };

                    let mut fields = fields.into_iter();

                    #colmap::Result::Ok(Self {
                        #( #loads, )*
                    })
                }
            }
        }
    }
}
