use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let colmap = &self.colmap;
        let ident = &self.record.ident;
        let name = self.record_name();
        let table = &self.record.table;

        let fields = self.record.fields.iter().map(|field| self.expand_field(field));
        let getters = self.record.mapped_fields().map(|field| self.expand_getter(field));
        let setters = self.record.mapped_fields().map(|field| self.expand_setter(field));
        let references = self
            .record
            .mapped_fields()
            .filter(|field| field.attrs.foreign.is_some())
            .map(|field| self.expand_reference(field));

        quote! {
            impl #colmap::Record for #ident {
                fn record_type() -> &'static #colmap::RecordType<Self> {
                    static RECORD_TYPE: #colmap::OnceLock<#colmap::RecordType<#ident>> =
                        #colmap::OnceLock::new();

                    RECORD_TYPE.get_or_init(|| {
                        #colmap::RecordType::<#ident>::builder(#name)
                            .table(#table)
                            #( .field(#fields) )*
                            #( #getters )*
                            #( #setters )*
                            #( #references )*
                            .build()
                            .expect("derived record types have unique field and accessor names")
                    })
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let colmap = &self.colmap;
        let name = field.name();
        let ty = &field.ty;
        let attrs = &field.attrs;

        let mut tokens = if attrs.transient {
            // Transient fields may hold any type, so the field type is opaque
            let opaque = quote!(#ty).to_string();
            quote! {
                #colmap::Field::new(#name, #colmap::Type::record(#opaque)).with_transient()
            }
        } else {
            quote! {
                #colmap::Field::new(#name, <#ty as #colmap::Primitive>::ty())
                    .with_nullable(<#ty as #colmap::Primitive>::NULLABLE)
            }
        };

        if let Some(column) = &attrs.column {
            let column_name = column
                .name
                .as_ref()
                .map(syn::LitStr::value)
                .unwrap_or_default();
            let with_default = column.default.as_ref().map(|default| {
                quote!(.with_default(#default))
            });

            tokens.extend(quote! {
                .with_column(#colmap::ColumnTag::new(#column_name) #with_default)
            });
        }

        if let Some(id) = &attrs.id {
            let id_name = id.name.as_ref().map(syn::LitStr::value).unwrap_or_default();
            tokens.extend(quote!(.with_id(#colmap::IdTag::new(#id_name))));
        }

        if let Some(foreign) = &attrs.foreign {
            let column = &foreign.column;
            let foreign = &foreign.foreign;
            tokens.extend(quote!(.with_foreign(#colmap::ForeignTag::new(#column, #foreign))));
        }

        tokens
    }

    fn expand_getter(&self, field: &Field) -> TokenStream {
        let colmap = &self.colmap;
        let record = &self.record.ident;
        let getter = &field.getter;
        let field_ident = &field.ident;

        quote! {
            .getter(#getter, |record: &#record| {
                #colmap::Primitive::to_value(&record.#field_ident)
            })
        }
    }

    fn expand_setter(&self, field: &Field) -> TokenStream {
        let colmap = &self.colmap;
        let record = &self.record.ident;
        let setter = &field.setter;
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote! {
            .setter(
                #setter,
                <#ty as #colmap::Primitive>::ty(),
                |record: &mut #record, value: #colmap::Value| {
                    record.#field_ident = <#ty as #colmap::Primitive>::load(value)?;
                    #colmap::Result::Ok(())
                },
            )
        }
    }

    fn expand_reference(&self, field: &Field) -> TokenStream {
        let colmap = &self.colmap;
        let record = &self.record.ident;
        let name = field.name();
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote! {
            .reference(
                #name,
                <#ty as #colmap::Primitive>::reference_ty,
                |record: &#record, column: &str| {
                    #colmap::Primitive::reference_key(&record.#field_ident, column)
                },
            )
        }
    }
}
