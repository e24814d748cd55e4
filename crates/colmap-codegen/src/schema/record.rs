use super::{ErrorSet, Field, RecordAttr};

use heck::ToSnakeCase;
use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields
    pub(crate) fields: Vec<Field>,

    /// Table the record is stored in
    pub(crate) table: syn::LitStr,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // The record type lives in a per-type static
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let attr = errs.check(RecordAttr::from_ast(&ast.attrs));

        let fields: Vec<_> = node
            .named
            .iter()
            .filter_map(|node| errs.check(Field::from_ast(node)))
            .collect();

        check_accessor_names(&fields, &mut errs);

        let table = attr
            .and_then(|attr| attr.table)
            .unwrap_or_else(|| {
                syn::LitStr::new(&ast.ident.to_string().to_snake_case(), ast.ident.span())
            });

        errs.finish(Self {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }

    /// Fields with accessors and a slot in nested record values
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.attrs.transient)
    }
}

/// Two fields may not generate the same getter or setter, e.g. `active` and
/// `isActive` on `bool` fields both read through `isActive`.
fn check_accessor_names(fields: &[Field], errs: &mut ErrorSet) {
    let mut getters = HashMap::new();
    let mut setters = HashMap::new();

    for field in fields.iter().filter(|field| !field.attrs.transient) {
        for (names, name) in [(&mut getters, &field.getter), (&mut setters, &field.setter)] {
            if let Some(other) = names.insert(name.clone(), &field.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("`{other}` and `{}` both generate accessor `{name}`", field.ident),
                ));
            }
        }
    }
}
