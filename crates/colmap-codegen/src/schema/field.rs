use super::{Column, ErrorSet, Foreign, Id};

use colmap_core::schema::accessor;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Getter name registered for the field
    pub(crate) getter: String,

    /// Setter name registered for the field
    pub(crate) setter: String,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[column(...)]`
    pub(crate) column: Option<Column>,

    /// `#[id]` or `#[id("name")]`
    pub(crate) id: Option<Id>,

    /// `#[foreign(...)]`
    pub(crate) foreign: Option<Foreign>,

    /// True if the field is annotated with `#[transient]`
    pub(crate) transient: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("id") {
                if attrs.id.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[id] attribute"));
                } else {
                    attrs.id = errs.check(Id::from_ast(attr));
                }
            } else if attr.path().is_ident("foreign") {
                if attrs.foreign.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[foreign] attribute",
                    ));
                } else {
                    attrs.foreign = errs.check(Foreign::from_ast(attr));
                }
            } else if attr.path().is_ident("transient") {
                if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "#[transient] takes no arguments",
                    ));
                } else if attrs.transient {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[transient] attribute",
                    ));
                } else {
                    attrs.transient = true;
                }
            }
        }

        if attrs.transient && (attrs.column.is_some() || attrs.id.is_some()) {
            errs.push(syn::Error::new_spanned(
                field,
                "#[transient] fields have no column and cannot take #[column] or #[id]",
            ));
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);

        // Plain `bool` fields follow the `is` convention
        let (getter, setter) = if is_bool(&field.ty) {
            (
                accessor::boolean_getter_name(name),
                accessor::boolean_setter_name(name),
            )
        } else {
            (accessor::getter_name(name), accessor::setter_name(name))
        };

        errs.finish(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
            getter,
            setter,
        })
    }

    /// Field name as registered in the record type
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(name) => name.to_string(),
            None => name,
        }
    }
}

fn is_bool(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(path) if path.qself.is_none() && path.path.is_ident("bool"))
}
