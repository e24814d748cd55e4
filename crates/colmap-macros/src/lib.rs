extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `colmap::Record` (and `colmap::stmt::Primitive`) for a struct
/// with named fields.
///
/// Field attributes: `#[column("name", default = "...")]`, `#[id]`,
/// `#[id("name")]`, `#[foreign(column = "...", foreign = "...")]` and
/// `#[transient]`. Struct attribute: `#[table = "name"]`.
#[proc_macro_derive(Record, attributes(table, column, id, foreign, transient))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match colmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
