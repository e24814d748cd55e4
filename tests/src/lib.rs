//! Records shared by the integration tests.

pub mod models;

/// Builds a [`colmap::schema::TextRow`] from `column => text` pairs, where
/// `text` is an `Option<&str>`.
#[macro_export]
macro_rules! text_row {
    ( $( $column:literal => $text:expr ),* $(,)? ) => {{
        let mut row = colmap::schema::TextRow::default();
        $(
            row.insert($column, Option::<&str>::map($text, str::to_string));
        )*
        row
    }};
}
