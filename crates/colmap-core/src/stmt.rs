mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;
pub(crate) use value_chrono::date_to_millis;

/// Interprets an optional value as a boolean; `None` is `false`.
///
/// See [`Value::to_boolean`].
pub fn to_boolean(value: Option<&Value>) -> bool {
    value.is_some_and(Value::to_boolean)
}

/// Boolean interpretation of stored text.
///
/// One-character text is `true` only for `"1"`. Longer text is `true` only
/// for a case-insensitive `"true"`.
pub fn to_boolean_str(text: &str) -> bool {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => c == '1',
        _ => text.eq_ignore_ascii_case("true"),
    }
}
