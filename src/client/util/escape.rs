use std::fmt::Display;

/// Escapes a value for insertion into raw markup.
///
/// `None` becomes the empty string. The five characters `& < > " '` are replaced by
/// their entities, ampersand first so that entities produced by later replacements are
/// not escaped again.
pub fn escape_html<T: Display>(value: Option<T>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    value
        .to_string()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
