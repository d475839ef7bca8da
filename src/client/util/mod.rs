pub mod escape;
pub mod format;

pub use escape::escape_html;
