use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Dashboard, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
