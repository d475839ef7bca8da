use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center w-full h-full",
            div {
                class: "text-center",
                h2 {
                    class: "text-xl font-bold mb-4",
                    "Page not found"
                }
                p {
                    class: "mb-4 opacity-70",
                    "Nothing lives at /{path}."
                }
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-primary",
                    "Back to dashboard"
                }
            }
        }
    }
}
