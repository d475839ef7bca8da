use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaUserGraduate, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Dashboard {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaUserGraduate
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            a {
                href: "/api/docs",
                target: "_blank",
                class: "btn btn-outline btn-sm",
                "API"
            }
        }
    })
}
