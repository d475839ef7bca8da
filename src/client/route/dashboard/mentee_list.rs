use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleInfo, FaHourglassStart, FaTriangleExclamation, FaUserXmark},
    Icon,
};

use crate::client::{
    model::dashboard::{MenteeEntry, MenteeListContent, MenteeListView},
    route::dashboard::DashboardController,
};

#[cfg(feature = "web")]
use crate::client::{api::get_mentees, model::dashboard::MenteeListResult};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Mentee list container, reloaded whenever the applied query changes.
#[component]
pub fn MenteeList() -> Element {
    let controller = use_context::<DashboardController>();

    // Resource re-runs when `applied` changes, dropping any request still in flight
    #[cfg(feature = "web")]
    let mentees = use_resource(move || async move {
        let applied = controller.applied.read().clone();
        let result = get_mentees(&applied.query).await;

        if let Err(err) = &result {
            tracing::error!("Failed to fetch mentees: {}", err);
        }

        MenteeListResult {
            generation: applied.generation,
            result,
        }
    });

    #[cfg(feature = "web")]
    let view = {
        let latest = mentees.read();
        MenteeListView::resolve(&controller.applied.read(), (*latest).as_ref())
    };
    #[cfg(not(feature = "web"))]
    let view = MenteeListView::resolve(&controller.applied.read(), None);

    rsx! {
        div {
            id: "menteeList",
            class: "flex flex-col gap-2",
            match view {
                MenteeListView::Loading => rsx! {
                    p {
                        class: "flex items-center justify-center gap-2 p-10",
                        Icon { width: 16, height: 16, icon: FaHourglassStart }
                        "Loading mentees..."
                    }
                },
                MenteeListView::Error(message) => rsx! {
                    p {
                        class: "flex items-center justify-center gap-2 p-10 text-error",
                        Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                        span { dangerous_inner_html: message }
                    }
                },
                MenteeListView::Loaded { banner, content } => rsx! {
                    if let Some(banner) = banner {
                        SearchBanner { banner }
                    }
                    match content {
                        MenteeListContent::Empty(message) => rsx! {
                            p {
                                class: "flex items-center justify-center gap-2 p-10 opacity-60",
                                Icon { width: 16, height: 16, icon: FaUserXmark }
                                span { dangerous_inner_html: message }
                            }
                        },
                        MenteeListContent::Entries(entries) => rsx! {
                            for entry in entries {
                                MenteeItem { key: "{entry.mentee.discord_id}", entry }
                            }
                        },
                    }
                },
            }
        }
    }
}

/// Search result count with a control that clears the search.
#[component]
fn SearchBanner(banner: String) -> Element {
    let mut controller = use_context::<DashboardController>();

    rsx! {
        div {
            class: "alert alert-info flex justify-between items-center mb-3",
            span {
                class: "flex items-center gap-2",
                Icon { width: 16, height: 16, icon: FaCircleInfo }
                span { dangerous_inner_html: banner }
            }
            button {
                r#type: "button",
                class: "btn btn-sm btn-outline",
                onclick: move |_| controller.clear_search(),
                "Clear Search"
            }
        }
    }
}

#[component]
fn MenteeItem(entry: MenteeEntry) -> Element {
    let mut controller = use_context::<DashboardController>();
    let mentee = entry.mentee.clone();

    rsx! {
        a {
            href: "#",
            class: "flex justify-between items-center p-4 rounded-box bg-base-200 hover:bg-base-300 transition-colors",
            "data-discord-id": "{entry.mentee.discord_id}",
            "data-mentee-name": "{entry.mentee.name}",
            onclick: move |evt| {
                evt.prevent_default();
                controller.show_responses(&mentee);
            },
            div {
                h5 {
                    class: "font-semibold mb-1",
                    "{entry.mentee.name}"
                }
                small {
                    class: "opacity-60",
                    "{entry.discord_label}"
                }
                if let Some(badge) = &entry.badge {
                    br {}
                    span {
                        class: "badge badge-info mt-1",
                        "{badge}"
                    }
                }
            }
            span {
                class: "badge badge-primary",
                "{entry.count_label}"
            }
        }
    }
}
