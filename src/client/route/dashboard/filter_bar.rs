use dioxus::prelude::*;

use crate::{
    client::route::dashboard::DashboardController,
    model::mentee::{SortBy, SortOrder},
};

/// House filter, sort controls and the search box.
#[component]
pub fn FilterBar() -> Element {
    let mut controller = use_context::<DashboardController>();

    let controls = controller.controls.read().clone();
    let houses = controller.houses.read().clone();
    let has_search = !controls.search.is_empty();

    rsx! {
        div {
            class: "card bg-base-200 mb-6",
            div {
                class: "card-body p-4 gap-4",
                div {
                    class: "grid grid-cols-1 sm:grid-cols-4 gap-3 items-end",
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "House" }
                        select {
                            id: "houseFilter",
                            class: "select select-bordered w-full",
                            onchange: move |evt| controller.controls.write().house = evt.value(),
                            option {
                                value: "",
                                selected: controls.house.is_empty(),
                                "All houses"
                            }
                            for house in houses {
                                option {
                                    key: "{house}",
                                    value: "{house}",
                                    selected: controls.house == house,
                                    "{house}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Sort by" }
                        select {
                            id: "sortBy",
                            class: "select select-bordered w-full",
                            onchange: move |evt| {
                                if let Some(sort_by) = SortBy::parse(&evt.value()) {
                                    controller.controls.write().sort_by = sort_by;
                                }
                            },
                            for sort_by in SortBy::ALL {
                                option {
                                    value: sort_by.as_str(),
                                    selected: controls.sort_by == sort_by,
                                    {sort_by.label()}
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Order" }
                        select {
                            id: "sortOrder",
                            class: "select select-bordered w-full",
                            onchange: move |evt| {
                                if let Some(sort_order) = SortOrder::parse(&evt.value()) {
                                    controller.controls.write().sort_order = sort_order;
                                }
                            },
                            for sort_order in SortOrder::ALL {
                                option {
                                    value: sort_order.as_str(),
                                    selected: controls.sort_order == sort_order,
                                    {sort_order.label()}
                                }
                            }
                        }
                    }
                    button {
                        id: "applyFilters",
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| controller.load_mentees(),
                        "Apply"
                    }
                }
                div {
                    class: "flex gap-2",
                    input {
                        id: "searchInput",
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "Search mentees by name...",
                        value: "{controls.search}",
                        oninput: move |evt| controller.controls.write().search = evt.value(),
                        onkeydown: move |evt| match evt.key() {
                            Key::Enter => {
                                evt.prevent_default();
                                controller.load_mentees();
                            }
                            Key::Escape => controller.clear_search(),
                            _ => (),
                        },
                    }
                    if has_search {
                        button {
                            id: "clearSearch",
                            r#type: "button",
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                controller.clear_search();
                                document::eval(r#"document.getElementById('searchInput')?.focus()"#);
                            },
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}
