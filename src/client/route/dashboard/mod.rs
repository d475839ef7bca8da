//! Mentee dashboard page.
//!
//! The page is driven by a single [`DashboardController`] provided as context when the
//! route mounts. Child components read the controls and trigger loads through it:
//!
//! - [`FilterBar`] owns the house, sort and search controls
//! - [`MenteeList`] loads and renders the mentee list for the applied query
//! - [`ResponsesModal`] loads and renders the selected mentee's responses

mod filter_bar;
mod mentee_list;
mod responses_modal;

pub use filter_bar::FilterBar;
pub use mentee_list::MenteeList;
pub use responses_modal::ResponsesModal;

use dioxus::prelude::*;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::dashboard::{AppliedQuery, FilterControls, SelectedMentee},
    },
    model::mentee::MenteeDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_houses;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Page-lifetime state of the dashboard.
///
/// Created once when the route mounts; every field is a signal so the controller itself
/// is `Copy` and can be captured by event handlers.
#[derive(Clone, Copy)]
pub struct DashboardController {
    /// Live values of the filter controls.
    pub controls: Signal<FilterControls>,
    /// Snapshot of the controls at the last load trigger.
    pub applied: Signal<AppliedQuery>,
    /// Options for the house filter, in server order.
    pub houses: Signal<Vec<String>>,
    pub selected: Signal<Option<SelectedMentee>>,
    pub responses_open: Signal<bool>,
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            controls: Signal::new(FilterControls::default()),
            applied: Signal::new(AppliedQuery::default()),
            houses: Signal::new(Vec::new()),
            selected: Signal::new(None),
            responses_open: Signal::new(false),
        }
    }

    /// Snapshots the current controls and triggers the mentee list loader.
    pub fn load_mentees(&mut self) {
        let query = self.controls.peek().to_query();
        let next = self.applied.peek().next(query);
        self.applied.set(next);
    }

    /// Empties the search input and reloads the list.
    pub fn clear_search(&mut self) {
        self.controls.write().search.clear();
        self.load_mentees();
    }

    /// Opens the responses modal for `mentee` and triggers the responses loader.
    pub fn show_responses(&mut self, mentee: &MenteeDto) {
        let next = SelectedMentee::next(self.selected.peek().as_ref(), mentee);
        self.selected.set(Some(next));
        self.responses_open.set(true);
    }
}

#[component]
pub fn Dashboard() -> Element {
    #[allow(unused_mut)]
    let mut controller = use_context_provider(DashboardController::new);

    // Populate the house filter once; failures leave only the default option
    #[cfg(feature = "web")]
    {
        let houses = use_resource(get_houses);

        use_effect(move || match &*houses.read() {
            Some(Ok(list)) => controller.houses.set(list.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch houses: {}", err),
            None => (),
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-4xl",
                h1 {
                    class: "text-lg sm:text-2xl mb-6",
                    "Mentee Updates"
                }
                FilterBar {  }
                MenteeList {  }
            }
        }
        ResponsesModal {  }
    }
}
