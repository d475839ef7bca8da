use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaHourglassStart, FaMicrophone, FaTriangleExclamation},
    Icon,
};

use crate::client::{
    component::Modal,
    model::dashboard::{ResponseCard, ResponsesView, VoiceLink},
    route::dashboard::DashboardController,
};

#[cfg(feature = "web")]
use crate::client::{api::get_mentee_responses, model::dashboard::ResponsesResult};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Modal listing the selected mentee's weekly responses.
///
/// Closing the modal does not cancel a request in flight; its result is discarded if
/// another mentee has been selected in the meantime.
#[component]
pub fn ResponsesModal() -> Element {
    let controller = use_context::<DashboardController>();

    #[cfg(feature = "web")]
    let responses = use_resource(move || async move {
        let Some(selected) = controller.selected.read().clone() else {
            return None;
        };
        let result = get_mentee_responses(&selected.discord_id).await;

        if let Err(err) = &result {
            if !err.is_not_found() {
                tracing::error!("Failed to fetch responses: {}", err);
            }
        }

        Some(ResponsesResult {
            seq: selected.seq,
            discord_id: selected.discord_id,
            result,
        })
    });

    let selected = controller.selected.read().clone();
    let title = selected
        .as_ref()
        .map_or_else(|| "Responses".to_string(), |selected| selected.title());

    #[cfg(feature = "web")]
    let view = {
        let latest = responses.read();
        let latest = (*latest).as_ref().and_then(Option::as_ref);
        selected
            .as_ref()
            .map(|selected| ResponsesView::resolve(selected, latest, &chrono::Local))
    };
    #[cfg(not(feature = "web"))]
    let view = selected
        .as_ref()
        .map(|selected| ResponsesView::resolve(selected, None, &chrono::Local));

    rsx! {
        Modal {
            id: "responsesModal",
            show: controller.responses_open,
            title,
            match view.unwrap_or(ResponsesView::Loading) {
                ResponsesView::Loading => rsx! {
                    p {
                        class: "flex items-center justify-center gap-2 p-10",
                        Icon { width: 16, height: 16, icon: FaHourglassStart }
                        "Loading responses..."
                    }
                },
                ResponsesView::Message(message) => rsx! {
                    p {
                        class: "text-center p-10",
                        {message}
                    }
                },
                ResponsesView::Error(message) => rsx! {
                    p {
                        class: "flex items-center justify-center gap-2 p-10 text-error",
                        Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                        span { dangerous_inner_html: message }
                    }
                },
                ResponsesView::Cards(cards) => rsx! {
                    div {
                        class: "flex flex-col gap-3",
                        for card in cards {
                            ResponseCardView { key: "{card.id}", card }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ResponseCardView(card: ResponseCard) -> Element {
    rsx! {
        div {
            class: "response-card card bg-base-200",
            div {
                class: "card-body p-4 gap-2",
                h6 {
                    class: "font-semibold",
                    "{card.heading} - "
                    small {
                        class: "opacity-60 font-normal",
                        "{card.timestamp}"
                    }
                }
                if let Some(text) = &card.text {
                    p {
                        strong { "Text: " }
                        "{text}"
                    }
                }
                match &card.voice {
                    Some(VoiceLink::Link(url)) => rsx! {
                        p {
                            strong { "Voice: " }
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "voice-response-link link link-primary inline-flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaMicrophone }
                                "Listen to Voice Message"
                            }
                        }
                    },
                    Some(VoiceLink::Unavailable) => rsx! {
                        p {
                            strong { "Voice: " }
                            span { class: "opacity-60", "Voice message unavailable" }
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
