use dioxus::prelude::*;

/// Dialog that goes fullscreen on smaller device sizes.
///
/// `id` is set on the dialog root; the title and body elements get `{id}Label` and
/// `{id}Body`.
#[component]
pub fn Modal(id: &'static str, show: Signal<bool>, title: String, children: Element) -> Element {
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            id,
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    show.set(false);
                }
            },
            div {
                class: "modal-box w-full h-full border border-base-300 max-w-none max-h-none sm:w-11/12 sm:max-w-3xl sm:h-auto sm:max-h-[90vh] m-0 sm:m-auto rounded-none sm:rounded-box",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        id: "{id}Label",
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| show.set(false),
                        "✕"
                    }
                }
                div {
                    id: "{id}Body",
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| show.set(false),
            }
        }
    )
}
