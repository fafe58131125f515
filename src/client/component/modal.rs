use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::model::UseModal;

#[component]
pub fn Modal(
    modal: UseModal,
    title: String,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        if modal.is_open() {
            div {
                class: "modal modal-open",
                role: "dialog",
                aria_modal: "true",
                tabindex: "-1",
                // Mounted afresh on every open, so focus lands on this dialog
                onmounted: move |evt| async move {
                    if let Err(err) = evt.set_focus(true).await {
                        tracing::debug!("Failed to focus modal: {:?}", err);
                    }
                },
                div {
                    class: "modal-box {class}",
                    div {
                        h3 {
                            class: "font-bold text-lg mb-4",
                            "{title}"
                        }
                        {children}
                    }
                }
                div {
                    class: "modal-backdrop",
                    onclick: move |_| modal.close_modal(),
                }
            }
        }
    )
}
