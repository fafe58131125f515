use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::{use_modal, use_modal_with_config},
    },
    modal::{ModalConfig, ModalStack},
};

const SITE_NAME: &str = "modalkit";

#[component]
pub fn App() -> Element {
    use_context_provider(ModalStack::new);

    rsx! {
        document::Title { "{SITE_NAME}" }
        Home {}
    }
}

#[component]
fn Home() -> Element {
    let about = use_modal();
    let settings = use_modal_with_config(ModalConfig::shared());
    let confirm = use_modal_with_config(ModalConfig::shared());

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 w-full py-12",
            h1 { class: "text-xl font-bold", "{SITE_NAME}" }
            div {
                class: "flex gap-2",
                button {
                    class: "btn",
                    onclick: move |_| about.open_modal(),
                    "About"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| settings.open_modal(),
                    "Settings"
                }
            }
        }
        Modal {
            modal: about,
            title: "About".to_string(),
            p { "Press Escape or click outside to close." }
            div {
                class: "modal-action",
                button {
                    class: "btn",
                    onclick: move |_| about.close_modal(),
                    "Close"
                }
            }
        }
        Modal {
            modal: settings,
            title: "Settings".to_string(),
            p { "Resetting asks for confirmation in a second modal." }
            div {
                class: "modal-action",
                button {
                    class: "btn btn-error",
                    onclick: move |_| confirm.open_modal(),
                    "Reset"
                }
                button {
                    class: "btn",
                    onclick: move |_| settings.close_modal(),
                    "Done"
                }
            }
        }
        Modal {
            modal: confirm,
            title: "Are you sure?".to_string(),
            p { "Escape closes this dialog first, then the settings." }
            div {
                class: "modal-action",
                button {
                    class: "btn",
                    onclick: move |_| confirm.close_modal(),
                    "Cancel"
                }
                button {
                    class: "btn btn-error",
                    onclick: move |_| {
                        confirm.close_modal();
                        settings.close_modal();
                    },
                    "Reset"
                }
            }
        }
    }
}
