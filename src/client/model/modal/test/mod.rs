use crate::{
    client::model::modal::{use_modal_on, UseModal},
    modal::{test::fake::FakePlatform, ModalConfig, ESCAPE_KEY},
};
use dioxus::prelude::*;
use std::{cell::RefCell, rc::Rc};

mod lifecycle;

/// Slot the host component writes its modal handle into.
#[derive(Clone, Default)]
struct Captured(Rc<RefCell<Option<UseModal<FakePlatform>>>>);

impl Captured {
    fn handle(&self) -> UseModal<FakePlatform> {
        (*self.0.borrow()).expect("host component has rendered")
    }
}

/// Component owning one modal on the fake page provided as root context.
#[component]
fn Host() -> Element {
    let page = use_context::<FakePlatform>();
    let captured = use_context::<Captured>();
    let modal = use_modal_on(move || page, ModalConfig::default());

    *captured.0.borrow_mut() = Some(modal);

    rsx! {
        if modal.is_open() {
            div { "open" }
        }
    }
}

/// Builds and renders a dom hosting one modal on `page`.
fn mount(page: &FakePlatform, captured: &Captured) -> VirtualDom {
    let mut dom = VirtualDom::new(Host)
        .with_root_context(page.clone())
        .with_root_context(captured.clone());
    dom.rebuild_in_place();
    dom
}
