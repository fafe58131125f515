use crate::modal::{
    config::{ModalConfig, Stacking},
    controller::ModalController,
    headless::HeadlessPlatform,
    platform::{Platform, Subscription, ESCAPE_KEY},
    stack::ModalStack,
};
use std::{cell::RefCell, rc::Rc};

use fake::FakePlatform;

mod lifecycle;

/// Creates an independent controller with default config on a shared fake page.
fn controller(platform: &FakePlatform) -> ModalController<FakePlatform> {
    ModalController::new(platform.clone(), ModalConfig::default())
}
