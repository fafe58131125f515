use std::convert::Infallible;

use crate::modal::{
    error::PlatformError,
    platform::{KeyHandler, Platform, Subscription},
};

/// Platform with no page behind it.
///
/// Used during server rendering and on targets without a DOM: nothing is ever
/// focused, scroll locking does nothing and keydown events never arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPlatform;

impl Platform for HeadlessPlatform {
    type Element = Infallible;

    fn active_element(&self) -> Option<Self::Element> {
        None
    }

    fn focus(&self, element: &Self::Element) -> Result<(), PlatformError> {
        match *element {}
    }

    fn set_scroll_locked(&self, _locked: bool) -> Result<(), PlatformError> {
        Ok(())
    }

    fn subscribe_keydown(&self, _handler: KeyHandler) -> Result<Subscription, PlatformError> {
        Ok(Subscription::inert())
    }
}
