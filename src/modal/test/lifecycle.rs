use super::*;

/// Tests that attaching registers exactly one listener and dropping removes it.
///
/// Expected: one listener while attached, none afterwards
#[test]
fn attach_pairs_with_detach() {
    let page = FakePlatform::new();
    let modal = controller(&page);

    let listener = modal.attach().unwrap();
    assert_eq!(page.listener_count(), 1);
    assert!(!listener.is_inert());

    drop(listener);
    assert_eq!(page.listener_count(), 0);
}

/// Tests escape after the owning component detached.
///
/// Expected: modal stays open
#[test]
fn escape_after_detach_is_ignored() {
    let page = FakePlatform::new();
    let modal = controller(&page);
    let listener = modal.attach().unwrap();

    modal.open();
    drop(listener);
    page.press(ESCAPE_KEY);

    assert!(modal.is_open());
}

/// Tests repeated mount and unmount cycles.
///
/// Expected: no listener leaks across cycles
#[test]
fn repeated_attach_does_not_leak() {
    let page = FakePlatform::new();
    let modal = controller(&page);

    for _ in 0..5 {
        let listener = modal.attach().unwrap();
        assert_eq!(page.listener_count(), 1);
        drop(listener);
    }

    assert_eq!(page.listener_count(), 0);
}

/// Tests a listener that outlives its controller.
///
/// Verifies that the listener holds only a weak reference, so a keypress after
/// the controller is dropped does nothing.
///
/// Expected: no panic, no page writes
#[test]
fn listener_outliving_controller_is_noop() {
    let page = FakePlatform::new();
    let modal = controller(&page);
    let listener = modal.attach().unwrap();

    modal.open();
    let writes = page.scroll_writes();
    drop(modal);

    page.press(ESCAPE_KEY);

    assert_eq!(page.scroll_writes(), writes);
    assert_eq!(page.listener_count(), 1);
    drop(listener);
    assert_eq!(page.listener_count(), 0);
}

/// Tests the listener being released on an early return path.
///
/// Expected: listener removed when the scope unwinds through `?`
#[test]
fn listener_released_on_early_return() {
    fn mount(modal: &ModalController<FakePlatform>) -> Result<(), &'static str> {
        let _listener = modal.attach().map_err(|_| "attach failed")?;
        Err("render failed")
    }

    let page = FakePlatform::new();
    let modal = controller(&page);

    assert!(mount(&modal).is_err());
    assert_eq!(page.listener_count(), 0);
}

/// Tests subscriptions directly.
///
/// Expected: release runs exactly once on drop, inert subscriptions release nothing
#[test]
fn subscription_releases_once() {
    let released = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&released);
    let subscription = Subscription::new(move || *counter.borrow_mut() += 1);
    assert!(!subscription.is_inert());
    drop(subscription);
    assert_eq!(*released.borrow(), 1);

    assert!(Subscription::inert().is_inert());
}

/// Tests a controller running without a page.
///
/// Expected: open and close toggle state, attach yields an inert listener
#[test]
fn headless_platform_is_noop() {
    let platform = HeadlessPlatform;
    assert!(platform.active_element().is_none());

    let modal = ModalController::new(platform, ModalConfig::default());
    let listener = modal.attach().unwrap();
    assert!(listener.is_inert());

    modal.open();
    assert!(modal.is_open());
    modal.close();
    assert!(!modal.is_open());
}
