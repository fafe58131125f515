use super::*;

/// Tests the listener pairing of a mounted component.
///
/// Verifies that mounting registers exactly one escape listener, re-rendering
/// does not add another, and dropping the dom removes it.
///
/// Expected: one listener while mounted, none after unmount
#[test]
fn mount_attaches_once_and_unmount_detaches() {
    let page = FakePlatform::new();
    let captured = Captured::default();
    let mut dom = mount(&page, &captured);
    assert_eq!(page.listener_count(), 1);

    let modal = captured.handle();
    dom.in_runtime(|| modal.open_modal());
    dom.render_immediate_to_vec();
    assert_eq!(page.listener_count(), 1);

    drop(dom);
    assert_eq!(page.listener_count(), 0);
}

/// Tests escape reaching a modal opened through the hook handle.
///
/// Expected: open locks the page, escape closes it and the handle reports closed
#[test]
fn escape_closes_hooked_modal() {
    let page = FakePlatform::new();
    let trigger = page.element("btn1");
    page.user_focus(&trigger);
    let captured = Captured::default();
    let dom = mount(&page, &captured);
    let modal = captured.handle();

    dom.in_runtime(|| modal.open_modal());
    assert!(page.scroll_locked());
    assert!(dom.in_runtime(|| modal.is_open()));

    dom.in_runtime(|| page.press(ESCAPE_KEY));
    assert!(!page.scroll_locked());
    assert_eq!(page.focused(), Some("btn1"));
    assert!(!dom.in_runtime(|| modal.is_open()));
}

/// Tests escape after the owning component is gone.
///
/// Expected: no listener left to react, page untouched by the keypress
#[test]
fn escape_after_unmount_is_ignored() {
    let page = FakePlatform::new();
    let captured = Captured::default();
    let dom = mount(&page, &captured);

    let modal = captured.handle();
    dom.in_runtime(|| modal.open_modal());
    drop(dom);

    let writes = page.scroll_writes();
    page.press(ESCAPE_KEY);

    assert_eq!(page.listener_count(), 0);
    assert_eq!(page.scroll_writes(), writes);
}
