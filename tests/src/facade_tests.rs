//! Install/uninstall/clear semantics

use paddle_core::test_utils::Session;
use paddle_core::{Element, InputEvent};

#[test]
fn install_is_idempotent() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);

    // a second install must not double-attach or disturb state
    session.keyer.install();
    assert!(session.keyer.dot_held());
    assert_eq!(session.recorder().elements.len(), 1);

    session.feed_at(60, InputEvent::DotUp);
    session.run_to(1_000);
    assert_eq!(session.recorder().characters, vec![(300, 'e')]);
}

#[test]
fn uninstall_cancels_timers_and_silences_input() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.clock.set_millis(60);
    session.keyer.uninstall();

    assert!(!session.keyer.dot_held());
    assert_eq!(session.keyer.next_deadline(), None);

    // nothing pending can fire, and input is inert
    session.run_to(5_000);
    session.feed_at(5_100, InputEvent::DashDown);
    assert_eq!(session.recorder().elements, vec![(0, Element::Dot)]);
    assert!(session.recorder().characters.is_empty());
    assert!(session.recorder().words.is_empty());

    // clear after uninstall is a safe no-op
    session.keyer.clear();
}

#[test]
fn reinstall_rearms_input_handling() {
    let mut session = Session::new(20);
    session.keyer.uninstall();
    session.feed_at(0, InputEvent::DotDown);
    assert!(session.recorder().elements.is_empty());

    session.keyer.install();
    session.feed_at(100, InputEvent::DotDown);
    session.feed_at(160, InputEvent::DotUp);
    session.run_to(1_000);

    assert_eq!(session.recorder().elements, vec![(100, Element::Dot)]);
    assert_eq!(session.recorder().characters, vec![(400, 'e')]);
}

#[test]
fn clear_drops_pending_decode_without_callbacks() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.feed_at(60, InputEvent::DotUp);
    session.feed_at(120, InputEvent::DotDown);
    session.feed_at(180, InputEvent::DotUp);

    session.feed_at(250, InputEvent::Clear);
    session.run_to(2_000);
    assert!(session.recorder().characters.is_empty());
    assert!(session.recorder().words.is_empty());

    // the next character starts from an empty buffer
    session.feed_at(2_000, InputEvent::DotDown);
    session.feed_at(2_060, InputEvent::DotUp);
    session.run_to(4_000);
    assert_eq!(session.recorder().characters, vec![(2_300, 'e')]);
}

#[test]
fn clear_does_not_stop_a_held_paddle() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DashDown);
    session.feed_at(100, InputEvent::Clear);
    session.feed_at(500, InputEvent::DashUp);
    session.run_to(2_000);

    // auto-repeat carried on through the clear
    assert_eq!(session.recorder().element_times(), vec![0, 240, 480]);
    // only the two post-clear dashes were buffered: 'm'
    assert_eq!(session.recorder().characters, vec![(900, 'm')]);
    assert_eq!(session.recorder().words, vec![900]);
}

#[test]
fn redundant_release_and_idle_clear_are_ignored() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotUp);
    session.feed_at(10, InputEvent::Clear);
    session.run_to(1_000);

    assert!(session.recorder().elements.is_empty());
    assert!(session.recorder().characters.is_empty());
    assert_eq!(session.keyer.next_deadline(), None);
}
