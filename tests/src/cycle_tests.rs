//! Auto-repeat cycle scenarios: hold counts, release, last-paddle-wins
//!
//! All timings at 20 WPM: unit 60 ms, dot cycle 120 ms, dash cycle 240 ms.

use paddle_core::test_utils::Session;
use paddle_core::{Element, InputEvent};
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn holding_dot_n_cycle_periods_emits_n_dots(#[case] cycles: u64) {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.feed_at(cycles * 120, InputEvent::DotUp);
    session.run_to(5_000);

    let expected: Vec<u64> = (0..cycles).map(|n| n * 120).collect();
    assert_eq!(session.recorder().element_times(), expected);
    assert!(session
        .recorder()
        .element_kinds()
        .iter()
        .all(|e| *e == Element::Dot));
}

#[test]
fn dash_held_two_full_cycles_emits_two_dashes() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DashDown);
    session.feed_at(480, InputEvent::DashUp);
    session.run_to(2_000);

    assert_eq!(
        session.recorder().elements,
        vec![(0, Element::Dash), (240, Element::Dash)]
    );
}

#[test]
fn dash_held_past_third_recheck_emits_three_dashes() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DashDown);
    session.feed_at(700, InputEvent::DashUp);
    session.run_to(2_000);

    assert_eq!(session.recorder().element_times(), vec![0, 240, 480]);
}

#[test]
fn release_stops_repeat_within_one_cycle_period() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.feed_at(130, InputEvent::DotUp);
    session.run_to(2_000);

    // the element in flight at 120 lands, nothing after release
    assert_eq!(session.recorder().element_times(), vec![0, 120]);
    // two dots decode as 'i' once the last cycle plus 3 units have passed
    assert_eq!(session.recorder().characters, vec![(420, 'i')]);
    assert_eq!(session.recorder().words, vec![540]);
}

#[test]
fn last_paddle_pressed_wins_the_latch() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.feed_at(10, InputEvent::DashDown);

    assert!(!session.keyer.dot_held());
    assert!(session.keyer.dash_held());

    // releasing the displaced dot paddle changes nothing
    session.feed_at(100, InputEvent::DotUp);
    assert!(session.keyer.dash_held());

    session.feed_at(495, InputEvent::DashUp);
    session.run_to(2_000);

    // dash restarted its own cycle at the press, then repeated at 240-ms steps
    assert_eq!(
        session.recorder().elements,
        vec![
            (0, Element::Dot),
            (10, Element::Dash),
            (250, Element::Dash),
            (490, Element::Dash),
        ]
    );
}

#[test]
fn play_element_mirrors_on_element() {
    let mut session = Session::new(20);
    session.feed_at(0, InputEvent::DotDown);
    session.feed_at(250, InputEvent::DotUp);
    session.run_to(1_000);

    assert_eq!(
        session.recorder().played,
        session.recorder().element_kinds()
    );
}
