//! Paddle pin adapter against embedded-hal-mock transactions

use embedded_hal_mock::eh1::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use paddle_core::hal::PaddlePin;
use paddle_core::{Duration, InputEvent, Instant, Paddle};

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn adapter_maps_levels_to_paddle_events() {
    let expectations = [
        PinTransaction::get(PinState::High), // idle, active low
        PinTransaction::get(PinState::Low),  // pressed
        PinTransaction::get(PinState::Low),  // still pressed
        PinTransaction::get(PinState::High), // released
    ];
    let mut paddle = PaddlePin::new(PinMock::new(&expectations), Paddle::Dot);

    assert_eq!(paddle.sample(at(0)).unwrap(), None);
    assert_eq!(paddle.sample(at(20)).unwrap(), Some(InputEvent::DotDown));
    assert_eq!(paddle.sample(at(40)).unwrap(), None);
    assert_eq!(paddle.sample(at(60)).unwrap(), Some(InputEvent::DotUp));

    paddle.into_inner().done();
}

#[test]
fn adapter_swallows_edges_inside_the_debounce_window() {
    let expectations = [
        PinTransaction::get(PinState::Low),  // pressed
        PinTransaction::get(PinState::High), // bounce, 3 ms later
        PinTransaction::get(PinState::Low),  // bounce, 6 ms later
        PinTransaction::get(PinState::High), // real release
    ];
    let mut paddle = PaddlePin::new(PinMock::new(&expectations), Paddle::Dash)
        .with_debounce(Duration::from_millis(10));

    assert_eq!(paddle.sample(at(0)).unwrap(), Some(InputEvent::DashDown));
    assert_eq!(paddle.sample(at(3)).unwrap(), None);
    assert_eq!(paddle.sample(at(6)).unwrap(), None);
    assert_eq!(paddle.sample(at(30)).unwrap(), Some(InputEvent::DashUp));

    paddle.into_inner().done();
}
