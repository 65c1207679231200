//! Time source and hardware seams
//!
//! Embedded targets re-export `embassy_time` behind the `embassy-time`
//! feature; everything else runs on the self-contained millisecond tick
//! types below. The core itself never reads a clock either way — callers
//! pass `now` into every entry point.

#[cfg(feature = "embassy-time")]
pub use embassy_time::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
pub use self::tick::{Duration, Instant};

#[cfg(not(feature = "embassy-time"))]
mod tick {
    //! Millisecond-resolution time types with the embassy-time API subset
    //! the keyer uses

    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Instant(u64);

    impl Instant {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }

        /// Saturates at zero when `earlier` is in the future
        pub const fn duration_since(&self, earlier: Instant) -> Duration {
            Duration::from_millis(self.0.saturating_sub(earlier.0))
        }
    }

    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Add<Duration> for Instant {
        type Output = Instant;

        fn add(self, rhs: Duration) -> Instant {
            Instant(self.0 + rhs.0)
        }
    }

    impl core::ops::Add for Duration {
        type Output = Duration;

        fn add(self, rhs: Duration) -> Duration {
            Duration(self.0 + rhs.0)
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0 * rhs as u64)
        }
    }

    impl core::ops::Div<u32> for Duration {
        type Output = Duration;

        fn div(self, rhs: u32) -> Duration {
            Duration(self.0 / rhs as u64)
        }
    }
}

use embedded_hal::digital::InputPin;

use crate::events::InputEvent;
use crate::types::Paddle;

/// Default debounce window for paddle contacts
pub const DEFAULT_DEBOUNCE_MS: u64 = 10;

/// Polled, debounced paddle contact on an `embedded-hal` input pin
///
/// One possible producer of [`InputEvent`]s — the keyer itself is
/// input-agnostic. Contacts are assumed active low (pulled up, grounded when
/// pressed). Edges inside the debounce window are suppressed.
pub struct PaddlePin<P> {
    pin: P,
    side: Paddle,
    pressed: bool,
    last_edge: Option<Instant>,
    debounce: Duration,
}

impl<P: InputPin> PaddlePin<P> {
    pub fn new(pin: P, side: Paddle) -> Self {
        Self {
            pin,
            side,
            pressed: false,
            last_edge: None,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Recover the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    /// Sample the pin and report a debounced edge as an input event
    pub fn sample(&mut self, now: Instant) -> Result<Option<InputEvent>, P::Error> {
        let pressed = self.pin.is_low()?;
        if pressed == self.pressed {
            return Ok(None);
        }

        if let Some(edge) = self.last_edge {
            if now.duration_since(edge) < self.debounce {
                return Ok(None);
            }
        }

        self.pressed = pressed;
        self.last_edge = Some(now);

        Ok(Some(match (self.side, pressed) {
            (Paddle::Dot, true) => InputEvent::DotDown,
            (Paddle::Dot, false) => InputEvent::DotUp,
            (Paddle::Dash, true) => InputEvent::DashDown,
            (Paddle::Dash, false) => InputEvent::DashUp,
        }))
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock pin for exercising [`super::PaddlePin`] without hardware

    use core::cell::Cell;
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, InputPin};

    /// Pin whose level is driven through a shared cell (true = pressed/low)
    pub struct MockPin<'a> {
        pressed: &'a Cell<bool>,
    }

    impl<'a> MockPin<'a> {
        pub fn new(pressed: &'a Cell<bool>) -> Self {
            Self { pressed }
        }
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.pressed.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.pressed.get())
        }
    }
}
