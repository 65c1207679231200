//! Input event vocabulary and the outbound callback seam

use crate::types::Element;

/// Abstract input events the keyer consumes
///
/// How these are produced (keyboard, touch, hardware paddle) is the caller's
/// business; [`crate::hal::PaddlePin`] is one possible source.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Dot paddle pressed
    DotDown,
    /// Dot paddle released
    DotUp,
    /// Dash paddle pressed
    DashDown,
    /// Dash paddle released
    DashUp,
    /// Speed-up control (one WPM step)
    SpeedUp,
    /// Speed-down control (one WPM step)
    SpeedDown,
    /// Cancel any pending decode
    Clear,
}

/// Outbound callbacks, all invoked synchronously from event/timer dispatch
///
/// Every method has a no-op default so implementors pick only the
/// notifications they care about.
pub trait KeyerEvents {
    /// An element was emitted, including auto-repeats
    fn on_element(&mut self, element: Element) {
        let _ = element;
    }

    /// The same moments as [`Self::on_element`]; intended for a sound generator
    fn play_element(&mut self, element: Element) {
        let _ = element;
    }

    /// The symbol buffer decoded to a character after 3 units of silence
    fn on_character(&mut self, ch: char) {
        let _ = ch;
    }

    /// 7 units of silence elapsed since the last element
    fn on_word(&mut self) {}

    /// The speed changed; carries the post-clamp value
    fn on_wpm_change(&mut self, wpm: u32) {
        let _ = wpm;
    }
}

/// Sink that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl KeyerEvents for NullEvents {}
