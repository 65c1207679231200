#![cfg_attr(not(feature = "std"), no_std)]

//! # Paddle Core
//!
//! Real-time iambic paddle decoder for Morse trainers: two momentary paddle
//! inputs in, a live stream of elements, characters and word boundaries out,
//! at a live-adjustable speed.
//!
//! The core is single-threaded and timer-driven. It owns no clock and no
//! input device: callers feed [`events::InputEvent`]s with the current
//! instant and poll pending deadlines, and the keyer reports everything
//! through the [`events::KeyerEvents`] callbacks.

pub mod events;
pub mod hal;
pub mod keyer;
pub mod morse;
pub mod timer;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use events::{InputEvent, KeyerEvents, NullEvents};
pub use hal::{Duration, Instant};
pub use keyer::Keyer;
pub use timer::{TimerKind, TimerSlots};
pub use types::{CycleState, Element, KeyerConfig, Paddle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration used by the trainer: 20 WPM within 5..=40
pub fn default_config() -> KeyerConfig {
    KeyerConfig::default()
}
