//! Host-based scenario tests for the paddle decoder
//!
//! Everything runs on the virtual clock from `paddle_core::test_utils`; no
//! test sleeps on the wall clock.

pub use paddle_core::test_utils::{Recorder, Script, Session, VirtualClock};

#[cfg(test)]
mod cycle_tests;
#[cfg(test)]
mod facade_tests;
#[cfg(test)]
mod hal_adapter_tests;
