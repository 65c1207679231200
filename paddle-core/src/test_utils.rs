//! Deterministic test harness: virtual clock, recording sink, scripted input
//!
//! Everything here is single-threaded and allocation-backed, for host-side
//! tests and demos only.

use std::cell::Cell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use crate::events::{InputEvent, KeyerEvents};
use crate::hal::{Duration, Instant};
use crate::keyer::Keyer;
use crate::morse;
use crate::types::{Element, KeyerConfig};

/// Shared virtual time in milliseconds
///
/// Clones observe the same time; hand one to a [`Recorder`] so callbacks can
/// be timestamped at the instant they fire.
#[derive(Clone, Default)]
pub struct VirtualClock {
    millis: Rc<Cell<u64>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Instant {
        Instant::from_millis(self.millis.get())
    }

    pub fn millis(&self) -> u64 {
        self.millis.get()
    }

    /// Move time forward to an absolute instant; never travels backwards
    pub fn set_millis(&self, ms: u64) {
        debug_assert!(ms >= self.millis.get(), "virtual time went backwards");
        self.millis.set(ms);
    }

    pub fn advance(&self, duration: Duration) {
        self.millis.set(self.millis.get() + duration.as_millis());
    }
}

/// Callback sink that records every notification with its virtual timestamp
#[derive(Default)]
pub struct Recorder {
    clock: VirtualClock,
    /// (millis, element) for every `on_element`
    pub elements: Vec<(u64, Element)>,
    /// Elements handed to the sounder
    pub played: Vec<Element>,
    /// (millis, char) for every decode
    pub characters: Vec<(u64, char)>,
    /// Instants of word boundaries
    pub words: Vec<u64>,
    /// Post-clamp values of every speed change
    pub wpm_changes: Vec<u32>,
}

impl Recorder {
    pub fn new(clock: VirtualClock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Decoded characters as a string
    pub fn text(&self) -> String {
        self.characters.iter().map(|(_, ch)| *ch).collect()
    }

    pub fn element_times(&self) -> Vec<u64> {
        self.elements.iter().map(|(ms, _)| *ms).collect()
    }

    pub fn element_kinds(&self) -> Vec<Element> {
        self.elements.iter().map(|(_, element)| *element).collect()
    }
}

impl KeyerEvents for Recorder {
    fn on_element(&mut self, element: Element) {
        self.elements.push((self.clock.millis(), element));
    }

    fn play_element(&mut self, element: Element) {
        self.played.push(element);
    }

    fn on_character(&mut self, ch: char) {
        self.characters.push((self.clock.millis(), ch));
    }

    fn on_word(&mut self) {
        self.words.push(self.clock.millis());
    }

    fn on_wpm_change(&mut self, wpm: u32) {
        self.wpm_changes.push(wpm);
    }
}

/// Timed list of input events
#[derive(Clone, Debug, Default)]
pub struct Script {
    events: Vec<(u64, InputEvent)>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one event at an absolute instant
    pub fn at(mut self, ms: u64, event: InputEvent) -> Self {
        self.events.push((ms, event));
        self
    }

    /// Press a paddle at `from_ms` and release it at `to_ms`
    pub fn hold(self, element: Element, from_ms: u64, to_ms: u64) -> Self {
        let (down, up) = paddle_events(element);
        self.at(from_ms, down).at(to_ms, up)
    }

    /// Key a phrase with 1-unit gaps inside a character, 5-unit character
    /// gaps and an 11-unit gap for each space
    ///
    /// The character gap is wider than the textbook 3 units so the decode
    /// window (element cycle plus 3 units) closes before the next character
    /// starts; the word gap likewise clears the 7-unit boundary. Characters
    /// outside the Morse table are skipped.
    pub fn text(text: &str, wpm: u32) -> Self {
        let unit = 1200 / wpm as u64;
        let mut script = Self::new();
        let mut t = 0;

        for ch in text.chars() {
            if ch == ' ' {
                t += 6 * unit;
                continue;
            }
            let Some(code) = morse::encode(ch) else {
                continue;
            };
            for element in code {
                let duration = element.duration_units() as u64 * unit;
                let (down, up) = paddle_events(*element);
                script.events.push((t, down));
                script.events.push((t + duration, up));
                t += duration + unit;
            }
            // widen the trailing element gap into the character gap
            t += 4 * unit;
        }
        script
    }

    pub fn events(&self) -> &[(u64, InputEvent)] {
        &self.events
    }

    /// Instant of the last event, for running a session past the tail silence
    pub fn end_ms(&self) -> u64 {
        self.events.iter().map(|(ms, _)| *ms).max().unwrap_or(0)
    }
}

fn paddle_events(element: Element) -> (InputEvent, InputEvent) {
    match element {
        Element::Dot => (InputEvent::DotDown, InputEvent::DotUp),
        Element::Dash => (InputEvent::DashDown, InputEvent::DashUp),
    }
}

/// Virtual clock, installed keyer and recorder wired together
///
/// Encodes the dispatch order of the reference runtime: an input event at
/// instant `t` is applied before timers whose deadline is exactly `t`, and
/// every timer fires with the clock set to its own deadline.
pub struct Session {
    pub clock: VirtualClock,
    pub keyer: Keyer<Recorder>,
}

impl Session {
    pub fn new(wpm: u32) -> Self {
        let config = KeyerConfig::new(wpm, 5, 40).expect("default bounds are valid");
        Self::with_config(config)
    }

    pub fn with_config(config: KeyerConfig) -> Self {
        let clock = VirtualClock::new();
        let mut keyer = Keyer::new(config, Recorder::new(clock.clone()));
        keyer.install();
        Self { clock, keyer }
    }

    /// Run timers strictly before `ms`, then apply the event at `ms`
    pub fn feed_at(&mut self, ms: u64, event: InputEvent) {
        self.run_until_before(ms);
        self.clock.set_millis(ms);
        self.keyer.feed(event, self.clock.now());
    }

    /// Fire every deadline up to and including `ms`, stepping the clock to
    /// each so callbacks observe their scheduled instant
    pub fn run_to(&mut self, ms: u64) {
        while let Some(deadline) = self.keyer.next_deadline() {
            if deadline.as_millis() > ms {
                break;
            }
            self.clock.set_millis(deadline.as_millis());
            self.keyer.poll(deadline);
        }
        if ms > self.clock.millis() {
            self.clock.set_millis(ms);
        }
    }

    /// Apply a whole script in time order, then settle the tail silence
    pub fn play(&mut self, script: &Script) {
        let mut events = script.events().to_vec();
        events.sort_by_key(|(ms, _)| *ms);
        for (ms, event) in events {
            self.feed_at(ms, event);
        }
        // 8 units past the last event clears the tail character window and
        // the 7-unit word boundary
        self.run_to(script.end_ms() + 8 * 1200 / self.keyer.wpm() as u64);
    }

    pub fn recorder(&self) -> &Recorder {
        self.keyer.events()
    }

    fn run_until_before(&mut self, ms: u64) {
        while let Some(deadline) = self.keyer.next_deadline() {
            if deadline.as_millis() >= ms {
                break;
            }
            self.clock.set_millis(deadline.as_millis());
            self.keyer.poll(deadline);
        }
    }
}
