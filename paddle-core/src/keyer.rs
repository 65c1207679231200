//! Keyer facade: paddle latches, element cycle, decode buffer and timers

use heapless::Vec;

use crate::events::{InputEvent, KeyerEvents};
use crate::hal::Instant;
use crate::morse;
use crate::timer::{TimerKind, TimerSlots};
use crate::types::{CycleState, Element, KeyerConfig, Paddle};

/// Longest table entry is 5 elements; anything past capacity is undecodable
/// anyway and further pushes are dropped.
const BUFFER_CAPACITY: usize = 8;

/// Real-time paddle decoder
///
/// The keyer never reads a clock: every entry point takes `now`, and all
/// waiting is expressed as armed deadlines. Callers feed input events as they
/// arrive and call [`Keyer::poll`] whenever time passes —
/// [`Keyer::next_deadline`] tells a driver how long it may sleep. Due timers
/// fire in timestamp order, each observed at its scheduled instant, so a
/// coarse poll after a long gap still replays the exact element rhythm.
///
/// All callbacks on `E` are invoked synchronously from `feed`/`poll`.
pub struct Keyer<E: KeyerEvents> {
    config: KeyerConfig,
    events: E,
    dot_held: bool,
    dash_held: bool,
    cycle: CycleState,
    buffer: Vec<Element, BUFFER_CAPACITY>,
    timers: TimerSlots,
    installed: bool,
}

impl<E: KeyerEvents> Keyer<E> {
    /// Create a keyer; input is ignored until [`Keyer::install`] is called
    pub fn new(config: KeyerConfig, events: E) -> Self {
        Self {
            config,
            events,
            dot_held: false,
            dash_held: false,
            cycle: CycleState::Idle,
            buffer: Vec::new(),
            timers: TimerSlots::new(),
            installed: false,
        }
    }

    /// Begin accepting input events; idempotent
    pub fn install(&mut self) {
        self.installed = true;
    }

    /// Stop accepting input, cancel every outstanding timer, drop pending
    /// decode state and release both latches
    ///
    /// Safe to call when never installed. No callback fires afterwards until
    /// the keyer is installed again.
    pub fn uninstall(&mut self) {
        self.installed = false;
        self.timers.cancel_all();
        self.buffer.clear();
        self.dot_held = false;
        self.dash_held = false;
        self.cycle = CycleState::Idle;
    }

    /// Cancel the pending decode: character and word timers stop, the symbol
    /// buffer empties, no callback fires
    ///
    /// The paddle latches and an in-flight element cycle are untouched; a held
    /// paddle keeps auto-repeating into the now-empty buffer.
    pub fn clear(&mut self) {
        self.timers.cancel(TimerKind::Character);
        self.timers.cancel(TimerKind::Word);
        self.buffer.clear();
    }

    /// Apply one input event at `now`; ignored entirely while not installed
    pub fn feed(&mut self, event: InputEvent, now: Instant) {
        if !self.installed {
            return;
        }

        match event {
            InputEvent::DotDown => self.press(Paddle::Dot, now),
            InputEvent::DotUp => self.release(Paddle::Dot),
            InputEvent::DashDown => self.press(Paddle::Dash, now),
            InputEvent::DashUp => self.release(Paddle::Dash),
            InputEvent::SpeedUp => {
                self.adjust_wpm(1);
            }
            InputEvent::SpeedDown => {
                self.adjust_wpm(-1);
            }
            InputEvent::Clear => self.clear(),
        }
    }

    /// Fire every timer due at or before `now`, in deadline order
    pub fn poll(&mut self, now: Instant) {
        while let Some((kind, at)) = self.timers.pop_due(now) {
            self.fire(kind, at);
        }
    }

    /// Earliest pending deadline; drivers may sleep until then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Set the speed, clamped to the configured bounds
    ///
    /// Fires `on_wpm_change` with the post-clamp value and returns it for the
    /// caller to persist. Timers already armed keep their deadlines; every
    /// subsequently armed timer uses the new unit.
    pub fn set_wpm(&mut self, requested: u32) -> u32 {
        let actual = self.config.clamp_wpm(requested);
        self.config.wpm = actual;
        self.events.on_wpm_change(actual);
        actual
    }

    /// Step the speed up or down, saturating at the bounds
    pub fn adjust_wpm(&mut self, step: i32) -> u32 {
        let requested = self.config.wpm.saturating_add_signed(step);
        self.set_wpm(requested)
    }

    /// Current speed in words per minute
    pub fn wpm(&self) -> u32 {
        self.config.wpm
    }

    pub fn config(&self) -> &KeyerConfig {
        &self.config
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn dot_held(&self) -> bool {
        self.dot_held
    }

    pub fn dash_held(&self) -> bool {
        self.dash_held
    }

    /// Elements accumulated towards the in-progress character
    ///
    /// Read-only; call sites that want to surface undecodable sequences can
    /// inspect this before the character deadline drains it.
    pub fn symbols(&self) -> &[Element] {
        &self.buffer
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }

    /// Latch the pressed paddle, force the other off, restart the cycle
    ///
    /// A press while the same paddle is already latched is a duplicate event
    /// and is ignored.
    fn press(&mut self, paddle: Paddle, now: Instant) {
        let already_held = match paddle {
            Paddle::Dot => self.dot_held,
            Paddle::Dash => self.dash_held,
        };
        if already_held {
            return;
        }

        match paddle {
            Paddle::Dot => {
                self.dot_held = true;
                self.dash_held = false;
            }
            Paddle::Dash => {
                self.dash_held = true;
                self.dot_held = false;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("paddle down: {:?}", paddle);

        self.timers.cancel(TimerKind::Cycle);
        self.run_cycle(paddle.element(), now);
    }

    /// Drop the latch and stop any further auto-repeat, even mid-gap
    ///
    /// Releasing a paddle that is not latched (including one forced off by
    /// the opposite press) is ignored. The character and word timers keep
    /// running from the last element.
    fn release(&mut self, paddle: Paddle) {
        let was_held = match paddle {
            Paddle::Dot => self.dot_held,
            Paddle::Dash => self.dash_held,
        };
        if !was_held {
            return;
        }

        match paddle {
            Paddle::Dot => self.dot_held = false,
            Paddle::Dash => self.dash_held = false,
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("paddle up: {:?}", paddle);

        self.timers.cancel(TimerKind::Cycle);
        self.cycle = CycleState::Idle;
    }

    /// One element cycle: emit, buffer, re-arm the boundary timers, schedule
    /// the next latch re-check after the element plus one unit of gap
    ///
    /// The character window opens once this element and its gap have passed,
    /// so a following element keyed at normal rhythm always re-arms it in
    /// time; the word deadline counts 7 units from the emission itself. For
    /// a dash the two coincide and the character fires first (arm order).
    fn run_cycle(&mut self, element: Element, now: Instant) {
        self.events.on_element(element);
        self.events.play_element(element);
        self.buffer.push(element).ok();

        let period = self.config.element_duration(element) + self.config.unit();
        self.timers
            .arm(TimerKind::Character, now + period + self.config.char_deadline());
        self.timers
            .arm(TimerKind::Word, now + self.config.word_deadline());
        self.timers.arm(TimerKind::Cycle, now + period);
        self.cycle = CycleState::Cycling(element);
    }

    fn fire(&mut self, kind: TimerKind, at: Instant) {
        match kind {
            TimerKind::Character => self.drain_and_decode(),
            TimerKind::Word => self.events.on_word(),
            TimerKind::Cycle => match self.cycle {
                CycleState::Cycling(element) if self.latched(element) => {
                    self.run_cycle(element, at);
                }
                _ => self.cycle = CycleState::Idle,
            },
        }
    }

    /// Empty the buffer and report a decoded character, if the sequence is
    /// one the table knows; unrecognized sequences are discarded silently
    fn drain_and_decode(&mut self) {
        let decoded = morse::decode(&self.buffer);
        self.buffer.clear();

        if let Some(ch) = decoded {
            #[cfg(feature = "defmt")]
            defmt::trace!("decoded '{}'", ch);
            self.events.on_character(ch);
        }
    }

    fn latched(&self, element: Element) -> bool {
        match element {
            Element::Dot => self.dot_held,
            Element::Dash => self.dash_held,
        }
    }
}
