//! Core data types for the paddle decoder

use crate::hal::Duration;

/// Morse code elements
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "std", derive(Hash))]
pub enum Element {
    /// Dot (short element)
    Dot,
    /// Dash (long element)
    Dash,
}

impl Element {
    /// Returns the duration of this element in units
    pub const fn duration_units(&self) -> u32 {
        match self {
            Element::Dot => 1,
            Element::Dash => 3,
        }
    }

    /// Returns the display symbol for this element
    pub const fn symbol(&self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
        }
    }
}

/// Paddle side identification
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paddle {
    /// Dot paddle (typically left side)
    Dot,
    /// Dash paddle (typically right side)
    Dash,
}

impl Paddle {
    /// Convert to the Element this paddle produces
    pub const fn element(&self) -> Element {
        match self {
            Paddle::Dot => Element::Dot,
            Paddle::Dash => Element::Dash,
        }
    }
}

/// Element cycle state
///
/// The repeat loop is a tagged state plus a deadline in the timer arena,
/// not recursion: the `Cycle` slot holds the next re-check instant while
/// this records which element is being repeated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// No element cycle running
    Idle,
    /// Repeating the given element while its paddle stays latched
    Cycling(Element),
}

impl CycleState {
    /// Returns the element being repeated, if any
    pub const fn element(&self) -> Option<Element> {
        match self {
            CycleState::Idle => None,
            CycleState::Cycling(element) => Some(*element),
        }
    }
}

/// Keyer configuration parameters
#[derive(Copy, Clone, Debug)]
pub struct KeyerConfig {
    /// Keying speed in words per minute
    pub wpm: u32,
    /// Lower speed bound
    pub min_wpm: u32,
    /// Upper speed bound
    pub max_wpm: u32,
}

impl Default for KeyerConfig {
    fn default() -> Self {
        Self {
            wpm: 20,
            min_wpm: 5,
            max_wpm: 40,
        }
    }
}

impl KeyerConfig {
    /// Create a new configuration with validation
    ///
    /// The bounds must be sane; the initial speed is clamped into them
    /// rather than rejected, matching the speed-change behavior.
    pub fn new(wpm: u32, min_wpm: u32, max_wpm: u32) -> Result<Self, &'static str> {
        if min_wpm == 0 {
            return Err("min WPM must be at least 1");
        }
        if min_wpm > max_wpm {
            return Err("min WPM must not exceed max WPM");
        }

        Ok(Self {
            wpm: wpm.clamp(min_wpm, max_wpm),
            min_wpm,
            max_wpm,
        })
    }

    /// Clamp a requested speed into the configured bounds
    pub fn clamp_wpm(&self, requested: u32) -> u32 {
        requested.clamp(self.min_wpm, self.max_wpm)
    }

    /// Base timing unit (PARIS standard: 1200 ms per unit-WPM)
    pub fn unit(&self) -> Duration {
        Duration::from_millis(1200 / self.wpm as u64)
    }

    /// Dot duration (1 unit)
    pub fn dot_duration(&self) -> Duration {
        self.unit()
    }

    /// Dash duration (3 units)
    pub fn dash_duration(&self) -> Duration {
        self.unit() * 3
    }

    /// Keyed duration of an element
    pub fn element_duration(&self, element: Element) -> Duration {
        self.unit() * element.duration_units()
    }

    /// Silence after the last element that completes a character (3 units)
    pub fn char_deadline(&self) -> Duration {
        self.unit() * 3
    }

    /// Silence after the last element that marks a word boundary (7 units)
    pub fn word_deadline(&self) -> Duration {
        self.unit() * 7
    }
}
