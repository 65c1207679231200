//! Cancellable deadline arena for the keyer's three timer kinds

use crate::hal::Instant;

/// The keyer's deferred-callback kinds
///
/// At most one deadline per kind is outstanding at a time; arming a kind
/// replaces whatever was pending for it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerKind {
    /// Character-complete deadline (drains and decodes the symbol buffer)
    Character,
    /// Word-boundary deadline
    Word,
    /// Element cycle re-check (auto-repeat while a paddle stays latched)
    Cycle,
}

const KIND_COUNT: usize = 3;

/// Fixed arena of cancellable deadlines, one slot per [`TimerKind`]
///
/// Slot order doubles as the tie-break when two deadlines coincide; with the
/// standard unit ratios they never do, but the order matches arm order inside
/// an element cycle (character and word before the next cycle re-check).
#[derive(Debug, Default)]
pub struct TimerSlots {
    deadlines: [Option<Instant>; KIND_COUNT],
}

impl TimerSlots {
    pub const fn new() -> Self {
        Self {
            deadlines: [None; KIND_COUNT],
        }
    }

    /// Arm a deadline, replacing any pending one of the same kind
    pub fn arm(&mut self, kind: TimerKind, at: Instant) {
        self.deadlines[kind as usize] = Some(at);
    }

    /// Cancel a kind; cancelling an idle or already-fired kind is a no-op
    pub fn cancel(&mut self, kind: TimerKind) {
        self.deadlines[kind as usize] = None;
    }

    /// Cancel every pending deadline
    pub fn cancel_all(&mut self) {
        self.deadlines = [None; KIND_COUNT];
    }

    /// Whether a deadline of this kind is outstanding
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.deadlines[kind as usize].is_some()
    }

    /// Earliest pending deadline, for drivers that sleep between events
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().copied().min()
    }

    /// Remove and return the earliest deadline due at or before `now`
    ///
    /// Callers drain in a loop so expiries fire in timestamp order even when
    /// several kinds fall due within one poll.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerKind, Instant)> {
        const KINDS: [TimerKind; KIND_COUNT] =
            [TimerKind::Character, TimerKind::Word, TimerKind::Cycle];

        let mut due: Option<(TimerKind, Instant)> = None;
        for kind in KINDS {
            if let Some(at) = self.deadlines[kind as usize] {
                if at <= now && due.map_or(true, |(_, best)| at < best) {
                    due = Some((kind, at));
                }
            }
        }

        if let Some((kind, _)) = due {
            self.deadlines[kind as usize] = None;
        }
        due
    }
}
