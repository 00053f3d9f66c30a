use bitfield::bitfield;

use crate::source::{InputSource, Pull};

bitfield! {
    /// The two raw samples the edge comparison runs on, packed so arrays
    /// of trackers stay small.
    struct Samples(u8);
    current, set_current: 0;
    previous, set_previous: 1;
}

impl Samples {
    fn seeded(level: bool) -> Self {
        let mut s = Samples(0);
        s.seed(level);
        s
    }

    /// Collapse both samples to one level, erasing any pending edge.
    fn seed(&mut self, level: bool) {
        self.set_current(level);
        self.set_previous(level);
    }

    fn shift(&mut self, raw: bool) {
        let c = self.current();
        self.set_previous(c);
        self.set_current(raw);
    }

    fn changed(&self) -> bool {
        self.current() != self.previous()
    }
}

/// Which raw level counts as "active"/"pressed".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Low when pressed (pin idles high through a pull-up). The usual
    /// wiring for a button to ground.
    #[default]
    ActiveLow,
    /// High when pressed (pin idles low).
    ActiveHigh,
}

impl Polarity {
    /// The raw level meaning "active".
    pub fn active_level(self) -> bool {
        matches!(self, Polarity::ActiveHigh)
    }

    /// The pull that parks an unpressed line at the inactive level.
    pub fn idle_pull(self) -> Pull {
        match self {
            Polarity::ActiveLow => Pull::Up,
            Polarity::ActiveHigh => Pull::Down,
        }
    }
}

/// Marker line type for a tracker fed by the caller instead of a pin,
/// e.g. a bit read out of an I/O expander.
pub struct External;

/// Polarity-aware state tracker for one digital input.
///
/// Holds the current and previous raw sample and answers active/inactive
/// plus one-shot edge queries against a fixed polarity. Each update is one
/// discrete time step; the caller owns the polling cadence and any noise
/// filtering. Hardware-only operations exist only when the line type
/// implements [`InputSource`], so there is no misuse path for an
/// externally-driven tracker.
pub struct Debouncer<L> {
    line: L,
    polarity: Polarity,
    samples: Samples,
}

impl<L: InputSource> Debouncer<L> {
    /// Tracker sampling a hardware line. Starts inactive; call
    /// [`begin`](Self::begin) before the first update.
    pub fn new(line: L, polarity: Polarity) -> Self {
        Debouncer {
            line,
            polarity,
            samples: Samples::seeded(!polarity.active_level()),
        }
    }

    /// Configure the line as an input pulled toward the inactive level,
    /// then seed both samples from one live read so the first update
    /// cannot report a spurious edge.
    pub fn begin(&mut self) -> Result<(), L::Error> {
        self.line.configure(self.polarity.idle_pull())?;
        let level = self.line.read_level()?;
        self.samples.seed(level);
        #[cfg(feature = "defmt")]
        defmt::trace!("input line seeded at level {=bool}", level);
        Ok(())
    }

    /// Like [`begin`](Self::begin), but the first true state comes from
    /// the caller (e.g. an expander readout) instead of the live read.
    pub fn begin_with(&mut self, seed: bool) -> Result<(), L::Error> {
        self.begin()?;
        self.samples.seed(seed);
        Ok(())
    }

    /// Instantaneous live sample, not polarity-adjusted. Does not touch
    /// the tracked state.
    pub fn read_raw(&mut self) -> Result<bool, L::Error> {
        self.line.read_level()
    }

    /// Advance one step: shift the previous sample out and take a fresh
    /// live sample.
    pub fn update(&mut self) -> Result<(), L::Error> {
        let raw = self.line.read_level()?;
        self.samples.shift(raw);
        Ok(())
    }

    /// Consume the tracker and hand the line back.
    pub fn release(self) -> L {
        self.line
    }
}

impl Debouncer<External> {
    /// Tracker with no physical line; feed it with
    /// [`update_with`](Self::update_with). Starts inactive.
    pub fn external(polarity: Polarity) -> Self {
        Debouncer {
            line: External,
            polarity,
            samples: Samples::seeded(!polarity.active_level()),
        }
    }
}

impl<L> Debouncer<L> {
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Overwrite both samples with `state`, erasing any pending edge.
    /// The externally-driven counterpart of `begin_with`.
    pub fn seed(&mut self, state: bool) {
        self.samples.seed(state);
    }

    /// Advance one step with a caller-supplied raw level, bypassing any
    /// hardware read. Also usable on a hardware tracker to override
    /// sampling for a single cycle.
    pub fn update_with(&mut self, raw: bool) {
        self.samples.shift(raw);
    }

    /// Last stored raw level, not polarity-adjusted.
    pub fn current_raw(&self) -> bool {
        self.samples.current()
    }

    pub fn is_active(&self) -> bool {
        self.samples.current() == self.polarity.active_level()
    }

    pub fn is_inactive(&self) -> bool {
        !self.is_active()
    }

    /// True only on the exact step where the transition into the active
    /// level was observed; false again after the next update even if the
    /// level holds.
    pub fn just_activated(&self) -> bool {
        self.samples.changed() && self.is_active()
    }

    /// True only on the exact step where the transition into the inactive
    /// level was observed.
    pub fn just_deactivated(&self) -> bool {
        self.samples.changed() && self.is_inactive()
    }
}
