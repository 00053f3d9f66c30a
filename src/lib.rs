//! Polarity-aware state tracking with edge detection for a single digital
//! input, e.g. a mechanical button.
//!
//! The tracker keeps the current and previous raw sample of one line and
//! answers pressed/released and one-shot press/release edge queries against
//! a configurable active polarity. It performs no timing-based filtering;
//! each update is one discrete step at whatever cadence the caller polls.
//!
//! A line is either a hardware input (anything implementing [`InputSource`],
//! including any `embedded-hal` pin via [`HalPin`]) or [`External`], where
//! the caller supplies the raw level each cycle, e.g. from an I/O expander:
//!
//! ```
//! use debounced_input::{Debouncer, Polarity};
//!
//! let mut button = Debouncer::external(Polarity::ActiveLow);
//! button.seed(true); // idle high
//! button.update_with(false);
//! assert!(button.just_activated());
//! button.update_with(false);
//! assert!(button.is_active() && !button.just_activated());
//! ```

#![cfg_attr(not(test), no_std)]

mod debouncer;
mod source;

pub use debouncer::{Debouncer, External, Polarity};
pub use source::{HalPin, InputSource, Pull};
