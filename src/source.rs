use embedded_hal::digital::InputPin;

/// Pull resistor requested while configuring a line as an input.
///
/// A source without pull-down support may treat `Down` as a plain
/// floating input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    Up,
    Down,
}

/// One digital input line, as seen by the tracker.
///
/// Two primitives: configure the line as an input with a pull, and sample
/// its instantaneous level. HAL pins get this through [`HalPin`]; tests
/// implement it with a scripted fake.
pub trait InputSource {
    type Error;

    fn configure(&mut self, pull: Pull) -> Result<(), Self::Error>;

    /// Raw level right now, not polarity-adjusted.
    fn read_level(&mut self) -> Result<bool, Self::Error>;
}

/// Adapter for any `embedded-hal` input pin.
///
/// `configure` is a no-op: embedded-hal 1.0 has no pull control, so set
/// the pull when constructing the pin in your HAL.
pub struct HalPin<P>(pub P);

impl<P: InputPin> InputSource for HalPin<P> {
    type Error = P::Error;

    fn configure(&mut self, _pull: Pull) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_level(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }
}
