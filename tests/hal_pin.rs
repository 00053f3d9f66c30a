use debounced_input::{Debouncer, HalPin, Polarity};
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};

#[test]
fn full_press_release_through_a_hal_pin() {
    let expectations = [
        PinTransaction::get(PinState::High), // begin() seed
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::Low),
        PinTransaction::get(PinState::Low),
        PinTransaction::get(PinState::High),
    ];
    let mut button = Debouncer::new(HalPin(PinMock::new(&expectations)), Polarity::ActiveLow);

    button.begin().unwrap();
    assert!(button.is_inactive());

    button.update().unwrap();
    assert!(!button.just_activated());

    button.update().unwrap();
    assert!(button.just_activated());

    button.update().unwrap();
    assert!(button.is_active());
    assert!(!button.just_activated());

    button.update().unwrap();
    assert!(button.just_deactivated());
    assert!(button.is_inactive());

    button.release().0.done();
}

#[test]
fn expander_seed_overrides_the_live_read() {
    // pin happens to read low at begin, but the expander says pressed
    let expectations = [PinTransaction::get(PinState::Low)];
    let mut button = Debouncer::new(HalPin(PinMock::new(&expectations)), Polarity::ActiveHigh);

    button.begin_with(true).unwrap();
    assert!(button.is_active());
    assert!(!button.just_activated());

    button.update_with(false);
    assert!(button.just_deactivated());

    button.release().0.done();
}

#[test]
fn read_raw_reports_the_live_level() {
    let expectations = [
        PinTransaction::get(PinState::High), // begin() seed
        PinTransaction::get(PinState::Low),
    ];
    let mut button = Debouncer::new(HalPin(PinMock::new(&expectations)), Polarity::ActiveLow);

    button.begin().unwrap();
    assert!(!button.read_raw().unwrap());
    // tracked state is untouched by the raw read
    assert!(button.current_raw());
    assert!(button.is_inactive());

    button.release().0.done();
}
