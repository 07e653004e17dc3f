//! Auxiliary trigger lines.
//!
//! The array carries a few digital handshake lines for synchronizing with
//! a camera or other external hardware, independent of the LED data path.
//! Output lines are driven, input lines are sampled into a per-line cache.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::Error;

/// The trigger output and input lines of one array, with the cached input
/// states as explicit fields rather than ambient globals.
pub struct TriggerLines<O, I, const NO: usize, const NI: usize> {
    outputs: [O; NO],
    inputs: [I; NI],
    input_state: [bool; NI],
}

impl<O, I, const NO: usize, const NI: usize> TriggerLines<O, I, NO, NI>
where
    O: OutputPin,
    I: InputPin,
{
    /// Takes ownership of already-configured pins. Input caches start low.
    pub fn new(outputs: [O; NO], inputs: [I; NI]) -> Self {
        Self {
            outputs,
            inputs,
            input_state: [false; NI],
        }
    }

    /// Number of output trigger lines.
    pub const fn output_count(&self) -> usize {
        NO
    }

    /// Number of input trigger lines.
    pub const fn input_count(&self) -> usize {
        NI
    }

    /// Drives one output line high or low.
    ///
    /// An unmapped `line` is rejected before any pin is touched.
    pub fn set_output<DE>(&mut self, line: usize, state: bool) -> Result<(), Error<DE>> {
        let pin = self
            .outputs
            .get_mut(line)
            .ok_or(Error::InvalidTrigger(line))?;
        pin.set_state(PinState::from(state))
            .map_err(|_| Error::Hardware)
    }

    /// Drives the active level on `line`, busy-waits `delay_us`, then
    /// returns to the idle level. `inverse_polarity` makes low the active
    /// level. Blocks the calling thread for the full pulse width.
    pub fn pulse<DE, DLY: DelayNs>(
        &mut self,
        line: usize,
        delay_us: u32,
        inverse_polarity: bool,
        delay: &mut DLY,
    ) -> Result<(), Error<DE>> {
        let pin = self
            .outputs
            .get_mut(line)
            .ok_or(Error::InvalidTrigger(line))?;

        let (active, idle) = if inverse_polarity {
            (PinState::Low, PinState::High)
        } else {
            (PinState::High, PinState::Low)
        };

        pin.set_state(active).map_err(|_| Error::Hardware)?;
        if delay_us > 0 {
            delay.delay_us(delay_us);
        }
        pin.set_state(idle).map_err(|_| Error::Hardware)
    }

    /// Last sampled state of one input line (see [`poll_inputs`](Self::poll_inputs)).
    pub fn input_state<DE>(&self, line: usize) -> Result<bool, Error<DE>> {
        self.input_state
            .get(line)
            .copied()
            .ok_or(Error::InvalidTrigger(line))
    }

    /// Samples every input line into the cache.
    pub fn poll_inputs<DE>(&mut self) -> Result<(), Error<DE>> {
        for (pin, state) in self.inputs.iter_mut().zip(self.input_state.iter_mut()) {
            *state = pin.is_high().map_err(|_| Error::Hardware)?;
        }
        Ok(())
    }

    /// Forces all output lines to their idle (low) level. Used during
    /// device bring-up.
    pub(crate) fn drive_all_low<DE>(&mut self) -> Result<(), Error<DE>> {
        for pin in self.outputs.iter_mut() {
            pin.set_low().map_err(|_| Error::Hardware)?;
        }
        Ok(())
    }

    /// Releases the owned pins.
    pub fn release(self) -> ([O; NO], [I; NI]) {
        (self.outputs, self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    type TestError = Error<()>;

    #[test]
    fn test_set_output() {
        let out0 = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let out1 = PinMock::new(&[]);

        let mut triggers: TriggerLines<_, PinMock, 2, 0> = TriggerLines::new([out0, out1], []);

        assert_eq!(triggers.set_output::<()>(0, true), Ok(()));
        assert_eq!(triggers.set_output::<()>(0, false), Ok(()));

        let (mut outputs, _) = triggers.release();
        for pin in outputs.iter_mut() {
            pin.done();
        }
    }

    #[test]
    fn test_set_output_invalid_line() {
        let out = PinMock::new(&[]);
        let mut triggers: TriggerLines<_, PinMock, 1, 0> = TriggerLines::new([out], []);

        assert_eq!(
            triggers.set_output::<()>(1, true),
            Err(TestError::InvalidTrigger(1))
        );

        let (mut outputs, _) = triggers.release();
        outputs[0].done();
    }

    #[test]
    fn test_pulse() {
        let out = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let mut delay = NoopDelay::new();

        let mut triggers: TriggerLines<_, PinMock, 1, 0> = TriggerLines::new([out], []);
        assert_eq!(triggers.pulse::<(), _>(0, 100, false, &mut delay), Ok(()));

        let (mut outputs, _) = triggers.release();
        outputs[0].done();
    }

    #[test]
    fn test_pulse_inverse_polarity() {
        let out = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut delay = NoopDelay::new();

        let mut triggers: TriggerLines<_, PinMock, 1, 0> = TriggerLines::new([out], []);
        assert_eq!(triggers.pulse::<(), _>(0, 0, true, &mut delay), Ok(()));

        let (mut outputs, _) = triggers.release();
        outputs[0].done();
    }

    #[test]
    fn test_pulse_invalid_line_touches_no_pin() {
        let out = PinMock::new(&[]);
        let mut delay = NoopDelay::new();

        let mut triggers: TriggerLines<_, PinMock, 1, 0> = TriggerLines::new([out], []);
        assert_eq!(
            triggers.pulse::<(), _>(3, 100, false, &mut delay),
            Err(TestError::InvalidTrigger(3))
        );

        let (mut outputs, _) = triggers.release();
        outputs[0].done();
    }

    #[test]
    fn test_poll_and_read_inputs() {
        let in0 = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let in1 = PinMock::new(&[PinTransaction::get(PinState::Low)]);

        let mut triggers: TriggerLines<PinMock, _, 0, 2> = TriggerLines::new([], [in0, in1]);

        // cache starts low before the first poll
        assert_eq!(triggers.input_state::<()>(0), Ok(false));

        triggers.poll_inputs::<()>().unwrap();
        assert_eq!(triggers.input_state::<()>(0), Ok(true));
        assert_eq!(triggers.input_state::<()>(1), Ok(false));
        assert_eq!(
            triggers.input_state::<()>(2),
            Err(TestError::InvalidTrigger(2))
        );

        let (_, mut inputs) = triggers.release();
        for pin in inputs.iter_mut() {
            pin.done();
        }
    }
}
