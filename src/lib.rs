//! Addressing and lifecycle layer for the sci-wing LED array.
//!
//! The panel carries 793 individually addressable RGB LEDs wired to a chain
//! of 52 TLC5955 constant-current drivers on one serial bus. This crate maps
//! logical LED indices to driver channels through a compiled-in position
//! table, normalizes brightness values to the chips' native grayscale width,
//! sequences device bring-up in the order the chips require, and drives the
//! auxiliary trigger lines. The chip shift protocol itself stays behind the
//! [`driver::Tlc5955`] trait; pins, the grayscale clock and delays are
//! `embedded-hal` traits.
//!
//! Nothing is visible on the panel until [`LedArray::update`] latches the
//! staged values onto the outputs.

#![cfg_attr(not(test), no_std)]

pub mod codec;
mod configuration;
pub mod driver;
pub mod position;
mod sciwing;
pub mod trigger;

pub use configuration::ConfigBuilder;
pub use sciwing::SciWing;

use configuration::Configuration;
use driver::{Tlc5955, CHANNELS_PER_CHIP};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use position::LedPosition;
use trigger::TriggerLines;

/// Error enum for the array layer.
///
/// Addressing and unsupported-operation errors are reported before any
/// hardware call is made; the rejected operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<DE> {
    /// LED index outside the position table, or an unpopulated slot
    InvalidLed(i16),

    /// Channel number outside the driver cluster
    InvalidChannel(i16),

    /// Trigger line index with no mapped pin
    InvalidTrigger(usize),

    /// Capability this hardware variant does not implement
    Unsupported(&'static str),

    /// The driver-chip bus reported an error
    Driver(DE),

    /// A pin or clock operation failed
    Hardware,
}

/// Color sub-channels of one LED, in wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Position of this color in per-channel value triples.
    pub const fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}

/// Selects which color sub-channels a write applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSelect {
    /// Write the same value to red, green and blue
    All,
    /// Write one color, leaving the siblings' staged values unchanged
    Single(ColorChannel),
}

mod seal {
    pub trait Sealed {}
}

/// Marker trait describing one hardware build of the array.
///
/// All values are fixed descriptors of the physical panel; none are
/// re-derived or mutated at runtime.
pub trait ArrayVariant: seal::Sealed {
    /// Device name reported to hosts.
    const NAME: &'static str;

    /// Hardware revision of this build.
    const HARDWARE_REVISION: &'static str;

    /// Number of entries in the position table.
    const LED_COUNT: u16;

    /// LED index closest to the optical axis.
    const CENTER_LED: u16;

    /// Native grayscale width of the driver chips.
    const BIT_DEPTH: u32;

    /// Number of color sub-channels per LED.
    const COLOR_CHANNEL_COUNT: usize = 3;

    /// Short names of the color channels, in wiring order.
    const COLOR_CHANNEL_NAMES: [char; 3] = ['r', 'g', 'b'];

    /// Center wavelength of each color channel, in µm.
    const COLOR_CHANNEL_WAVELENGTHS_UM: [f32; 3];

    /// Largest illumination numerical aperture the panel reaches.
    const MAX_NA: f32;

    /// Number of driver chips on the bus.
    const CHIP_COUNT: u16;

    /// Total addressable channels across the cluster.
    const CHANNEL_COUNT: u16 = Self::CHIP_COUNT * CHANNELS_PER_CHIP;

    /// Output trigger lines fitted on this build.
    const TRIGGER_OUTPUT_COUNT: usize;

    /// Input trigger lines fitted on this build.
    const TRIGGER_INPUT_COUNT: usize;

    /// Whether the hardware has a fast bitwise update path.
    const SUPPORTS_FAST_SEQUENCE: bool = false;

    /// Default distance between array and sample plane, in mm.
    const DEFAULT_ARRAY_DISTANCE_Z_MM: f32;

    /// Full position table, indexed by LED number.
    fn positions() -> &'static [LedPosition];
}

/// Driver for one LED array build.
///
/// Owns the chip-cluster driver, the shared grayscale clock, the trigger
/// lines and the pulse delay. [`new`](LedArray::new) returns the array in
/// the Ready state; construction fails outright if any bus or pin step of
/// the bring-up sequence fails, and there is no partial-success state.
///
/// All operations take `&mut self`: the staged channel buffer has exactly
/// one writer and no internal locking.
pub struct LedArray<DV, D, GS, O, I, DEL, const NO: usize, const NI: usize> {
    driver: D,
    gsclk: GS,
    triggers: TriggerLines<O, I, NO, NI>,
    delay: DEL,
    configuration: Configuration,
    _variant: core::marker::PhantomData<DV>,
}

impl<DV, D, GS, O, I, DEL, const NO: usize, const NI: usize> LedArray<DV, D, GS, O, I, DEL, NO, NI>
where
    DV: ArrayVariant,
    D: Tlc5955,
    GS: SetDutyCycle,
    O: OutputPin,
    I: InputPin,
    DEL: DelayNs,
{
    /// Brings the device up and returns it in the Ready state.
    ///
    /// Runs the full initialization sequence: grayscale clock at 50% duty,
    /// bus init, dot correction, current limits, function-control latch,
    /// brightness trim, control commit, pin order, then an all-off frame
    /// and idle trigger outputs.
    pub fn new(
        config: &ConfigBuilder,
        driver: D,
        gsclk: GS,
        trigger_outputs: [O; NO],
        trigger_inputs: [I; NI],
        delay: DEL,
    ) -> Result<Self, Error<D::Error>> {
        let mut array = Self {
            driver,
            gsclk,
            triggers: TriggerLines::new(trigger_outputs, trigger_inputs),
            delay,
            configuration: config.configuration.clone(),
            _variant: core::marker::PhantomData,
        };
        array.bring_up()?;
        Ok(array)
    }

    fn bring_up(&mut self) -> Result<(), Error<D::Error>> {
        // All three grayscale clocks of each chip share one pin, driven at
        // 50% duty.
        let half_duty = self.gsclk.max_duty_cycle() / 2;
        self.gsclk
            .set_duty_cycle(half_duty)
            .map_err(|_| Error::Hardware)?;

        self.driver.init().map_err(Error::Driver)?;

        // Dot correction and current limits must be latched before any
        // grayscale data; the chips latch garbage otherwise.
        self.driver
            .set_dot_correction(self.configuration.dot_correction);
        let (red, green, blue) = self.configuration.max_current;
        self.driver.set_max_current(red, green, blue);
        self.driver
            .set_function_control(self.configuration.function_control);
        let (red, green, blue) = self.configuration.brightness_current;
        self.driver.set_brightness_current(red, green, blue);
        self.driver.commit_control().map_err(Error::Driver)?;

        let (red, green, blue) = self.configuration.rgb_pin_order;
        self.driver.set_rgb_pin_order(red, green, blue);

        // Start from a defined all-off frame.
        self.clear()?;

        self.triggers.drive_all_low()
    }

    /// Re-runs the full bring-up sequence.
    pub fn reset(&mut self) -> Result<(), Error<D::Error>> {
        self.bring_up()
    }

    /// Latches all staged grayscale values onto the physical outputs
    /// simultaneously. The only operation that changes what the panel shows.
    pub fn update(&mut self) -> Result<(), Error<D::Error>> {
        self.driver.commit().map_err(Error::Driver)
    }

    /// Stages zero everywhere and commits.
    pub fn clear(&mut self) -> Result<(), Error<D::Error>> {
        self.driver.set_all_channels(0);
        self.update()
    }

    /// Stages `value` on the selected colors of one driver channel.
    ///
    /// A single-color write reads the sibling colors from the staged buffer
    /// and rewrites them unchanged, because the driver stages all three
    /// colors of a channel as a unit. Values wider than the variant's bit
    /// depth are clamped to full scale.
    pub fn set_channel(
        &mut self,
        channel: i16,
        color: ColorSelect,
        value: u16,
    ) -> Result<(), Error<D::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("set channel {} color {} value {}", channel, color, value);

        if channel < 0 || channel as u16 >= DV::CHANNEL_COUNT {
            return Err(Error::InvalidChannel(channel));
        }
        self.write_channel(channel as u16, color, value);
        Ok(())
    }

    /// Stages `value` on the selected colors of one LED, resolved through
    /// the position table.
    ///
    /// A negative `led` broadcasts the value to every populated LED in one
    /// pass over the table; unpopulated slots are skipped. A direct index
    /// that is out of range or unpopulated is rejected without any driver
    /// call.
    pub fn set_led(
        &mut self,
        led: i16,
        color: ColorSelect,
        value: u16,
    ) -> Result<(), Error<D::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("set led {} color {} value {}", led, color, value);

        if led < 0 {
            for led_position in DV::positions() {
                if let Some(channel) = led_position.channel() {
                    self.write_channel(channel, color, value);
                }
            }
            return Ok(());
        }

        let channel = DV::positions()
            .get(led as usize)
            .and_then(LedPosition::channel)
            .ok_or(Error::InvalidLed(led))?;
        self.write_channel(channel, color, value);
        Ok(())
    }

    /// 8-bit variant of [`set_led`](Self::set_led); the value is rescaled
    /// to the native grayscale width.
    pub fn set_led_u8(
        &mut self,
        led: i16,
        color: ColorSelect,
        value: u8,
    ) -> Result<(), Error<D::Error>> {
        self.set_led(led, color, codec::from_u8(value, DV::BIT_DEPTH))
    }

    /// Boolean variant of [`set_led`](Self::set_led); `true` is full scale.
    pub fn set_led_bool(
        &mut self,
        led: i16,
        color: ColorSelect,
        value: bool,
    ) -> Result<(), Error<D::Error>> {
        self.set_led(led, color, codec::from_bool(value, DV::BIT_DEPTH))
    }

    /// 8-bit variant of [`set_channel`](Self::set_channel).
    pub fn set_channel_u8(
        &mut self,
        channel: i16,
        color: ColorSelect,
        value: u8,
    ) -> Result<(), Error<D::Error>> {
        self.set_channel(channel, color, codec::from_u8(value, DV::BIT_DEPTH))
    }

    /// Boolean variant of [`set_channel`](Self::set_channel).
    pub fn set_channel_bool(
        &mut self,
        channel: i16,
        color: ColorSelect,
        value: bool,
    ) -> Result<(), Error<D::Error>> {
        self.set_channel(channel, color, codec::from_bool(value, DV::BIT_DEPTH))
    }

    /// Fast bitwise LED write, on variants that have the fast update path.
    pub fn set_led_fast(
        &mut self,
        led: i16,
        color: ColorSelect,
        value: bool,
    ) -> Result<(), Error<D::Error>> {
        if !DV::SUPPORTS_FAST_SEQUENCE {
            return Err(Error::Unsupported("set_led_fast"));
        }
        self.set_led(led, color, codec::from_bool(value, DV::BIT_DEPTH))
    }

    /// Staged grayscale value of one color of one LED. Reads take a direct
    /// index only; there is no broadcast form.
    pub fn value(&self, led: i16, color: ColorChannel) -> Result<u16, Error<D::Error>> {
        if led < 0 {
            return Err(Error::InvalidLed(led));
        }
        let channel = DV::positions()
            .get(led as usize)
            .and_then(LedPosition::channel)
            .ok_or(Error::InvalidLed(led))?;
        Ok(self.driver.channel_value(channel, color))
    }

    /// Fixes the output-pin position of one color of one LED.
    pub fn set_pin_order(
        &mut self,
        led: i16,
        color: ColorChannel,
        pin_position: u8,
    ) -> Result<(), Error<D::Error>> {
        if led < 0 {
            return Err(Error::InvalidLed(led));
        }
        let channel = DV::positions()
            .get(led as usize)
            .and_then(LedPosition::channel)
            .ok_or(Error::InvalidLed(led))?;
        self.driver.set_pin_order(channel, color, pin_position);
        Ok(())
    }

    fn write_channel(&mut self, channel: u16, color: ColorSelect, value: u16) {
        let value = codec::clamp(value, DV::BIT_DEPTH);
        match color {
            ColorSelect::All => self.driver.set_channel(channel, value, value, value),
            ColorSelect::Single(ColorChannel::Red) => {
                let green = self.driver.channel_value(channel, ColorChannel::Green);
                let blue = self.driver.channel_value(channel, ColorChannel::Blue);
                self.driver.set_channel(channel, value, green, blue);
            }
            ColorSelect::Single(ColorChannel::Green) => {
                let red = self.driver.channel_value(channel, ColorChannel::Red);
                let blue = self.driver.channel_value(channel, ColorChannel::Blue);
                self.driver.set_channel(channel, red, value, blue);
            }
            ColorSelect::Single(ColorChannel::Blue) => {
                let red = self.driver.channel_value(channel, ColorChannel::Red);
                let green = self.driver.channel_value(channel, ColorChannel::Green);
                self.driver.set_channel(channel, red, green, value);
            }
        }
    }

    /// Drives one output trigger line high or low.
    pub fn set_output_trigger(&mut self, line: usize, state: bool) -> Result<(), Error<D::Error>> {
        self.triggers.set_output(line, state)
    }

    /// Pulses one output trigger line, busy-waiting `delay_us` between the
    /// edges. Blocks the control thread for the full pulse width.
    pub fn send_trigger_pulse(
        &mut self,
        line: usize,
        delay_us: u32,
        inverse_polarity: bool,
    ) -> Result<(), Error<D::Error>> {
        self.triggers
            .pulse(line, delay_us, inverse_polarity, &mut self.delay)
    }

    /// Last sampled state of one input trigger line.
    pub fn input_trigger_state(&self, line: usize) -> Result<bool, Error<D::Error>> {
        self.triggers.input_state(line)
    }

    /// Samples all input trigger lines into the cache.
    pub fn poll_input_triggers(&mut self) -> Result<(), Error<D::Error>> {
        self.triggers.poll_inputs()
    }

    /// Device name of this build.
    pub const fn device_name(&self) -> &'static str {
        DV::NAME
    }

    /// Hardware revision of this build.
    pub const fn hardware_revision(&self) -> &'static str {
        DV::HARDWARE_REVISION
    }

    /// Number of LEDs in the position table.
    pub const fn led_count(&self) -> u16 {
        DV::LED_COUNT
    }

    /// LED index closest to the optical axis.
    pub const fn center_led(&self) -> u16 {
        DV::CENTER_LED
    }

    /// Native grayscale width of the driver chips.
    pub const fn bit_depth(&self) -> u32 {
        DV::BIT_DEPTH
    }

    /// Number of color sub-channels per LED.
    pub const fn color_channel_count(&self) -> usize {
        DV::COLOR_CHANNEL_COUNT
    }

    /// Total addressable channels across the chip cluster.
    pub const fn channel_count(&self) -> u16 {
        DV::CHANNEL_COUNT
    }

    /// Output trigger lines fitted.
    pub const fn trigger_output_count(&self) -> usize {
        NO
    }

    /// Input trigger lines fitted.
    pub const fn trigger_input_count(&self) -> usize {
        NI
    }

    /// Largest illumination numerical aperture the panel reaches.
    pub const fn max_na(&self) -> f32 {
        DV::MAX_NA
    }

    /// Position record of one LED, if the index is in range.
    pub fn position(&self, led: u16) -> Option<&'static LedPosition> {
        DV::positions().get(led as usize)
    }

    /// Destroys the array and releases the owned chip-cluster driver and
    /// trigger lines.
    pub fn release(self) -> (D, TriggerLines<O, I, NO, NI>) {
        (self.driver, self.triggers)
    }

    #[cfg(test)]
    pub(crate) fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driver::mock::{Command, MockTlc5955};
    use driver::FunctionControl;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    /// Grayscale-clock stand-in recording the last programmed duty cycle
    /// through a handle that outlives the array.
    struct GsClkMock {
        duty: std::rc::Rc<core::cell::Cell<Option<u16>>>,
    }

    impl embedded_hal::pwm::ErrorType for GsClkMock {
        type Error = core::convert::Infallible;
    }

    impl SetDutyCycle for GsClkMock {
        fn max_duty_cycle(&self) -> u16 {
            100
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty.set(Some(duty));
            Ok(())
        }
    }

    type SciWingArray = LedArray<SciWing, MockTlc5955, GsClkMock, PinMock, PinMock, NoopDelay, 2, 2>;

    /// Sparse 12-bit test build on a single chip: LED 1 is unpopulated.
    struct Sparse;

    impl crate::seal::Sealed for Sparse {}

    impl ArrayVariant for Sparse {
        const NAME: &'static str = "sparse-test";
        const HARDWARE_REVISION: &'static str = "0.0";
        const LED_COUNT: u16 = 4;
        const CENTER_LED: u16 = 0;
        const BIT_DEPTH: u32 = 12;
        const COLOR_CHANNEL_WAVELENGTHS_UM: [f32; 3] = [0.48, 0.525, 0.625];
        const MAX_NA: f32 = 1.0;
        const CHIP_COUNT: u16 = 1;
        const TRIGGER_OUTPUT_COUNT: usize = 0;
        const TRIGGER_INPUT_COUNT: usize = 0;
        const DEFAULT_ARRAY_DISTANCE_Z_MM: f32 = 50.0;

        fn positions() -> &'static [LedPosition] {
            static POSITIONS: [LedPosition; 4] = [
                LedPosition::new(0, 0, 0, 0, 6500),
                LedPosition::new(1, LedPosition::UNPOPULATED, 417, 0, 6500),
                LedPosition::new(2, 5, -417, 0, 6500),
                LedPosition::new(3, 15, 0, 417, 6500),
            ];
            &POSITIONS
        }
    }

    type SparseArray = LedArray<Sparse, MockTlc5955, GsClkMock, PinMock, PinMock, NoopDelay, 0, 0>;

    fn gsclk_mock() -> GsClkMock {
        GsClkMock {
            duty: std::rc::Rc::new(core::cell::Cell::new(None)),
        }
    }

    fn new_sci_wing() -> SciWingArray {
        let driver = MockTlc5955::new(SciWing::CHANNEL_COUNT);
        let outputs = [
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
        ];
        let inputs = [PinMock::new(&[]), PinMock::new(&[])];

        LedArray::new(
            &ConfigBuilder::new(),
            driver,
            gsclk_mock(),
            outputs,
            inputs,
            NoopDelay::new(),
        )
        .unwrap()
    }

    fn new_sparse() -> SparseArray {
        let driver = MockTlc5955::new(Sparse::CHANNEL_COUNT);

        LedArray::new(
            &ConfigBuilder::new(),
            driver,
            gsclk_mock(),
            [],
            [],
            NoopDelay::new(),
        )
        .unwrap()
    }

    /// Releases the array and runs the expectation check on every trigger
    /// pin mock.
    fn finish<DV, const NO: usize, const NI: usize>(
        array: LedArray<DV, MockTlc5955, GsClkMock, PinMock, PinMock, NoopDelay, NO, NI>,
    ) -> MockTlc5955
    where
        DV: ArrayVariant,
    {
        let (driver, triggers) = array.release();
        let (mut outputs, mut inputs) = triggers.release();
        for pin in outputs.iter_mut().chain(inputs.iter_mut()) {
            pin.done();
        }
        driver
    }

    #[test]
    fn test_bring_up_command_order() {
        let mut array = new_sci_wing();

        assert_eq!(
            array.driver_mut().commands(),
            &[
                Command::Init,
                Command::SetDotCorrection(127),
                Command::SetMaxCurrent(3, 3, 3),
                Command::SetFunctionControl(FunctionControl {
                    display_repeat: true,
                    timing_reset: true,
                    auto_refresh: false,
                    phase_shifted_pwm: true,
                    lsb_delay: true,
                }),
                Command::SetBrightnessCurrent(127, 127, 127),
                Command::CommitControl,
                Command::SetRgbPinOrder(0, 1, 2),
                Command::SetAllChannels(0),
                Command::Commit,
            ]
        );

        finish(array);
    }

    #[test]
    fn test_bring_up_programs_half_duty_gsclk() {
        let gsclk = gsclk_mock();
        let duty = gsclk.duty.clone();
        let outputs = [
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
        ];
        let inputs = [PinMock::new(&[]), PinMock::new(&[])];

        let array: SciWingArray = LedArray::new(
            &ConfigBuilder::new(),
            MockTlc5955::new(SciWing::CHANNEL_COUNT),
            gsclk,
            outputs,
            inputs,
            NoopDelay::new(),
        )
        .unwrap();

        assert_eq!(duty.get(), Some(50));
        finish(array);
    }

    #[test]
    fn test_bring_up_ends_all_off() {
        let mut array = new_sci_wing();
        array.update().unwrap();

        let driver = finish(array);
        for channel in 0..SciWing::CHANNEL_COUNT {
            assert_eq!(driver.staged(channel), [0, 0, 0]);
        }
    }

    #[test]
    fn test_descriptor_constants() {
        let array = new_sci_wing();

        assert_eq!(array.device_name(), "sci-wing");
        assert_eq!(array.hardware_revision(), "1.0");
        assert_eq!(array.led_count(), 793);
        assert_eq!(array.bit_depth(), 16);
        assert_eq!(array.color_channel_count(), 3);
        assert_eq!(array.channel_count(), 832);
        assert_eq!(array.trigger_output_count(), 2);
        assert_eq!(array.trigger_input_count(), 2);
        assert_eq!(array.position(0).unwrap().channel(), Some(90));
        assert!(array.position(793).is_none());

        finish(array);
    }

    #[test]
    fn test_single_color_write_preserves_siblings() {
        let mut array = new_sci_wing();

        array.set_channel(5, ColorSelect::All, 1000).unwrap();
        array
            .set_channel(5, ColorSelect::Single(ColorChannel::Green), 42)
            .unwrap();

        let driver = finish(array);
        assert_eq!(driver.staged(5), [1000, 42, 1000]);
    }

    #[test]
    fn test_worked_example_led_zero_full_red() {
        let mut array = new_sci_wing();

        array
            .set_led(0, ColorSelect::Single(ColorChannel::Red), u16::MAX)
            .unwrap();
        array.update().unwrap();

        assert_eq!(array.value(0, ColorChannel::Red), Ok(u16::MAX));
        assert_eq!(array.value(0, ColorChannel::Green), Ok(0));
        assert_eq!(array.value(0, ColorChannel::Blue), Ok(0));

        finish(array);
    }

    #[test]
    fn test_broadcast_covers_every_populated_channel_once() {
        let mut array = new_sci_wing();
        array.driver_mut().clear_commands();

        array.set_led(-1, ColorSelect::All, 7).unwrap();

        let driver = finish(array);
        assert_eq!(driver.commands().len(), SciWing::LED_COUNT as usize);
        for led_position in SciWing::positions() {
            let channel = led_position.channel().unwrap();
            assert_eq!(driver.staged(channel), [7, 7, 7]);
        }
    }

    #[test]
    fn test_broadcast_clear_skips_unpopulated_channels() {
        let mut array = new_sparse();

        // stage something on a channel with no LED behind it
        array.set_channel(9, ColorSelect::All, 123).unwrap();
        array.set_led(-1, ColorSelect::All, 321).unwrap();
        array.set_led(-1, ColorSelect::All, 0).unwrap();
        array.update().unwrap();

        let driver = finish(array);
        for led_position in Sparse::positions() {
            if let Some(channel) = led_position.channel() {
                assert_eq!(driver.staged(channel), [0, 0, 0]);
            }
        }
        assert_eq!(driver.staged(9), [123, 123, 123]);
    }

    #[test]
    fn test_invalid_led_index_is_a_no_op() {
        let mut array = new_sci_wing();
        array.driver_mut().clear_commands();

        assert_eq!(
            array.set_led(793, ColorSelect::All, 1),
            Err(Error::InvalidLed(793))
        );
        assert_eq!(
            array.value(793, ColorChannel::Red),
            Err(Error::InvalidLed(793))
        );
        assert_eq!(
            array.value(-1, ColorChannel::Red),
            Err(Error::InvalidLed(-1))
        );

        assert!(array.driver_mut().commands().is_empty());
        finish(array);
    }

    #[test]
    fn test_unpopulated_led_is_a_no_op() {
        let mut array = new_sparse();
        array.driver_mut().clear_commands();

        assert_eq!(
            array.set_led(1, ColorSelect::All, 1),
            Err(Error::InvalidLed(1))
        );
        assert_eq!(array.value(1, ColorChannel::Red), Err(Error::InvalidLed(1)));

        assert!(array.driver_mut().commands().is_empty());
        finish(array);
    }

    #[test]
    fn test_invalid_channel_is_a_no_op() {
        let mut array = new_sparse();
        array.driver_mut().clear_commands();

        assert_eq!(
            array.set_channel(-1, ColorSelect::All, 1),
            Err(Error::InvalidChannel(-1))
        );
        assert_eq!(
            array.set_channel(16, ColorSelect::All, 1),
            Err(Error::InvalidChannel(16))
        );

        assert!(array.driver_mut().commands().is_empty());
        finish(array);
    }

    #[test]
    fn test_set_led_fast_unsupported() {
        let mut array = new_sci_wing();
        array.driver_mut().clear_commands();

        assert_eq!(
            array.set_led_fast(0, ColorSelect::All, true),
            Err(Error::Unsupported("set_led_fast"))
        );
        assert!(array.driver_mut().commands().is_empty());
        finish(array);
    }

    #[test]
    fn test_u8_and_bool_writes_rescale_to_native_width() {
        let mut array = new_sci_wing();

        array.set_channel_u8(0, ColorSelect::All, u8::MAX).unwrap();
        array
            .set_led_bool(2, ColorSelect::Single(ColorChannel::Blue), true)
            .unwrap();

        let driver = finish(array);
        assert_eq!(driver.staged(0), [u16::MAX; 3]);
        // LED 2 is wired to channel 108
        assert_eq!(driver.staged(108), [0, 0, u16::MAX]);
    }

    #[test]
    fn test_values_clamped_to_variant_bit_depth() {
        let mut array = new_sparse();

        array.set_channel(0, ColorSelect::All, u16::MAX).unwrap();

        let driver = finish(array);
        assert_eq!(driver.staged(0), [4095; 3]);
    }

    #[test]
    fn test_clear_stages_zero_and_commits() {
        let mut array = new_sci_wing();

        array.set_led(-1, ColorSelect::All, 99).unwrap();
        array.driver_mut().clear_commands();
        array.clear().unwrap();

        let driver = finish(array);
        assert_eq!(
            driver.commands(),
            &[Command::SetAllChannels(0), Command::Commit]
        );
    }

    #[test]
    fn test_reset_repeats_bring_up() {
        let outputs = [
            PinMock::new(&[
                PinTransaction::set(PinState::Low),
                PinTransaction::set(PinState::Low),
            ]),
            PinMock::new(&[
                PinTransaction::set(PinState::Low),
                PinTransaction::set(PinState::Low),
            ]),
        ];
        let inputs = [PinMock::new(&[]), PinMock::new(&[])];
        let mut array: SciWingArray = LedArray::new(
            &ConfigBuilder::new(),
            MockTlc5955::new(SciWing::CHANNEL_COUNT),
            gsclk_mock(),
            outputs,
            inputs,
            NoopDelay::new(),
        )
        .unwrap();

        let bring_up_len = array.driver_mut().commands().len();
        array.driver_mut().clear_commands();

        array.reset().unwrap();
        assert_eq!(array.driver_mut().commands().len(), bring_up_len);
        assert_eq!(array.driver_mut().commands()[0], Command::Init);

        finish(array);
    }

    #[test]
    fn test_output_trigger_through_array() {
        let outputs = [
            PinMock::new(&[
                PinTransaction::set(PinState::Low),
                PinTransaction::set(PinState::High),
            ]),
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
        ];
        let inputs = [PinMock::new(&[]), PinMock::new(&[])];
        let mut array: SciWingArray = LedArray::new(
            &ConfigBuilder::new(),
            MockTlc5955::new(SciWing::CHANNEL_COUNT),
            gsclk_mock(),
            outputs,
            inputs,
            NoopDelay::new(),
        )
        .unwrap();

        array.set_output_trigger(0, true).unwrap();
        assert_eq!(
            array.set_output_trigger(5, true),
            Err(Error::InvalidTrigger(5))
        );

        finish(array);
    }

    #[test]
    fn test_input_trigger_through_array() {
        let outputs = [
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
            PinMock::new(&[PinTransaction::set(PinState::Low)]),
        ];
        let inputs = [
            PinMock::new(&[PinTransaction::get(PinState::High)]),
            PinMock::new(&[PinTransaction::get(PinState::Low)]),
        ];
        let mut array: SciWingArray = LedArray::new(
            &ConfigBuilder::new(),
            MockTlc5955::new(SciWing::CHANNEL_COUNT),
            gsclk_mock(),
            outputs,
            inputs,
            NoopDelay::new(),
        )
        .unwrap();

        array.poll_input_triggers().unwrap();
        assert_eq!(array.input_trigger_state(0), Ok(true));
        assert_eq!(array.input_trigger_state(1), Ok(false));
        assert_eq!(array.input_trigger_state(2), Err(Error::InvalidTrigger(2)));

        finish(array);
    }
}
