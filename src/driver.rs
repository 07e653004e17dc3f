//! TLC5955 driver-cluster abstraction.
//!
//! The array chains its TLC5955 chips on one serial bus and latches them as
//! a unit. This crate only routes channel addresses and values; the
//! shift-register protocol lives behind [`Tlc5955`], which the port to a
//! given board implements on top of its SPI peripheral.

use crate::ColorChannel;

/// Output channels per TLC5955 chip.
pub const CHANNELS_PER_CHIP: u16 = 16;

/// Function control latch flags, in datasheet order:
/// DSPRPT, TMGRST, RFRESH, ESPWM, LSDVLT.
///
/// These are hardware-variant constants applied once during bring-up, not
/// per-frame tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FunctionControl {
    /// Auto display repeat
    pub display_repeat: bool,
    /// Reset the grayscale counter on a timing error
    pub timing_reset: bool,
    /// Auto data refresh
    pub auto_refresh: bool,
    /// Phase-shifted PWM
    pub phase_shifted_pwm: bool,
    /// LSB distortion value enable
    pub lsb_delay: bool,
}

/// Ordered-command sink for the chip cluster.
///
/// Grayscale and control values are staged in the implementation's buffers;
/// nothing reaches the physical outputs until [`commit`](Tlc5955::commit)
/// (grayscale) or [`commit_control`](Tlc5955::commit_control) (control
/// latch). Staging operations are plain memory writes and cannot fail; only
/// the bus-touching commits and [`init`](Tlc5955::init) return errors.
pub trait Tlc5955 {
    /// Bus error type of the implementation.
    type Error;

    /// Initializes the serial bus to the chip chain.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Reads the staged grayscale value of one color of `channel`.
    fn channel_value(&self, channel: u16, color: ColorChannel) -> u16;

    /// Stages all three colors of `channel` at once.
    fn set_channel(&mut self, channel: u16, red: u16, green: u16, blue: u16);

    /// Stages the same value on every color of every channel.
    fn set_all_channels(&mut self, value: u16);

    /// Stages a uniform dot-correction value for every channel.
    fn set_dot_correction(&mut self, value: u8);

    /// Stages the per-color maximum current code (see TLC5955 datasheet).
    fn set_max_current(&mut self, red: u8, green: u8, blue: u8);

    /// Stages the function control latch flags.
    fn set_function_control(&mut self, control: FunctionControl);

    /// Stages the per-color brightness current trim (0..=127).
    fn set_brightness_current(&mut self, red: u8, green: u8, blue: u8);

    /// Fixes the output-pin position of each color for all channels.
    fn set_rgb_pin_order(&mut self, red: u8, green: u8, blue: u8);

    /// Fixes the output-pin position of one color of one channel.
    fn set_pin_order(&mut self, channel: u16, color: ColorChannel, position: u8);

    /// Shifts the staged control data (dot correction, currents, function
    /// flags) out to the chips.
    fn commit_control(&mut self) -> Result<(), Self::Error>;

    /// Latches all staged grayscale values onto the physical outputs
    /// simultaneously.
    fn commit(&mut self) -> Result<(), Self::Error>;
}
