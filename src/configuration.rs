//! Bring-up configuration for the driver cluster.

use crate::driver::FunctionControl;

/// Values applied to the chips during bring-up, in the fixed latch order
/// (dot correction, max current, function control, brightness current,
/// control commit, pin order).
#[derive(Debug, Clone)]
pub(crate) struct Configuration {
    pub(crate) dot_correction: u8,
    pub(crate) max_current: (u8, u8, u8),
    pub(crate) function_control: FunctionControl,
    pub(crate) brightness_current: (u8, u8, u8),
    pub(crate) rgb_pin_order: (u8, u8, u8),
}

/// Builder for the bring-up configuration.
///
/// The defaults are the values the shipped firmware programs: uniform
/// maximum dot correction, max-current code 3 on every color, brightness
/// current at full trim, and direct R/G/B pin ordering.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    pub(crate) configuration: Configuration,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            configuration: Configuration {
                dot_correction: 127,
                max_current: (3, 3, 3),
                function_control: FunctionControl {
                    display_repeat: true,
                    timing_reset: true,
                    auto_refresh: false,
                    phase_shifted_pwm: true,
                    lsb_delay: true,
                },
                brightness_current: (127, 127, 127),
                rgb_pin_order: (0, 1, 2),
            },
        }
    }

    /// Uniform dot-correction value for every channel (0..=127).
    pub fn dot_correction(mut self, value: u8) -> Self {
        self.configuration.dot_correction = value.min(127);
        self
    }

    /// Per-color maximum current code (0..=7, see TLC5955 datasheet).
    pub fn max_current(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.configuration.max_current = (red.min(7), green.min(7), blue.min(7));
        self
    }

    /// Function control latch flags.
    pub fn function_control(mut self, control: FunctionControl) -> Self {
        self.configuration.function_control = control;
        self
    }

    /// Per-color brightness current trim (0..=127).
    pub fn brightness_current(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.configuration.brightness_current = (red.min(127), green.min(127), blue.min(127));
        self
    }

    /// Output-pin position of each color.
    pub fn rgb_pin_order(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.configuration.rgb_pin_order = (red, green, blue);
        self
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_firmware() {
        let config = ConfigBuilder::new().configuration;

        assert_eq!(config.dot_correction, 127);
        assert_eq!(config.max_current, (3, 3, 3));
        assert_eq!(config.brightness_current, (127, 127, 127));
        assert_eq!(config.rgb_pin_order, (0, 1, 2));
        assert!(config.function_control.display_repeat);
        assert!(config.function_control.timing_reset);
        assert!(!config.function_control.auto_refresh);
        assert!(config.function_control.phase_shifted_pwm);
        assert!(config.function_control.lsb_delay);
    }

    #[test]
    fn test_builder_clamps_latch_ranges() {
        let config = ConfigBuilder::new()
            .dot_correction(200)
            .max_current(9, 1, 9)
            .brightness_current(255, 0, 127)
            .configuration;

        assert_eq!(config.dot_correction, 127);
        assert_eq!(config.max_current, (7, 1, 7));
        assert_eq!(config.brightness_current, (127, 0, 127));
    }
}
