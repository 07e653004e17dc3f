//! LED position records.
//!
//! Each physical LED of an array variant is described by one [`LedPosition`]:
//! its caller-facing index, the driver-cluster channel it is wired to, and
//! its placement relative to the array center. The tables themselves are
//! compiled-in constant data owned by the variant (see [`crate::SciWing`]).

/// One entry of a variant's position table.
///
/// Coordinates are fixed-point, in units of 0.01 mm. `z` is the distance
/// from the illumination plane to the sample plane and is consumed by
/// pattern logic upstream of this crate, never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPosition {
    index: u16,
    channel: i16,
    x: i16,
    y: i16,
    z: i16,
}

impl LedPosition {
    /// Channel sentinel for a board slot with no LED fitted.
    pub const UNPOPULATED: i16 = -1;

    pub const fn new(index: u16, channel: i16, x: i16, y: i16, z: i16) -> Self {
        Self {
            index,
            channel,
            x,
            y,
            z,
        }
    }

    /// Ordinal of this LED in the caller-facing API.
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Driver channel this LED is wired to, or `None` for an unpopulated
    /// slot. Writes and reads against unpopulated slots must not reach the
    /// driver.
    pub const fn channel(&self) -> Option<u16> {
        if self.channel >= 0 {
            Some(self.channel as u16)
        } else {
            None
        }
    }

    /// X offset from the array center (0.01 mm).
    pub const fn x(&self) -> i16 {
        self.x
    }

    /// Y offset from the array center (0.01 mm).
    pub const fn y(&self) -> i16 {
        self.y
    }

    /// Illumination-plane to sample-plane distance (0.01 mm).
    pub const fn z(&self) -> i16 {
        self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_channel() {
        let led = LedPosition::new(3, 94, -417, 0, 6500);
        assert_eq!(led.index(), 3);
        assert_eq!(led.channel(), Some(94));
        assert_eq!(led.x(), -417);
        assert_eq!(led.y(), 0);
        assert_eq!(led.z(), 6500);
    }

    #[test]
    fn test_unpopulated_channel() {
        let led = LedPosition::new(7, LedPosition::UNPOPULATED, 0, 0, 0);
        assert_eq!(led.channel(), None);
    }
}
