//! Temperature sample and sensor trait

/// Number of data bits clocked out of the converter per read
pub const RAW_WORD_BITS: u8 = 12;

/// Mask covering the data bits of a raw word
pub const RAW_WORD_MASK: u16 = (1 << RAW_WORD_BITS) - 1;

/// A single temperature reading in whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Temperature in °C
    pub celsius: i16,
    /// Converter word the temperature was decoded from (0 if none)
    pub raw: u16,
}

impl Sample {
    /// Create a sample from an already-converted temperature
    pub const fn new(celsius: i16) -> Self {
        Self { celsius, raw: 0 }
    }

    /// Decode a raw converter word
    ///
    /// The converter reports half-degree steps, so the temperature is
    /// `raw * 0.5` truncated toward zero. Bits above the 12-bit word are
    /// ignored.
    pub const fn from_raw(raw: u16) -> Self {
        let raw = raw & RAW_WORD_MASK;
        Self {
            celsius: (raw >> 1) as i16,
            raw,
        }
    }
}

/// Trait for temperature sensors
///
/// A read always yields a sample. A disconnected thermocouple produces
/// whatever word the data line happened to present.
pub trait TemperatureSensor {
    /// Perform one complete read transaction
    ///
    /// May block for the duration of the transaction.
    fn read(&mut self) -> Sample;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_truncates() {
        assert_eq!(Sample::from_raw(400).celsius, 200);
        assert_eq!(Sample::from_raw(401).celsius, 200);
        assert_eq!(Sample::from_raw(0).celsius, 0);
        assert_eq!(Sample::from_raw(1).celsius, 0);
    }

    #[test]
    fn test_decode_keeps_raw_word() {
        assert_eq!(Sample::from_raw(401).raw, 401);
        assert_eq!(Sample::from_raw(0xF000 | 160).raw, 160);
        assert_eq!(Sample::new(80).raw, 0);
    }

    #[test]
    fn test_decode_full_scale() {
        assert_eq!(Sample::from_raw(RAW_WORD_MASK).celsius, 2047);
    }

    #[test]
    fn test_decode_ignores_high_bits() {
        assert_eq!(Sample::from_raw(0xF000 | 160), Sample::from_raw(160));
    }

    #[test]
    fn test_samples_order_by_temperature() {
        assert!(Sample::new(79) < Sample::new(80));
    }

    proptest! {
        #[test]
        fn prop_decode_is_half_truncated(raw in 0u16..=RAW_WORD_MASK) {
            let expected = (f32::from(raw) * 0.5) as i16;
            prop_assert_eq!(Sample::from_raw(raw).celsius, expected);
        }
    }
}
