//! Configuration file parser
//!
//! A minimal TOML-subset parser for `toaster.toml`. It handles only what
//! the toaster configuration needs and allocates nothing.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = value` pairs with integer or quoted string values (`"..."` or
//!   `'...'`)
//! - Comments (`# ...`), whole-line or trailing, also after headers
//!
//! Pins are written as `"gpio<N>"`. Keys that are not present keep their
//! default value. The result is validated before it is returned.

use super::types::{ConfigError, ToasterConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Line is neither a header, a comment nor `key = value`
    MissingEquals,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Pins,
    Sensor,
    Servo,
    Threshold,
}

/// Parse a configuration file into a validated [`ToasterConfig`]
pub fn parse_config(input: &str) -> Result<ToasterConfig, ParseError> {
    let mut config = ToasterConfig::DEFAULT;
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::MissingEquals)?;
        apply_value(&mut config, section, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "pins" => Ok(Section::Pins),
        "sensor" => Ok(Section::Sensor),
        "servo" => Ok(Section::Servo),
        "threshold" => Ok(Section::Threshold),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut ToasterConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Pins, "servo") => config.pins.servo = parse_pin(value)?,
        (Section::Pins, "chip_select") => config.pins.chip_select = parse_pin(value)?,
        (Section::Pins, "clock") => config.pins.clock = parse_pin(value)?,
        (Section::Pins, "data") => config.pins.data = parse_pin(value)?,

        (Section::Sensor, "settle_time_us") => config.settle_time_us = parse_int(value)?,

        (Section::Servo, "off_pulse_us") => config.servo.off_us = parse_int(value)?,
        (Section::Servo, "on_pulse_us") => config.servo.on_us = parse_int(value)?,

        (Section::Threshold, "low") => config.bounds.low = parse_int(value)?,
        (Section::Threshold, "high") => config.bounds.high = parse_int(value)?,
        (Section::Threshold, "initial") => config.initial_threshold = parse_int(value)?,

        _ => return Err(ParseError::UnknownKey),
    }

    Ok(())
}

/// Cut a line at the first `#` outside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '#') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Split `key = value`
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a basic or literal string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    ['"', '\'']
        .iter()
        .find_map(|&q| value.strip_prefix(q)?.strip_suffix(q))
        .ok_or(ParseError::InvalidValue)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11"
fn parse_pin(value: &str) -> Result<u8, ParseError> {
    let value = parse_string(value)?;
    let number = value
        .strip_prefix("gpio")
        .ok_or(ParseError::InvalidValue)?;
    parse_int(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Toaster configuration

[pins]
servo = "gpio18"
chip_select = "gpio10"
clock = "gpio11"
data = "gpio9"

[sensor]
settle_time_us = 100   # per clock edge

[servo]
off_pulse_us = 700
on_pulse_us = 2000

[threshold]
low = 50
high = 150
initial = 80
"#;

    #[test]
    fn test_parse_full_file() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config, ToasterConfig::DEFAULT);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ToasterConfig::DEFAULT);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config("[threshold]\ninitial = 120\n[pins]\nservo = \"gpio22\"").unwrap();
        assert_eq!(config.initial_threshold, 120);
        assert_eq!(config.pins.servo, 22);
        assert_eq!(config.bounds, ToasterConfig::DEFAULT.bounds);
    }

    #[test]
    fn test_header_with_trailing_comment() {
        let config = parse_config("[pins] # wiring\nservo = \"gpio22\"").unwrap();
        assert_eq!(config.pins.servo, 22);
    }

    #[test]
    fn test_single_quoted_pin() {
        let config = parse_config("[pins]\nservo = 'gpio22'").unwrap();
        assert_eq!(config.pins.servo, 22);
    }

    #[test]
    fn test_mismatched_quotes() {
        let result = parse_config("[pins]\nservo = 'gpio22\"");
        assert_eq!(result, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_zero_settle_time_rejected() {
        let result = parse_config("[sensor]\nsettle_time_us = 0");
        assert_eq!(result, Err(ParseError::Invalid(ConfigError::ZeroSettleTime)));
    }

    #[test]
    fn test_comment_only_value_is_missing() {
        let result = parse_config("[sensor]\nsettle_time_us = # later");
        assert_eq!(result, Err(ParseError::MissingEquals));
    }

    #[test]
    fn test_unknown_key() {
        let result = parse_config("[servo]\nangle = 90");
        assert_eq!(result, Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_key_outside_section() {
        let result = parse_config("settle_time_us = 100");
        assert_eq!(result, Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_unknown_section() {
        let result = parse_config("[heater]");
        assert_eq!(result, Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_invalid_integer() {
        let result = parse_config("[sensor]\nsettle_time_us = fast");
        assert_eq!(result, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_integer_out_of_range() {
        // Pin numbers are u8
        let result = parse_config("[pins]\ndata = \"gpio300\"");
        assert_eq!(result, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_pin_requires_prefix() {
        let result = parse_config("[pins]\ndata = \"9\"");
        assert_eq!(result, Err(ParseError::InvalidValue));

        let result = parse_config("[pins]\ndata = 9");
        assert_eq!(result, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_missing_equals() {
        let result = parse_config("[servo]\noff_pulse_us 700");
        assert_eq!(result, Err(ParseError::MissingEquals));
    }

    #[test]
    fn test_validation_runs() {
        let result = parse_config("[threshold]\nlow = 200\nhigh = 100");
        assert_eq!(result, Err(ParseError::Invalid(ConfigError::InvertedBounds)));
    }
}
