//! # Metric Frequency Module
//!
//! Parses and formats frequencies written with Hz/kHz units, such as axis
//! tick labels ("31.5 Hz", "1.25 kHz") or user-entered values.
//!
//! Number syntax is delegated to a [`NumberLocale`], which knows the decimal
//! and grouping separators. Like a locale number parser, it reads the longest
//! numeric prefix and ignores whatever follows.

use crate::error::{Result, SignalError};

/// Decimal and grouping separators used to read and write numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::new('.', ',')
    }
}

impl NumberLocale {
    pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Parses the longest numeric prefix of `text`.
    ///
    /// Accepts a leading minus sign, digits, grouping separators in the integer
    /// part and a single decimal separator. Returns `None` when the prefix has
    /// no digits.
    pub fn parse_prefix(&self, text: &str) -> Option<f64> {
        let mut normalized = String::with_capacity(text.len());
        let mut seen_digit = false;
        let mut seen_decimal = false;

        for (i, c) in text.chars().enumerate() {
            if i == 0 && c == '-' {
                normalized.push('-');
            } else if c.is_ascii_digit() {
                normalized.push(c);
                seen_digit = true;
            } else if c == self.decimal_separator && !seen_decimal {
                normalized.push('.');
                seen_decimal = true;
            } else if c == self.grouping_separator && seen_digit && !seen_decimal {
                continue;
            } else {
                break;
            }
        }

        if !seen_digit {
            return None;
        }
        normalized.parse().ok()
    }

    /// Formats `value` with at most `max_fraction_digits` fraction digits.
    ///
    /// Trailing fraction zeros are dropped and the integer part is grouped in
    /// threes.
    pub fn format(&self, value: f64, max_fraction_digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{value:.max_fraction_digits$}");
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", int_part),
        };

        let mut formatted = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
        formatted.push_str(sign);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                formatted.push(self.grouping_separator);
            }
            formatted.push(c);
        }
        if !frac_part.is_empty() {
            formatted.push(self.decimal_separator);
            formatted.push_str(frac_part);
        }
        formatted
    }
}

/// Expands a possibly kHz-abbreviated frequency string to Hertz.
///
/// Accepts values with or without a space before the unit ("2.5 kHz",
/// "2.5kHz", "125 Hz"). Only strings ending in "kHz" are scaled by 1000.
/// Text without an "H" has no numeric part and is rejected at the parse
/// step.
///
/// # Arguments
/// * `text` - Frequency text such as "1.25 kHz"
/// * `locale` - Separators used by the numeric part
///
/// # Returns
/// * `Ok(frequency)` - Frequency in Hz
/// * `Err(SignalError::InvalidFrequency)` - No numeric prefix before the unit
pub fn expand_metric_abbreviated_frequency(text: &str, locale: &NumberLocale) -> Result<f64> {
    let has_units = text.contains("Hz");
    let is_kilo = has_units && text.ends_with("kHz");

    let units_index = if is_kilo { text.rfind('k') } else { text.rfind('H') };
    let numeric = units_index.map_or("", |index| text[..index].trim());

    let frequency = locale
        .parse_prefix(numeric)
        .ok_or_else(|| SignalError::InvalidFrequency {
            input: text.to_string(),
        })?;
    log::debug!("[METRIC] Parsed {text:?} as {frequency} (kilo: {is_kilo})");

    Ok(if is_kilo { frequency * 1000.0 } else { frequency })
}

/// Formats a frequency for display, switching to kHz from 1000 Hz up.
///
/// Hertz values keep at most one fraction digit, which covers the usual
/// spacing of low and mid frequencies; kilohertz values keep up to four.
pub fn format_frequency(frequency: f64, locale: &NumberLocale) -> String {
    if frequency < 1000.0 {
        format!("{} Hz", locale.format(frequency, 1))
    } else {
        format!("{} kHz", locale.format(0.001 * frequency, 4))
    }
}
