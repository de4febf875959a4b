//! Error types for the acoustics core.

/// Errors raised by the fallible lookups and parsers in this crate.
///
/// Arithmetic faults are not represented here: a zero octave divider or the
/// logarithm of a zero magnitude propagate as IEEE infinities or NaN.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SignalError {
    #[error("invalid frequency: {input:?}")]
    InvalidFrequency { input: String },

    #[error("unknown octave range: {0:?}")]
    UnknownOctaveRange(String),

    #[error("unsupported octave divider: {0}")]
    UnsupportedOctaveDivider(u32),
}

pub type Result<T> = std::result::Result<T, SignalError>;
