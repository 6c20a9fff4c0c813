//! ROI calculator error types.

use thiserror::Error;

use super::control::Control;

/// Errors raised while reading raw control values.
///
/// The projection itself is total over the bounded inputs and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiError {
    /// A control value could not be parsed as a number.
    #[error("Invalid value for {control}: {value:?}")]
    InvalidNumber {
        /// Control the value was meant for.
        control: Control,
        /// The raw value as received.
        value: String,
    },
}
