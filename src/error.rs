use thiserror::Error;

/// Errors that can occur while configuring a [`Crc`](crate::Crc) or normalizing its input. Marked
/// as non-exhaustive to allow for future additions without breaking the API. Every error is
/// reported before any checksum is produced, there are no partial results.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The width has to be at least one bit and at most [`MAX_WIDTH`](crate::MAX_WIDTH) bits
    #[error("invalid crc width {0}: must be between 1 and {max} bits", max = crate::MAX_WIDTH)]
    InvalidWidth(u32),

    /// A text element has to consist of exactly one character to be used as a byte
    #[error("unsupported input element at index {index}: text of {chars} characters")]
    UnsupportedInputElement { index: usize, chars: usize },

    /// The requested number of elements exceeds the normalized input
    #[error("length {len} exceeds the {available} available input elements")]
    LengthOutOfRange { len: usize, available: usize },
}
