use thiserror::Error;

/// Error type describing why a byte parcel could not be decoded back into a
/// [`Parcelable`](crate::Parcelable) value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParcelError {
    /// Not enough bytes were provided to decode the value.
    /// `provided` contains the provided amount of bytes,
    /// `expected` contains the expected amount of bytes.
    #[error("expected {expected} bytes, {provided} bytes were provided.")]
    Length { provided: usize, expected: usize },
    /// The bytes were present but did not describe a valid value.
    #[error("malformed parcel: {0}")]
    Malformed(&'static str),
}
