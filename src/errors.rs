use thiserror::Error;

/// Reasons a datagram fails to decode. Every variant is fatal for the
/// datagram that produced it, the caller should drop the datagram and keep
/// reading the stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("truncated input: needed {needed} bytes but only {available} remain")]
    TruncatedInput { needed: usize, available: usize },

    #[error("flowset {flowset_id} declares length {length}, shorter than its own 4 byte record header")]
    MalformedRecord { flowset_id: u16, length: u16 },

    #[error("record length disagrees with its body, {unconsumed} bytes unaccounted for")]
    FramingError { unconsumed: usize },
}
