use thiserror::Error;

#[derive(Debug, Error)]
pub enum SysexError {
    #[error("malformed SysEx header at byte {offset}: expected F0 41 00 14 12")]
    MalformedHeader { offset: usize },
    #[error("message at byte {offset} too short: need {needed} bytes, got {actual}")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        actual: usize,
    },
    #[error("checksum mismatch at byte {offset}: expected {expected:#04X}, got {actual:#04X}")]
    ChecksumMismatch {
        offset: usize,
        expected: u8,
        actual: u8,
    },
    #[error("{region} memory size invariant violated: expected {expected} bytes, got {actual}")]
    SizeInvariant {
        region: &'static str,
        expected: usize,
        actual: usize,
    },
}
