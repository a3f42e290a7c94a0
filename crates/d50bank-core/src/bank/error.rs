use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("character code {code:#04X} outside the 64-symbol name alphabet")]
    OutOfRangeCharacterCode { code: u8 },
    #[error("record too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("bin bank size invariant violated: expected {expected} bytes, got {actual}")]
    SizeInvariant { expected: usize, actual: usize },
    #[error("bin bank magic mismatch: expected \"KoaBankFile00003PG-D50\"")]
    BadMagic,
}
