use super::error::BankError;

/// The D-50 name alphabet; a name byte is an index into this table.
pub const NAME_TABLE: &[u8; 64] =
    b" ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890-";

/// Decode one internal character code to ASCII.
///
/// Strict: hardware data is expected to stay inside the table, so an index
/// past it is corruption, not something to coerce.
pub fn to_ascii(code: u8) -> Result<u8, BankError> {
    NAME_TABLE
        .get(code as usize)
        .copied()
        .ok_or(BankError::OutOfRangeCharacterCode { code })
}

/// Encode one ASCII byte to the internal character code.
///
/// Permissive: anything outside the alphabet collapses to `-` (code 63),
/// since names may carry arbitrary user-typed text.
pub fn to_code(ch: u8) -> u8 {
    match ch {
        b' ' => 0,
        b'A'..=b'Z' => ch - b'A' + 1,
        b'a'..=b'z' => ch - b'a' + 27,
        b'1'..=b'9' => ch - b'1' + 53,
        b'0' => 62,
        _ => 63,
    }
}

/// Decode a name field in place, internal codes to ASCII.
pub fn decode_in_place(name: &mut [u8]) -> Result<(), BankError> {
    for byte in name.iter_mut() {
        *byte = to_ascii(*byte)?;
    }
    Ok(())
}

/// Encode a name field in place, ASCII to internal codes.
pub fn encode_in_place(name: &mut [u8]) {
    for byte in name.iter_mut() {
        *byte = to_code(*byte);
    }
}

/// Render an already-ASCII name field as a string, trailing spaces trimmed.
pub fn display_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).trim_end().to_string()
}
