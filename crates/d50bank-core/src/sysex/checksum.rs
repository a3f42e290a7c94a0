use super::address::Address;

/// Roland DT1 checksum over the address bytes and the message content.
///
/// The device requires `(sum(address) + sum(content) + checksum) % 128 == 0`.
pub fn compute(address: &Address, content: &[u8]) -> u8 {
    let mut sum: u8 = 0;
    for byte in address.to_bytes() {
        sum = sum.wrapping_add(byte);
    }
    for byte in content {
        sum = sum.wrapping_add(*byte);
    }
    fold(sum)
}

pub fn verify(address: &Address, content: &[u8], checksum: u8) -> bool {
    compute(address, content) == checksum
}

// 0x80 - (sum % 0x80), with the 0x80 result wrapped to 0.
fn fold(sum: u8) -> u8 {
    let folded = 0x80 - (sum % 0x80);
    if folded == 0x80 { 0 } else { folded }
}
