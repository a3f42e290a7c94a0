use super::layout;

/// A Roland device address: three 7-bit bytes covering a 21-bit space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub high: u8,
    pub mid: u8,
    pub low: u8,
}

impl Address {
    pub fn encode(linear: u32) -> Self {
        Self {
            high: ((linear >> 14) & 0x7F) as u8,
            mid: ((linear >> 7) & 0x7F) as u8,
            low: (linear & 0x7F) as u8,
        }
    }

    pub fn decode(&self) -> u32 {
        ((self.high as u32) << 14) | ((self.mid as u32) << 7) | self.low as u32
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            high: bytes[0],
            mid: bytes[1],
            low: bytes[2],
        }
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.high, self.mid, self.low]
    }

    /// Whether this address falls in the reverb region of a bank dump.
    pub fn is_reverb(&self) -> bool {
        self.high > layout::REVERB_ADDRESS_HIGH
            || (self.high == layout::REVERB_ADDRESS_HIGH && self.mid >= layout::REVERB_ADDRESS_MID)
    }
}

#[cfg(test)]
mod tests {
    use super::Address;

    #[test]
    fn encode_masks_to_seven_bits() {
        let addr = Address::encode(0x8000);
        assert_eq!(addr, Address { high: 0x02, mid: 0x00, low: 0x00 });

        let addr = Address::encode(0x8000 + 0x6F00);
        assert!(addr.high <= 0x7F && addr.mid <= 0x7F && addr.low <= 0x7F);
    }

    #[test]
    fn decode_inverts_encode() {
        for linear in [0u32, 0x7F, 0x80, 0x8000, 0x8000 + 0x6FFF, 0x1F_FFFF] {
            assert_eq!(Address::encode(linear).decode(), linear);
        }
    }

    #[test]
    fn reverb_region_boundary() {
        assert!(!Address { high: 0x03, mid: 0x5F, low: 0x7F }.is_reverb());
        assert!(Address { high: 0x03, mid: 0x60, low: 0x00 }.is_reverb());
        assert!(Address { high: 0x04, mid: 0x00, low: 0x00 }.is_reverb());
        assert!(!Address { high: 0x02, mid: 0x70, low: 0x00 }.is_reverb());
    }
}
