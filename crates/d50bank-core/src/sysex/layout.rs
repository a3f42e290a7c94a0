pub const EXCLUSIVE_STATUS: u8 = 0xF0;
pub const MANUFACTURER_ID_ROLAND: u8 = 0x41;
pub const DEVICE_ID: u8 = 0x00;
pub const MODEL_ID_D50: u8 = 0x14;
pub const COMMAND_ID_DT1: u8 = 0x12;
pub const END_OF_EXCLUSIVE: u8 = 0xF7;

pub const IDENTITY: [u8; 5] = [
    EXCLUSIVE_STATUS,
    MANUFACTURER_ID_ROLAND,
    DEVICE_ID,
    MODEL_ID_D50,
    COMMAND_ID_DT1,
];

pub const IDENTITY_LEN: usize = 5;
pub const ADDRESS_RANGE: std::ops::Range<usize> = 5..8;
pub const CONTENT_OFFSET: usize = 8;
// checksum + EOX
pub const FOOTER_LEN: usize = 2;

pub const MAX_CONTENT_LEN: usize = 256;
pub const MIN_MESSAGE_LEN: usize = CONTENT_OFFSET + FOOTER_LEN;
pub const MAX_MESSAGE_LEN: usize = CONTENT_OFFSET + MAX_CONTENT_LEN + FOOTER_LEN;

/// Base address of bank patch memory in a DT1 bulk dump.
pub const PATCH_BASE_ADDRESS: u32 = 0x8000;

/// Reverb memory starts at address bytes 03 60 00.
pub const REVERB_ADDRESS_HIGH: u8 = 0x03;
pub const REVERB_ADDRESS_MID: u8 = 0x60;

pub const PATCH_MEMORY_LEN: usize = 0x7000;
pub const REVERB_MEMORY_LEN: usize = 0x1780;
