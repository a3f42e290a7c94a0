pub const BANK_PATCHES: usize = 64;

pub const PARTIAL_LEN: usize = 64;
pub const COMMON_LEN: usize = 64;
pub const PATCH_LEN: usize = 64;
pub const REVERB_BLOCK_LEN: usize = 376;

pub const COMMON_NAME_RANGE: std::ops::Range<usize> = 0..10;
pub const COMMON_PARAMS_RANGE: std::ops::Range<usize> = 10..64;

pub const PATCH_NAME_RANGE: std::ops::Range<usize> = 0..18;
pub const PATCH_KEY_MODE_OFFSET: usize = 18;
pub const PATCH_PARAMS_RANGE: std::ops::Range<usize> = 19..64;

// Marker bytes the software synth expects inside the patch parameter tail,
// relative to the start of the 64-byte patch block.
pub const SIGNATURE_RANGE: std::ops::Range<usize> = 44..47;
pub const SIGNATURE: [u8; 3] = [0x03, 0x0F, 0x0D];

// Hardware-domain record: partials and commons interleaved per tone.
pub const SYX_UPPER_PARTIAL_1: usize = 0;
pub const SYX_UPPER_PARTIAL_2: usize = 64;
pub const SYX_UPPER_COMMON: usize = 128;
pub const SYX_LOWER_PARTIAL_1: usize = 192;
pub const SYX_LOWER_PARTIAL_2: usize = 256;
pub const SYX_LOWER_COMMON: usize = 320;
pub const SYX_PATCH: usize = 384;
pub const SYX_PATCH_LEN: usize = 448;

// Software-domain record: duplicated tone name, then all four partials,
// then both commons.
pub const BIN_TONE_NAME_RANGE: std::ops::Range<usize> = 0..20;
pub const BIN_UPPER_PARTIAL_1: usize = 20;
pub const BIN_UPPER_PARTIAL_2: usize = 84;
pub const BIN_LOWER_PARTIAL_1: usize = 148;
pub const BIN_LOWER_PARTIAL_2: usize = 212;
pub const BIN_UPPER_COMMON: usize = 276;
pub const BIN_LOWER_COMMON: usize = 340;
pub const BIN_PATCH: usize = 404;
pub const BIN_PATCH_LEN: usize = 468;

pub const BIN_MAGIC: &[u8; 22] = b"KoaBankFile00003PG-D50";
pub const BIN_FILE_LEN: usize = BIN_MAGIC.len() + BANK_PATCHES * BIN_PATCH_LEN;
