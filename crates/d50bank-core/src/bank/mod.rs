//! Fixed-layout patch memory records.
//!
//! Record shapes are written and read through explicit encode/decode pairs
//! driven by the offsets in [`layout`], never through native struct layout,
//! so the byte contract is independent of host alignment rules.

pub mod error;
pub mod keymode;
pub mod layout;
pub mod name;

pub use error::BankError;

/// One of the four tone-generator parameter blocks; opaque to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    pub data: [u8; layout::PARTIAL_LEN],
}

/// Per-tone shared parameters, led by the 10-byte tone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Common {
    pub tone_name: [u8; 10],
    pub params: [u8; 54],
}

/// Top-level patch parameters: 18-byte name, key mode, opaque tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: [u8; 18],
    pub key_mode: u8,
    pub params: [u8; 45],
}

/// The hardware-domain patch record (448 bytes, partials and commons
/// interleaved per tone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyxPatch {
    pub upper_partial_1: Partial,
    pub upper_partial_2: Partial,
    pub upper_common: Common,
    pub lower_partial_1: Partial,
    pub lower_partial_2: Partial,
    pub lower_common: Common,
    pub patch: Patch,
}

/// The software-domain patch record (468 bytes, duplicated tone name first,
/// then all four partials, then both commons).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinPatch {
    pub tone_name: [u8; 20],
    pub upper_partial_1: Partial,
    pub upper_partial_2: Partial,
    pub lower_partial_1: Partial,
    pub lower_partial_2: Partial,
    pub upper_common: Common,
    pub lower_common: Common,
    pub patch: Patch,
}

fn require_len(bytes: &[u8], needed: usize) -> Result<(), BankError> {
    if bytes.len() < needed {
        return Err(BankError::TooShort {
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}

impl Partial {
    pub fn decode(bytes: &[u8]) -> Result<Self, BankError> {
        require_len(bytes, layout::PARTIAL_LEN)?;
        Ok(Self { data: array(bytes, 0) })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.data);
    }
}

impl Common {
    pub fn decode(bytes: &[u8]) -> Result<Self, BankError> {
        require_len(bytes, layout::COMMON_LEN)?;
        Ok(Self {
            tone_name: array(bytes, layout::COMMON_NAME_RANGE.start),
            params: array(bytes, layout::COMMON_PARAMS_RANGE.start),
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.tone_name);
        out.extend_from_slice(&self.params);
    }
}

impl Patch {
    pub fn decode(bytes: &[u8]) -> Result<Self, BankError> {
        require_len(bytes, layout::PATCH_LEN)?;
        Ok(Self {
            name: array(bytes, layout::PATCH_NAME_RANGE.start),
            key_mode: bytes[layout::PATCH_KEY_MODE_OFFSET],
            params: array(bytes, layout::PATCH_PARAMS_RANGE.start),
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.name);
        out.push(self.key_mode);
        out.extend_from_slice(&self.params);
    }

    /// Slice of `params` covering the software synth's marker bytes.
    pub fn signature_mut(&mut self) -> &mut [u8] {
        let start = layout::SIGNATURE_RANGE.start - layout::PATCH_PARAMS_RANGE.start;
        let end = layout::SIGNATURE_RANGE.end - layout::PATCH_PARAMS_RANGE.start;
        &mut self.params[start..end]
    }

    pub fn signature(&self) -> &[u8] {
        let start = layout::SIGNATURE_RANGE.start - layout::PATCH_PARAMS_RANGE.start;
        let end = layout::SIGNATURE_RANGE.end - layout::PATCH_PARAMS_RANGE.start;
        &self.params[start..end]
    }
}

impl SyxPatch {
    pub fn decode(bytes: &[u8]) -> Result<Self, BankError> {
        require_len(bytes, layout::SYX_PATCH_LEN)?;
        Ok(Self {
            upper_partial_1: Partial::decode(&bytes[layout::SYX_UPPER_PARTIAL_1..])?,
            upper_partial_2: Partial::decode(&bytes[layout::SYX_UPPER_PARTIAL_2..])?,
            upper_common: Common::decode(&bytes[layout::SYX_UPPER_COMMON..])?,
            lower_partial_1: Partial::decode(&bytes[layout::SYX_LOWER_PARTIAL_1..])?,
            lower_partial_2: Partial::decode(&bytes[layout::SYX_LOWER_PARTIAL_2..])?,
            lower_common: Common::decode(&bytes[layout::SYX_LOWER_COMMON..])?,
            patch: Patch::decode(&bytes[layout::SYX_PATCH..])?,
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        self.upper_partial_1.encode(out);
        self.upper_partial_2.encode(out);
        self.upper_common.encode(out);
        self.lower_partial_1.encode(out);
        self.lower_partial_2.encode(out);
        self.lower_common.encode(out);
        self.patch.encode(out);
    }
}

impl BinPatch {
    pub fn decode(bytes: &[u8]) -> Result<Self, BankError> {
        require_len(bytes, layout::BIN_PATCH_LEN)?;
        Ok(Self {
            tone_name: array(bytes, layout::BIN_TONE_NAME_RANGE.start),
            upper_partial_1: Partial::decode(&bytes[layout::BIN_UPPER_PARTIAL_1..])?,
            upper_partial_2: Partial::decode(&bytes[layout::BIN_UPPER_PARTIAL_2..])?,
            lower_partial_1: Partial::decode(&bytes[layout::BIN_LOWER_PARTIAL_1..])?,
            lower_partial_2: Partial::decode(&bytes[layout::BIN_LOWER_PARTIAL_2..])?,
            upper_common: Common::decode(&bytes[layout::BIN_UPPER_COMMON..])?,
            lower_common: Common::decode(&bytes[layout::BIN_LOWER_COMMON..])?,
            patch: Patch::decode(&bytes[layout::BIN_PATCH..])?,
        })
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.tone_name);
        self.upper_partial_1.encode(out);
        self.upper_partial_2.encode(out);
        self.lower_partial_1.encode(out);
        self.lower_partial_2.encode(out);
        self.upper_common.encode(out);
        self.lower_common.encode(out);
        self.patch.encode(out);
    }
}
