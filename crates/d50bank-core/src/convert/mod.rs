use thiserror::Error;

use crate::bank::{BankError, BinPatch, SyxPatch, keymode, layout, name};
use crate::sysex::{self, ChecksumPolicy, SysexError};
use crate::{BankListing, PatchEntry};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("SysEx stream error: {0}")]
    Sysex(#[from] SysexError),
    #[error("bank record error: {0}")]
    Bank(#[from] BankError),
}

/// Decode a hardware bank dump into its 64 patch records.
///
/// Reverb memory is validated and then dropped; the bin format has no slot
/// for it.
pub fn read_syx_bank(stream: &[u8], policy: ChecksumPolicy) -> Result<Vec<SyxPatch>, ConvertError> {
    let regions = sysex::join(stream, policy)?;
    let mut records = Vec::with_capacity(layout::BANK_PATCHES);
    for record in regions.patch.chunks_exact(layout::SYX_PATCH_LEN) {
        records.push(SyxPatch::decode(record)?);
    }
    Ok(records)
}

/// Decode a software-synth bank file into its 64 patch records.
pub fn read_bin_bank(bytes: &[u8]) -> Result<Vec<BinPatch>, ConvertError> {
    let mut records = Vec::with_capacity(layout::BANK_PATCHES);
    for record in bin_record_slices(bytes)? {
        records.push(BinPatch::decode(record)?);
    }
    Ok(records)
}

/// Serialize hardware-domain records as a software-synth bank file.
pub fn write_bin_bank(records: &[SyxPatch]) -> Result<Vec<u8>, ConvertError> {
    let mut out = Vec::with_capacity(layout::BIN_FILE_LEN);
    out.extend_from_slice(layout::BIN_MAGIC);
    for record in records {
        bin_from_syx(record)?.encode(&mut out);
    }
    Ok(out)
}

/// Serialize software-domain records as a hardware bank dump.
///
/// No reverb messages are produced; the bin format carries no reverb data.
pub fn write_syx_bank(records: &[BinPatch]) -> Vec<u8> {
    let mut patch_memory = Vec::with_capacity(sysex::layout::PATCH_MEMORY_LEN);
    for record in records {
        syx_from_bin(record).encode(&mut patch_memory);
    }
    sysex::split(&patch_memory)
}

/// Convert a hardware bank dump to a software-synth bank file.
pub fn syx_to_bin(stream: &[u8], policy: ChecksumPolicy) -> Result<Vec<u8>, ConvertError> {
    write_bin_bank(&read_syx_bank(stream, policy)?)
}

/// Convert a software-synth bank file back to a hardware bank dump.
pub fn bin_to_syx(bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
    Ok(write_syx_bank(&read_bin_bank(bytes)?))
}

/// List patch names and key modes of decoded hardware-domain records.
pub fn syx_bank_listing(records: &[SyxPatch]) -> Result<BankListing, BankError> {
    let mut patches = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let mut ascii = record.patch.name;
        name::decode_in_place(&mut ascii)?;
        patches.push(PatchEntry {
            slot: (index + 1) as u8,
            name: name::display_name(&ascii),
            key_mode: record.patch.key_mode,
        });
    }
    Ok(BankListing { patches })
}

/// List patch names and key modes of decoded software-domain records.
///
/// Names in the bin domain are already ASCII; key modes are reported in the
/// software domain's 7-value space.
pub fn bin_bank_listing(records: &[BinPatch]) -> BankListing {
    let patches = records
        .iter()
        .enumerate()
        .map(|(index, record)| PatchEntry {
            slot: (index + 1) as u8,
            name: name::display_name(&record.patch.name),
            key_mode: record.patch.key_mode,
        })
        .collect();
    BankListing { patches }
}

/// List patch names and key modes from a hardware bank dump.
pub fn syx_listing(stream: &[u8], policy: ChecksumPolicy) -> Result<BankListing, ConvertError> {
    Ok(syx_bank_listing(&read_syx_bank(stream, policy)?)?)
}

/// List patch names and key modes from a software-synth bank file.
pub fn bin_listing(bytes: &[u8]) -> Result<BankListing, ConvertError> {
    Ok(bin_bank_listing(&read_bin_bank(bytes)?))
}

fn bin_record_slices(bytes: &[u8]) -> Result<std::slice::ChunksExact<'_, u8>, BankError> {
    if bytes.len() != layout::BIN_FILE_LEN {
        return Err(BankError::SizeInvariant {
            expected: layout::BIN_FILE_LEN,
            actual: bytes.len(),
        });
    }
    if &bytes[..layout::BIN_MAGIC.len()] != layout::BIN_MAGIC {
        return Err(BankError::BadMagic);
    }
    Ok(bytes[layout::BIN_MAGIC.len()..].chunks_exact(layout::BIN_PATCH_LEN))
}

fn bin_from_syx(syx: &SyxPatch) -> Result<BinPatch, BankError> {
    let mut upper_common = syx.upper_common.clone();
    let mut lower_common = syx.lower_common.clone();
    let mut patch = syx.patch.clone();

    name::decode_in_place(&mut upper_common.tone_name)?;
    name::decode_in_place(&mut lower_common.tone_name)?;
    name::decode_in_place(&mut patch.name)?;

    patch.key_mode = keymode::to_bin(patch.key_mode);
    patch.signature_mut().copy_from_slice(&layout::SIGNATURE);

    let mut tone_name = [0u8; 20];
    tone_name[..patch.name.len()].copy_from_slice(&patch.name);

    Ok(BinPatch {
        tone_name,
        upper_partial_1: syx.upper_partial_1.clone(),
        upper_partial_2: syx.upper_partial_2.clone(),
        lower_partial_1: syx.lower_partial_1.clone(),
        lower_partial_2: syx.lower_partial_2.clone(),
        upper_common,
        lower_common,
        patch,
    })
}

fn syx_from_bin(bin: &BinPatch) -> SyxPatch {
    let mut upper_common = bin.upper_common.clone();
    let mut lower_common = bin.lower_common.clone();
    let mut patch = bin.patch.clone();

    name::encode_in_place(&mut upper_common.tone_name);
    name::encode_in_place(&mut lower_common.tone_name);
    name::encode_in_place(&mut patch.name);

    patch.key_mode = keymode::to_syx(patch.key_mode);
    patch.signature_mut().fill(0);

    SyxPatch {
        upper_partial_1: bin.upper_partial_1.clone(),
        upper_partial_2: bin.upper_partial_2.clone(),
        upper_common,
        lower_partial_1: bin.lower_partial_1.clone(),
        lower_partial_2: bin.lower_partial_2.clone(),
        lower_common,
        patch,
    }
}
