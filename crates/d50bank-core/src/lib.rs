//! Core library for converting Roland D-50 patch banks between the
//! hardware's MIDI SysEx dump format and the software synth's flat bank file.
//!
//! The pipeline is byte-in, byte-out and side-effect free: a DT1 SysEx stream
//! is reassembled into patch and reverb memory (`sysex`), sliced into
//! fixed-layout records (`bank`), transcoded per record and re-serialized in
//! the other domain (`convert`). All file access lives in the CLI.
//!
//! Invariants:
//! - A bank is always exactly 64 patches; partial banks are rejected.
//! - Decoded hardware patch memory is exactly 0x7000 bytes and reverb memory
//!   exactly 0x1780 bytes, or the conversion fails.
//! - Either the full converted buffer is produced or an error is returned;
//!   there is no partial output.
//!
//! # Examples
//! ```no_run
//! use d50bank_core::{ChecksumPolicy, syx_to_bin};
//!
//! let stream = std::fs::read("bank.syx")?;
//! let bin = syx_to_bin(&stream, ChecksumPolicy::default())?;
//! std::fs::write("bank.bin", bin)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod bank;
pub mod convert;
pub mod sysex;

pub use bank::{BankError, BinPatch, Common, Partial, Patch, SyxPatch};
pub use convert::{
    ConvertError, bin_bank_listing, bin_listing, bin_to_syx, read_bin_bank, read_syx_bank,
    syx_bank_listing, syx_listing, syx_to_bin, write_bin_bank, write_syx_bank,
};
pub use sysex::{Address, ChecksumPolicy, SysexError};

/// Number of patch records in a bank, in either domain.
pub const BANK_PATCHES: usize = bank::layout::BANK_PATCHES;

/// Patch names and key modes of one bank, in slot order.
///
/// # Examples
/// ```
/// use d50bank_core::{BankListing, PatchEntry};
///
/// let listing = BankListing {
///     patches: vec![PatchEntry {
///         slot: 1,
///         name: "Fantasia".to_string(),
///         key_mode: 0,
///     }],
/// };
/// assert_eq!(listing.patches[0].slot, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankListing {
    /// One entry per patch record, slot order preserved.
    pub patches: Vec<PatchEntry>,
}

/// A single patch's listing entry.
///
/// `key_mode` is reported in the domain of the file it was read from: the
/// 9-value hardware space for SysEx dumps, the 7-value software space for
/// bin banks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchEntry {
    /// 1-based bank slot.
    pub slot: u8,
    /// Patch name, ASCII, trailing padding trimmed.
    pub name: String,
    /// Key-assignment mode byte as stored in the source file.
    pub key_mode: u8,
}
