//! Roland DT1 SysEx stream handling.
//!
//! Layered like the rest of the crate:
//! - `layout`: identity bytes, chunk geometry, region sizes (source of truth)
//! - `address`: the 3×7-bit device address triple
//! - `checksum`: the Roland mod-128 checksum
//! - `chunk`: splitting and reassembling addressed, checksummed messages
//! - `error`: explicit, actionable errors
//!
//! Everything here is pure and byte-oriented; file access lives in the CLI.

pub mod address;
pub mod checksum;
pub mod chunk;
pub mod error;
pub mod layout;

pub use address::Address;
pub use chunk::{ChecksumPolicy, DumpRegions, join, split};
pub use error::SysexError;
