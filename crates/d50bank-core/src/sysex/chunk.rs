use super::address::Address;
use super::checksum;
use super::error::SysexError;
use super::layout;

/// Whether `join` recomputes and checks the per-message checksum.
///
/// The D-50 itself ignores bad checksums on bulk dumps, so `Ignore` is the
/// default; `Verify` turns a mismatch into a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumPolicy {
    #[default]
    Ignore,
    Verify,
}

/// Patch and reverb memory reassembled from a bank dump, in stream order.
#[derive(Debug, Clone)]
pub struct DumpRegions {
    pub patch: Vec<u8>,
    pub reverb: Vec<u8>,
}

/// Reassemble a full-bank DT1 stream into its patch and reverb memory images.
pub fn join(stream: &[u8], policy: ChecksumPolicy) -> Result<DumpRegions, SysexError> {
    let regions = scan(stream, policy)?;
    if regions.patch.len() != layout::PATCH_MEMORY_LEN {
        return Err(SysexError::SizeInvariant {
            region: "patch",
            expected: layout::PATCH_MEMORY_LEN,
            actual: regions.patch.len(),
        });
    }
    if regions.reverb.len() != layout::REVERB_MEMORY_LEN {
        return Err(SysexError::SizeInvariant {
            region: "reverb",
            expected: layout::REVERB_MEMORY_LEN,
            actual: regions.reverb.len(),
        });
    }
    Ok(regions)
}

// Messages are delimited by the EOX terminator; bytes after the last
// terminator are ignored, so a truncated final message surfaces later as a
// size invariant failure.
fn scan(stream: &[u8], policy: ChecksumPolicy) -> Result<DumpRegions, SysexError> {
    let mut patch = Vec::new();
    let mut reverb = Vec::new();

    let mut base = 0usize;
    for (index, byte) in stream.iter().enumerate() {
        if *byte != layout::END_OF_EXCLUSIVE {
            continue;
        }
        let message = &stream[base..=index];
        if message.len() < layout::MIN_MESSAGE_LEN {
            return Err(SysexError::TruncatedMessage {
                offset: base,
                needed: layout::MIN_MESSAGE_LEN,
                actual: message.len(),
            });
        }
        if message[..layout::IDENTITY_LEN] != layout::IDENTITY {
            return Err(SysexError::MalformedHeader { offset: base });
        }

        let address = Address::from_bytes([
            message[layout::ADDRESS_RANGE.start],
            message[layout::ADDRESS_RANGE.start + 1],
            message[layout::ADDRESS_RANGE.start + 2],
        ]);
        let content = &message[layout::CONTENT_OFFSET..message.len() - layout::FOOTER_LEN];

        if policy == ChecksumPolicy::Verify {
            let actual = message[message.len() - layout::FOOTER_LEN];
            let expected = checksum::compute(&address, content);
            if actual != expected {
                return Err(SysexError::ChecksumMismatch {
                    offset: base,
                    expected,
                    actual,
                });
            }
        }

        if address.is_reverb() {
            reverb.extend_from_slice(content);
        } else {
            patch.extend_from_slice(content);
        }
        base = index + 1;
    }

    Ok(DumpRegions { patch, reverb })
}

/// Chunk a patch-memory image into addressed, checksummed DT1 messages.
///
/// Chunks are at most [`layout::MAX_CONTENT_LEN`] bytes and addressed at
/// consecutive offsets from [`layout::PATCH_BASE_ADDRESS`].
pub fn split(patch_memory: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        patch_memory.len()
            + patch_memory.len().div_ceil(layout::MAX_CONTENT_LEN)
                * (layout::CONTENT_OFFSET + layout::FOOTER_LEN),
    );

    for (index, content) in patch_memory.chunks(layout::MAX_CONTENT_LEN).enumerate() {
        let offset = (index * layout::MAX_CONTENT_LEN) as u32;
        let address = Address::encode(layout::PATCH_BASE_ADDRESS + offset);

        out.extend_from_slice(&layout::IDENTITY);
        out.extend_from_slice(&address.to_bytes());
        out.extend_from_slice(content);
        out.push(checksum::compute(&address, content));
        out.push(layout::END_OF_EXCLUSIVE);
    }

    out
}
