use std::fmt::Write;

use d50bank_core::bank::layout as bank_layout;
use d50bank_core::sysex::layout as sysex_layout;

/// Hex dump of a SysEx stream: one line per message, capped at the maximum
/// chunk length. Purely diagnostic; never affects conversion output.
pub fn dump_syx(stream: &[u8]) -> String {
    let mut out = String::new();
    let mut base = 0usize;
    for (index, byte) in stream.iter().enumerate() {
        if *byte != 0xF7 {
            continue;
        }
        let end = (index + 1).min(base + sysex_layout::MAX_MESSAGE_LEN);
        write_line(&mut out, &stream[base..end]);
        base = index + 1;
    }
    out
}

/// Hex dump of a bin bank: one line per record, magic header skipped.
pub fn dump_bin(bytes: &[u8]) -> String {
    let mut out = String::new();
    let body = bytes.get(bank_layout::BIN_MAGIC.len()..).unwrap_or_default();
    for record in body.chunks_exact(bank_layout::BIN_PATCH_LEN) {
        write_line(&mut out, record);
    }
    out
}

fn write_line(out: &mut String, bytes: &[u8]) {
    for byte in bytes {
        let _ = write!(out, " {byte:02X}");
    }
    out.push('\n');
}
