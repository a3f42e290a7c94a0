/// Key-mode remapping between the hardware and the software synth.
///
/// The hardware has nine assignment values (0..=8); the software synth has no
/// SEPARATE mode, so the space collapses to 0..=6: the SEPARATE value 8 folds
/// onto 2 and everything from 3 up shifts down by one.
pub fn to_bin(mode: u8) -> u8 {
    if mode == 8 {
        2
    } else if mode >= 3 {
        mode - 1
    } else {
        mode
    }
}

/// Inverse of [`to_bin`] on the surviving modes: values from 3 up shift back
/// up by one to reopen the SEPARATE slot. The folded mode 8 stays collapsed.
/// A bin file may carry any byte here, so the increment wraps rather than
/// overflowing on out-of-domain input.
pub fn to_syx(mode: u8) -> u8 {
    if mode >= 3 { mode.wrapping_add(1) } else { mode }
}
