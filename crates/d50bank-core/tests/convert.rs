use d50bank_core::bank::layout as bank_layout;
use d50bank_core::sysex::{Address, checksum, layout as sysex_layout};
use d50bank_core::{
    ChecksumPolicy, bin_to_syx, read_bin_bank, read_syx_bank, syx_bank_listing, syx_listing,
    syx_to_bin, write_bin_bank, write_syx_bank,
};

/// One hardware-domain record: all-zero partials, tone names "ABC", patch
/// name "ABC", key mode 5.
fn sample_record() -> Vec<u8> {
    let mut record = vec![0u8; bank_layout::SYX_PATCH_LEN];
    for offset in [bank_layout::SYX_UPPER_COMMON, bank_layout::SYX_LOWER_COMMON] {
        record[offset..offset + 3].copy_from_slice(&[1, 2, 3]);
    }
    record[bank_layout::SYX_PATCH..bank_layout::SYX_PATCH + 3].copy_from_slice(&[1, 2, 3]);
    record[bank_layout::SYX_PATCH + bank_layout::PATCH_KEY_MODE_OFFSET] = 5;
    record
}

fn patterned_record(seed: u8) -> Vec<u8> {
    let mut record = sample_record();
    for offset in [
        bank_layout::SYX_UPPER_PARTIAL_1,
        bank_layout::SYX_UPPER_PARTIAL_2,
        bank_layout::SYX_LOWER_PARTIAL_1,
        bank_layout::SYX_LOWER_PARTIAL_2,
    ] {
        for (i, byte) in record[offset..offset + bank_layout::PARTIAL_LEN]
            .iter_mut()
            .enumerate()
        {
            *byte = seed.wrapping_add(i as u8) & 0x7F;
        }
    }
    record
}

fn reverb_messages() -> Vec<u8> {
    let mut out = Vec::new();
    let base = Address {
        high: sysex_layout::REVERB_ADDRESS_HIGH,
        mid: sysex_layout::REVERB_ADDRESS_MID,
        low: 0,
    }
    .decode();
    let content = [0u8; sysex_layout::MAX_CONTENT_LEN];
    let mut written = 0usize;
    while written < sysex_layout::REVERB_MEMORY_LEN {
        let len = (sysex_layout::REVERB_MEMORY_LEN - written).min(content.len());
        let address = Address::encode(base + written as u32);
        out.extend_from_slice(&sysex_layout::IDENTITY);
        out.extend_from_slice(&address.to_bytes());
        out.extend_from_slice(&content[..len]);
        out.push(checksum::compute(&address, &content[..len]));
        out.push(sysex_layout::END_OF_EXCLUSIVE);
        written += len;
    }
    out
}

fn bank_stream(records: &[Vec<u8>]) -> Vec<u8> {
    assert_eq!(records.len(), bank_layout::BANK_PATCHES);
    let mut patch_memory = Vec::with_capacity(sysex_layout::PATCH_MEMORY_LEN);
    for record in records {
        patch_memory.extend_from_slice(record);
    }
    assert_eq!(patch_memory.len(), sysex_layout::PATCH_MEMORY_LEN);

    let mut stream = d50bank_core::sysex::split(&patch_memory);
    stream.extend_from_slice(&reverb_messages());
    stream
}

fn sample_bank_stream() -> Vec<u8> {
    bank_stream(&vec![sample_record(); bank_layout::BANK_PATCHES])
}

// Extract the patch memory of a stream that carries no reverb section.
fn patch_memory_of(stream: &[u8]) -> Vec<u8> {
    let mut memory = Vec::new();
    for message in stream.chunks(sysex_layout::MAX_MESSAGE_LEN) {
        assert_eq!(message[0], 0xF0);
        assert_eq!(*message.last().unwrap(), 0xF7);
        memory.extend_from_slice(
            &message[sysex_layout::CONTENT_OFFSET..message.len() - sysex_layout::FOOTER_LEN],
        );
    }
    memory
}

#[test]
fn syx_to_bin_end_to_end() {
    let bin = syx_to_bin(&sample_bank_stream(), ChecksumPolicy::Verify).unwrap();

    assert_eq!(bin.len(), bank_layout::BIN_FILE_LEN);
    assert_eq!(&bin[..22], bank_layout::BIN_MAGIC);

    let record = &bin[22..22 + bank_layout::BIN_PATCH_LEN];

    // Duplicated tone name: 18 ASCII name bytes zero-padded to 20.
    assert_eq!(&record[..3], b"ABC");
    assert!(record[3..18].iter().all(|byte| *byte == b' '));
    assert_eq!(&record[18..20], &[0, 0]);

    let patch = &record[bank_layout::BIN_PATCH..];
    assert_eq!(&patch[..3], b"ABC");
    assert_eq!(patch[bank_layout::PATCH_KEY_MODE_OFFSET], 4);
    assert_eq!(&patch[bank_layout::SIGNATURE_RANGE], &bank_layout::SIGNATURE);

    // Common names transcoded in place.
    let upper_common = &record[bank_layout::BIN_UPPER_COMMON..];
    assert_eq!(&upper_common[..10], b"ABC       ");
}

#[test]
fn bin_to_syx_end_to_end() {
    let bin = syx_to_bin(&sample_bank_stream(), ChecksumPolicy::Ignore).unwrap();
    let stream = bin_to_syx(&bin).unwrap();

    // 0x7000 bytes of patch memory in 112 full chunks, no reverb section.
    let messages = sysex_layout::PATCH_MEMORY_LEN / sysex_layout::MAX_CONTENT_LEN;
    assert_eq!(stream.len(), messages * sysex_layout::MAX_MESSAGE_LEN);

    let memory = patch_memory_of(&stream);
    let patch = &memory[bank_layout::SYX_PATCH..bank_layout::SYX_PATCH + bank_layout::PATCH_LEN];

    // Names re-encoded, key mode 5 restored, signature bytes zeroed.
    assert_eq!(&patch[..3], &[1, 2, 3]);
    assert!(patch[3..18].iter().all(|byte| *byte == 0));
    assert_eq!(patch[bank_layout::PATCH_KEY_MODE_OFFSET], 5);
    assert_eq!(&patch[bank_layout::SIGNATURE_RANGE], &[0, 0, 0]);

    let upper_common =
        &memory[bank_layout::SYX_UPPER_COMMON..bank_layout::SYX_UPPER_COMMON + 10];
    assert_eq!(upper_common, &[1, 2, 3, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn partial_bytes_survive_a_full_round_trip() {
    let records: Vec<Vec<u8>> = (0..bank_layout::BANK_PATCHES)
        .map(|slot| patterned_record(slot as u8))
        .collect();
    let bin = syx_to_bin(&bank_stream(&records), ChecksumPolicy::Verify).unwrap();
    let memory = patch_memory_of(&bin_to_syx(&bin).unwrap());

    for (slot, record) in records.iter().enumerate() {
        let base = slot * bank_layout::SYX_PATCH_LEN;
        for offset in [
            bank_layout::SYX_UPPER_PARTIAL_1,
            bank_layout::SYX_UPPER_PARTIAL_2,
            bank_layout::SYX_LOWER_PARTIAL_1,
            bank_layout::SYX_LOWER_PARTIAL_2,
        ] {
            assert_eq!(
                &memory[base + offset..base + offset + bank_layout::PARTIAL_LEN],
                &record[offset..offset + bank_layout::PARTIAL_LEN],
                "partial at slot {slot} offset {offset}"
            );
        }
    }
}

#[test]
fn short_bank_is_rejected() {
    let mut stream = sample_bank_stream();
    // Truncate the reverb tail; the reverb size invariant must fire.
    let cut = stream.len() - sysex_layout::MAX_MESSAGE_LEN;
    stream.truncate(cut);
    let err = syx_to_bin(&stream, ChecksumPolicy::Ignore).unwrap_err();
    assert!(err.to_string().contains("size invariant"));
}

#[test]
fn bin_size_and_magic_are_validated() {
    let bin = syx_to_bin(&sample_bank_stream(), ChecksumPolicy::Ignore).unwrap();

    let err = bin_to_syx(&bin[..bin.len() - 1]).unwrap_err();
    assert!(err.to_string().contains("size invariant"));

    let mut bad_magic = bin.clone();
    bad_magic[0] = b'X';
    let err = bin_to_syx(&bad_magic).unwrap_err();
    assert!(err.to_string().contains("magic"));
}

#[test]
fn out_of_domain_key_mode_byte_converts_without_overflow() {
    let mut bin = syx_to_bin(&sample_bank_stream(), ChecksumPolicy::Ignore).unwrap();
    let key_mode_at =
        bank_layout::BIN_MAGIC.len() + bank_layout::BIN_PATCH + bank_layout::PATCH_KEY_MODE_OFFSET;
    bin[key_mode_at] = 255;

    let memory = patch_memory_of(&bin_to_syx(&bin).unwrap());
    // The byte increment wraps, matching the hardware's byte arithmetic.
    assert_eq!(
        memory[bank_layout::SYX_PATCH + bank_layout::PATCH_KEY_MODE_OFFSET],
        0
    );
}

#[test]
fn record_level_api_matches_stream_conversions() {
    let stream = sample_bank_stream();
    let records = read_syx_bank(&stream, ChecksumPolicy::Verify).unwrap();
    assert_eq!(records.len(), bank_layout::BANK_PATCHES);

    let bin = write_bin_bank(&records).unwrap();
    assert_eq!(bin, syx_to_bin(&stream, ChecksumPolicy::Verify).unwrap());

    let listing = syx_bank_listing(&records).unwrap();
    assert_eq!(listing.patches[0].name, "ABC");
    assert_eq!(listing.patches[0].key_mode, 5);

    let bin_records = read_bin_bank(&bin).unwrap();
    assert_eq!(write_syx_bank(&bin_records), bin_to_syx(&bin).unwrap());
}

#[test]
fn listing_reports_names_and_key_modes() {
    let listing = syx_listing(&sample_bank_stream(), ChecksumPolicy::Ignore).unwrap();
    assert_eq!(listing.patches.len(), bank_layout::BANK_PATCHES);
    assert_eq!(listing.patches[0].slot, 1);
    assert_eq!(listing.patches[0].name, "ABC");
    assert_eq!(listing.patches[0].key_mode, 5);
    assert_eq!(listing.patches[63].slot, 64);

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["patches"][0]["name"], "ABC");
    assert_eq!(json["patches"][0]["key_mode"], 5);
}
