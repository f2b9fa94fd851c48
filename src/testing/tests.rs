use super::WavFixture;

#[test]
fn test_fixture_layout() {
    let bytes = WavFixture::pcm(2, 44100, 16).data(vec![0u8; 8]).build();

    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), 16);
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(bytes.len(), 44 + 8);

    // RIFF size covers everything after the first 8 bytes
    let riff_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    assert_eq!(riff_size as usize, bytes.len() - 8);

    // block align for 2 x 16-bit
    assert_eq!(u16::from_le_bytes([bytes[32], bytes[33]]), 4);
}

#[test]
fn test_fixture_pads_odd_chunks() {
    let bytes = WavFixture::new().chunk(*b"junk", vec![1, 2, 3]).build();
    // 4 form + 8 header + 3 payload + 1 pad
    assert_eq!(bytes.len(), 8 + 4 + 8 + 4);
    assert_eq!(bytes[bytes.len() - 1], 0);
}

#[test]
fn test_fixture_mismatched_size_is_verbatim() {
    let bytes = WavFixture::new()
        .chunk_with_size(*b"data", 101, vec![0xAA; 3])
        .build();
    assert_eq!(bytes.len(), 8 + 4 + 8 + 3);
}
