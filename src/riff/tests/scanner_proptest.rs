use std::io::Cursor;

use proptest::prelude::*;

use crate::riff::{ByteReader, ChunkScanner};
use crate::testing::WavFixture;

proptest! {
    #[test]
    fn test_scan_any_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        // Should not panic, return either Ok or Err
        let mut reader = ByteReader::new(Cursor::new(bytes));
        let _ = ChunkScanner::new(&mut reader).scan();
    }

    #[test]
    fn test_scan_any_riff_body(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut bytes = b"RIFF\0\0\0\0WAVE".to_vec();
        bytes.extend_from_slice(&body);
        let mut reader = ByteReader::new(Cursor::new(bytes));
        let _ = ChunkScanner::new(&mut reader).scan();
    }

    #[test]
    fn test_unknown_chunks_are_skipped(
        sizes in proptest::collection::vec(0usize..40, 0..6),
        data_len in 0usize..64,
    ) {
        let mut fixture = WavFixture::new();
        let mut expected_offset = 12u64;
        for (i, size) in sizes.iter().enumerate() {
            fixture = fixture.chunk(*b"junk", vec![u8::try_from(i).unwrap(); *size]);
            expected_offset += 8 + ((*size as u64 + 1) & !1);
        }
        let fixture = fixture.format_chunk(1, 1, 8000, 1, 8).data(vec![0x80; data_len]);
        expected_offset += 8 + 16 + 8;

        let mut reader = ByteReader::new(fixture.cursor());
        let spec = ChunkScanner::new(&mut reader).scan().expect("scan failed");

        prop_assert_eq!(spec.data_offset, expected_offset);
        prop_assert_eq!(spec.sample_count, data_len as u64);
        prop_assert_eq!(reader.position().unwrap(), expected_offset);
    }
}
